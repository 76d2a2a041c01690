use crate::config::ScanConfig;
use crate::scanner::suffix_filter::SuffixFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered file. The path keeps whatever prefix the configured root
/// had, so relative roots yield relative paths and that exact spelling is
/// what ends up in delimiter lines and console notices.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub root: PathBuf,
    pub size: u64,
}

impl SourceFile {
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<SourceFile>,
    pub warnings: Vec<String>,
}

pub struct SourceScanner {
    roots: Vec<PathBuf>,
    filter: SuffixFilter,
}

impl SourceScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            roots: config.roots.clone(),
            filter: SuffixFilter::new(&config.extensions),
        }
    }

    /// Enumerate matching files across all roots, in root order. Within a
    /// root, entries are sorted by path so runs are reproducible across
    /// platforms. Roots are independent: a path reachable through two
    /// configured roots is listed once per root, not deduplicated.
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::default();

        for root in &self.roots {
            self.scan_root(root, &mut result);
        }

        result
    }

    fn scan_root(&self, root: &Path, result: &mut ScanResult) {
        // A configured root that is absent contributes nothing; the run
        // still proceeds over the remaining roots.
        if !root.is_dir() {
            result
                .warnings
                .push(format!("Root directory not found: {}", root.display()));
            return;
        }

        let mut found = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    result
                        .warnings
                        .push(format!("Scan error under {}: {}", root.display(), err));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.filter.matches(entry.path()) {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            found.push(SourceFile {
                path: entry.path().to_path_buf(),
                root: root.to_path_buf(),
                size,
            });
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        result.files.extend(found);
    }

    pub fn statistics(&self, files: &[SourceFile]) -> ScanStatistics {
        let total_files = files.len();
        let total_size = files.iter().map(|f| f.size).sum();

        let mut files_by_suffix = std::collections::HashMap::new();
        for file in files {
            let suffix = self
                .filter
                .matching_suffix(&file.path)
                .unwrap_or("unmatched")
                .to_string();
            *files_by_suffix.entry(suffix).or_insert(0) += 1;
        }

        ScanStatistics {
            total_files,
            total_size,
            files_by_suffix,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanStatistics {
    pub total_files: usize,
    pub total_size: u64,
    pub files_by_suffix: std::collections::HashMap<String, usize>,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Scan results:\n  Total files: {}\n  Total size: {}\n",
            self.total_files,
            format_bytes(self.total_size)
        );

        if !self.files_by_suffix.is_empty() {
            summary.push_str("  Files by suffix:\n");
            let mut suffixes: Vec<_> = self.files_by_suffix.iter().collect();
            suffixes.sort_by(|a, b| b.1.cmp(a.1));

            for (suffix, count) in suffixes {
                summary.push_str(&format!("    {}: {} files\n", suffix, count));
            }
        }

        summary
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
