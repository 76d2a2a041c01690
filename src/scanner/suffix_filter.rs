use crate::config::normalize_extension;
use std::path::Path;

/// Matches file names by literal suffix, the way the export jobs always
/// have: case-sensitive, and deliberately not a real extension parser, so
/// `archive.tar.xml` is accepted by `.xml`.
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    pub fn new(extensions: &[String]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();

        Self { suffixes }
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.matching_suffix(path).is_some()
    }

    /// The suffix that admitted this path, if any. First configured suffix
    /// wins when several would match.
    pub fn matching_suffix(&self, path: &Path) -> Option<&str> {
        let name = path.file_name().and_then(|n| n.to_str())?;
        self.suffixes
            .iter()
            .find(|suffix| name.ends_with(suffix.as_str()))
            .map(|s| s.as_str())
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}
