pub mod cli;
pub mod combiner;
pub mod config;
pub mod error;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat, Profile};
pub use combiner::{CombineProgress, CombineReport, EntryOutcome, EntryRecord, FileCombiner};
pub use config::{CliOverrides, Config, OutputConfig, ScanConfig};
pub use error::{CombineError, Result, UserFriendlyError};
pub use scanner::{ScanResult, SourceFile, SourceScanner, SuffixFilter};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::{Path, PathBuf};

/// Main library interface: one parameterized combine run, configured by a
/// profile, a config file, CLI overrides, or any mix of the three.
pub struct CodeCombine {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl CodeCombine {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let progress_enabled = !quiet && output_mode == OutputMode::Human;

        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            progress_manager: ProgressManager::new(progress_enabled),
        }
    }

    /// Create a CodeCombine instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run the full scan-then-combine pipeline: enumeration completes
    /// before the first byte is written.
    pub fn run(&self) -> Result<CombineReport> {
        self.output_formatter.start_operation("Combining source files");

        let scan = self.scan_sources();

        if scan.files.is_empty() {
            self.output_formatter
                .warning("No matching files found; the output file will be empty");
        } else {
            self.output_formatter
                .info(&format!("Found {} matching files", scan.files.len()));
        }

        let report = self.combine_files(&scan.files)?;

        self.output_formatter.print_combine_summary(&report);

        Ok(report)
    }

    /// Enumerate matching files without touching the output. Scan warnings
    /// are reported here so dry runs surface them too.
    pub fn scan_sources(&self) -> ScanResult {
        let scanner = SourceScanner::new(&self.config.scan);
        let result = scanner.scan();

        for warning in &result.warnings {
            self.output_formatter.warning(warning);
        }

        let stats = scanner.statistics(&result.files);
        self.output_formatter.debug(&stats.display_summary());

        result
    }

    fn combine_files(&self, files: &[SourceFile]) -> Result<CombineReport> {
        let pb = self.progress_manager.create_file_progress(files.len() as u64);

        let progress_callback =
            |progress: &CombineProgress| ui::progress::update_file_progress(&pb, progress);
        let notice_callback = |record: &EntryRecord| {
            self.progress_manager
                .suspend(|| self.output_formatter.entry_notice(record));
        };

        let combiner = FileCombiner::new();
        let report = combiner.combine(
            files,
            &self.config.output.file,
            Some(&progress_callback),
            Some(&notice_callback),
        )?;

        ui::progress::finish_progress_with_summary(
            &pb,
            &format!("Combined {} files", report.files_added),
            report.duration,
        );

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(CombineError::Io)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// The interactive pause the original jobs ended with; honors the
    /// configuration and degrades to a no-op off a terminal.
    pub fn pause_before_exit(&self) {
        if self.config.output.pause_on_exit {
            self.output_formatter.pause_for_exit();
        }
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &CombineError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to combine files with minimal setup
pub fn combine_simple(
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
    output_file: PathBuf,
) -> Result<CombineReport> {
    let config = Config {
        scan: ScanConfig { roots, extensions },
        output: OutputConfig {
            file: output_file,
            pause_on_exit: false,
        },
    };
    config.validate()?;

    let app = CodeCombine::new(config, OutputMode::Plain, 0, true);
    app.run()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_codecombine_creation() {
        let config = Config::default();
        let app = CodeCombine::new(config, OutputMode::Human, 1, false);
        assert_eq!(app.config().scan.extensions.len(), 5);
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        CodeCombine::generate_sample_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[scan]"));
        assert!(content.contains("[output]"));
    }

    #[test]
    fn test_combine_simple_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("src");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("Book.java"), "class Book {}").unwrap();
        fs::write(root.join("notes.txt"), "ignore me").unwrap();
        let output = temp_dir.path().join("all_code.txt");

        let report = combine_simple(
            vec![root],
            vec![".java".to_string()],
            output.clone(),
        )
        .unwrap();

        assert_eq!(report.files_added, 1);
        let combined = fs::read_to_string(&output).unwrap();
        assert!(combined.contains("class Book {}"));
        assert!(!combined.contains("ignore me"));
    }

    #[test]
    fn test_combine_simple_rejects_empty_roots() {
        let result = combine_simple(
            Vec::new(),
            vec![".java".to_string()],
            PathBuf::from("out.txt"),
        );
        assert!(matches!(result, Err(CombineError::Config { .. })));
    }

    #[test]
    fn test_run_scans_before_writing() {
        // The output file sits inside a scanned root; it must not be
        // picked up by the scan of the run that creates it.
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        fs::write(root.join("only.java"), "only").unwrap();
        let output = root.join("combined.java");

        let report = combine_simple(
            vec![root],
            vec![".java".to_string()],
            output.clone(),
        )
        .unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.entries.len(), 1);
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
