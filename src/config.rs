use crate::error::{CombineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Directory layout of the project this tool grew up alongside. The built-in
// profiles reproduce its two standing export jobs.
const BACKEND_ROOT: &str = "bookstorage/src/main/java/org/application/bookstorage";
const FRONTEND_ROOT: &str = "bookstorage/src/main/resources/static";
const TEST_ROOT: &str = "bookstorage/src/test/java/org/application/bookstorage";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    pub roots: Vec<PathBuf>,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub file: PathBuf,
    #[serde(default = "default_pause")]
    pub pause_on_exit: bool,
}

fn default_pause() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::all_code()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Config::all_code().scan
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Config::all_code().output
    }
}

impl Config {
    /// Backend and frontend sources into `all_code.txt`.
    pub fn all_code() -> Self {
        Self {
            scan: ScanConfig {
                roots: vec![PathBuf::from(BACKEND_ROOT), PathBuf::from(FRONTEND_ROOT)],
                extensions: vec![
                    ".java".to_string(),
                    ".xml".to_string(),
                    ".html".to_string(),
                    ".css".to_string(),
                    ".js".to_string(),
                ],
            },
            output: OutputConfig {
                file: PathBuf::from("all_code.txt"),
                pause_on_exit: true,
            },
        }
    }

    /// Backend and test sources into `backfront_&_test_code.txt`.
    pub fn backend_tests() -> Self {
        Self {
            scan: ScanConfig {
                roots: vec![PathBuf::from(BACKEND_ROOT), PathBuf::from(TEST_ROOT)],
                extensions: vec![".java".to_string(), ".xml".to_string()],
            },
            output: OutputConfig {
                file: PathBuf::from("backfront_&_test_code.txt"),
                pause_on_exit: true,
            },
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CombineError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CombineError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| CombineError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref roots) = cli_args.roots {
            self.scan.roots = roots.clone();
        }

        if let Some(ref extensions) = cli_args.extensions {
            self.scan.extensions = extensions
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(normalize_extension)
                .collect();
        }

        if let Some(ref output_file) = cli_args.output_file {
            self.output.file = output_file.clone();
        }

        if let Some(pause) = cli_args.pause_on_exit {
            self.output.pause_on_exit = pause;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| CombineError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| CombineError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.roots.is_empty() {
            return Err(CombineError::Config {
                message: "At least one root directory must be specified".to_string(),
            });
        }

        if self.scan.extensions.is_empty() {
            return Err(CombineError::Config {
                message: "At least one file extension must be specified".to_string(),
            });
        }

        if self.scan.extensions.iter().any(|e| e == ".") {
            return Err(CombineError::Config {
                message: "File extensions must not be a bare dot".to_string(),
            });
        }

        if self.output.file.as_os_str().is_empty() {
            return Err(CombineError::Config {
                message: "Output file path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

/// Suffixes are matched verbatim and case-sensitively; the only
/// normalization is making the leading dot optional on input.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub roots: Option<Vec<PathBuf>>,
    pub extensions: Option<String>,
    pub output_file: Option<PathBuf>,
    pub pause_on_exit: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots(mut self, roots: Option<Vec<PathBuf>>) -> Self {
        self.roots = roots;
        self
    }

    pub fn with_extensions(mut self, extensions: Option<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn with_pause_on_exit(mut self, pause: Option<bool>) -> Self {
        self.pause_on_exit = pause;
        self
    }
}
