use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codecombine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Combine project source files into a single text file")]
#[command(
    long_about = "CodeCombine walks a set of project directories, keeps the files whose \
                       names match a suffix filter, and concatenates their contents into one \
                       annotated text file, one delimiter line per source file."
)]
#[command(after_help = "EXAMPLES:\n  \
    codecombine\n  \
    codecombine backend-tests\n  \
    codecombine --roots src,tests --extensions .rs,.toml --output snapshot.txt\n  \
    codecombine all-code --config codecombine.toml --no-pause\n\n\
    Profiles reproduce the two standing export jobs; every setting can be overridden.")]
pub struct Cli {
    /// Built-in combine profile
    #[arg(value_enum, default_value_t = Profile::AllCode)]
    pub profile: Profile,

    /// Root directories to scan (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub roots: Option<Vec<PathBuf>>,

    /// File name suffixes to include
    #[arg(
        short,
        long,
        help = "File name suffixes to include (e.g. .java,.xml); matched case-sensitively"
    )]
    pub extensions: Option<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Skip the interactive pause before exit
    #[arg(long)]
    pub no_pause: bool,

    /// Show what would be combined without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a sample configuration file
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Backend and frontend sources into all_code.txt
    AllCode,
    /// Backend and test sources into backfront_&_test_code.txt
    BackendTests,
}

impl Profile {
    pub fn base_config(&self) -> Config {
        match self {
            Profile::AllCode => Config::all_code(),
            Profile::BackendTests => Config::backend_tests(),
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match self.config.as_ref() {
            Some(path) => Config::load_from_file(path)?,
            None => self.profile.base_config(),
        };

        config.merge_with_cli_args(&self.create_cli_overrides());
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        // --no-pause only ever disables the pause; absence means the
        // profile or config file decides.
        let pause = if self.no_pause { Some(false) } else { None };

        CliOverrides::new()
            .with_roots(self.roots.clone())
            .with_extensions(self.extensions.clone())
            .with_output_file(self.output.clone())
            .with_pause_on_exit(pause)
    }
}
