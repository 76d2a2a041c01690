use clap::Parser;
use codecombine::{Cli, CodeCombine, CombineError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match CodeCombine::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&app);
    }

    match app.run() {
        Ok(report) => {
            app.output_formatter().print_completion(&report);
            app.pause_before_exit();

            if report.has_issues() {
                3 // Completed, but some entries were skipped or errored
            } else {
                0
            }
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &CombineError) -> i32 {
    match error {
        CombineError::Config { .. } => 2,
        _ => 1, // General error (output open failure, mid-run IO failure)
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "codecombine.toml".to_string());

    match CodeCombine::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  codecombine --config {}", config_path);
            println!("\nEdit the file to customize roots, extensions, and the output path.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(app: &CodeCombine) -> i32 {
    let formatter = app.output_formatter();
    let config = app.config();

    formatter.info("DRY RUN MODE - nothing will be written");
    formatter.print_separator();

    println!("  Roots:");
    for root in &config.scan.roots {
        println!("    {}", root.display());
    }
    println!("  Extensions: {}", config.scan.extensions.join(", "));
    println!("  Output file: {}", config.output.file.display());

    formatter.print_separator();

    let scan = app.scan_sources();
    println!("  Files that would be combined: {}", scan.files.len());
    for file in &scan.files {
        println!("    {}", file.display_path());
    }

    formatter.print_separator();
    formatter.success("Dry run completed");

    0
}

fn print_startup_error(error: &CombineError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
