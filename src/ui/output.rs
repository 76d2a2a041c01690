use crate::combiner::{CombineReport, EntryOutcome, EntryRecord};
use crate::error::{CombineError, UserFriendlyError};
use console::{style, Emoji, Term};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        }
    }
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");

pub struct OutputFormatter {
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Success, message),
            OutputMode::Json => self.print_json_message("success", message),
            OutputMode::Plain => println!("SUCCESS: {}", message),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    /// One line per processed entry. These lines are the operator-facing
    /// record of the run, so they are not gated on verbosity.
    pub fn entry_notice(&self, record: &EntryRecord) {
        if self.quiet {
            return;
        }

        let line = match record.outcome {
            EntryOutcome::Written => format!("Added: {}", record.path),
            EntryOutcome::SkippedMissing => format!("File not found: {}", record.path),
            EntryOutcome::WrittenAsError => format!("Error reading: {}", record.path),
        };

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    match record.outcome {
                        EntryOutcome::Written => println!("{}", style(&line).green()),
                        EntryOutcome::SkippedMissing => println!("{}", style(&line).yellow()),
                        EntryOutcome::WrittenAsError => println!("{}", style(&line).red()),
                    }
                } else {
                    println!("{}", line);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "entry",
                    "path": record.path,
                    "outcome": record.outcome,
                    "detail": record.detail,
                }));
            }
            OutputMode::Plain => println!("{}", line),
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &CombineError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    println!();
                    if self.use_colors {
                        println!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Summary and reporting
    pub fn print_combine_summary(&self, report: &CombineReport) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_summary(report),
            OutputMode::Json => self.print_json_summary(report),
            OutputMode::Plain => self.print_plain_summary(report),
        }
    }

    /// The completion line the operator always sees, naming the output.
    pub fn print_completion(&self, report: &CombineReport) {
        let line = format!("Files combined and saved to: {}", report.output_path);
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}{}", CHECKMARK, style(&line).green().bold());
                } else {
                    println!("✓ {}", line);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "completion",
                    "output_path": report.output_path,
                    "files_added": report.files_added,
                }));
            }
            OutputMode::Plain => println!("{}", line),
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(60)).dim());
                } else {
                    println!("{}", "-".repeat(60));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(60));
            }
            OutputMode::Json => {} // No separator in JSON mode
        }
    }

    /// Interactive pause preserved from the original jobs. Only makes sense
    /// on an attended human terminal; everywhere else it is a no-op.
    pub fn pause_for_exit(&self) {
        if self.quiet || self.mode != OutputMode::Human || !console::user_attended() {
            return;
        }

        print!("Press Enter to exit...");
        let _ = std::io::stdout().flush();
        let _ = self.term.read_line();
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_summary(&self, report: &CombineReport) {
        println!();
        self.print_separator();

        if self.use_colors {
            println!(
                "{} {}",
                style("Combine completed!").green().bold(),
                CHECKMARK
            );
        } else {
            println!("✓ Combine completed!");
        }

        println!();
        println!(
            "  Files added:   {}",
            if self.use_colors {
                style(report.files_added).cyan().bold().to_string()
            } else {
                report.files_added.to_string()
            }
        );
        println!(
            "  Bytes written: {}",
            if self.use_colors {
                style(format_bytes(report.bytes_written))
                    .cyan()
                    .bold()
                    .to_string()
            } else {
                format_bytes(report.bytes_written)
            }
        );
        println!(
            "  Time taken:    {}",
            if self.use_colors {
                style(format_duration(report.duration)).cyan().bold().to_string()
            } else {
                format_duration(report.duration)
            }
        );

        if report.files_missing > 0 {
            println!("  Missing files: {}", report.files_missing);
        }
        if report.files_errored > 0 {
            println!("  Read errors:   {}", report.files_errored);
        }

        self.print_separator();
    }

    fn print_json_summary(&self, report: &CombineReport) {
        let summary = serde_json::json!({
            "type": "summary",
            "output_path": report.output_path,
            "files_added": report.files_added,
            "files_missing": report.files_missing,
            "files_errored": report.files_errored,
            "bytes_written": report.bytes_written,
            "duration_ms": report.duration.as_millis() as u64,
            "completed_at": report.completed_at.to_rfc3339(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_plain_summary(&self, report: &CombineReport) {
        println!("COMPLETED: Combine");
        println!("Files added: {}", report.files_added);
        println!("Bytes written: {}", report.bytes_written);
        println!("Duration: {:?}", report.duration);
        if report.files_missing > 0 {
            println!("Missing files: {}", report.files_missing);
        }
        if report.files_errored > 0 {
            println!("Read errors: {}", report.files_errored);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
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

fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
