use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How a single enumerated entry resolved. Each entry is attempted exactly
/// once: it is either written, skipped because it vanished between scan and
/// write, or replaced inline by an error marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOutcome {
    Written,
    SkippedMissing,
    WrittenAsError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub path: String,
    pub outcome: EntryOutcome,
    /// Error description for `WrittenAsError`; the same text that was
    /// written into the output in place of the file content.
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineReport {
    pub output_path: String,
    pub files_added: usize,
    pub files_missing: usize,
    pub files_errored: usize,
    pub bytes_written: u64,
    pub duration: Duration,
    pub completed_at: DateTime<Utc>,
    pub entries: Vec<EntryRecord>,
}

impl CombineReport {
    pub fn has_issues(&self) -> bool {
        self.files_missing > 0 || self.files_errored > 0
    }
}

#[derive(Debug, Clone)]
pub struct CombineProgress {
    pub files_processed: usize,
    pub total_files: usize,
    pub bytes_written: u64,
    pub current_file: Option<String>,
    pub start_time: Instant,
}

impl CombineProgress {
    pub fn new(total_files: usize) -> Self {
        Self {
            files_processed: 0,
            total_files,
            bytes_written: 0,
            current_file: None,
            start_time: Instant::now(),
        }
    }

    pub fn advance(&mut self, filename: String, bytes: u64) {
        self.files_processed += 1;
        self.bytes_written += bytes;
        self.current_file = Some(filename);
    }

    pub fn percentage(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.files_processed as f64 / self.total_files as f64) * 100.0
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
