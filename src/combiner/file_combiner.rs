use crate::combiner::report::{CombineProgress, CombineReport, EntryOutcome, EntryRecord};
use crate::error::{CombineError, Result};
use crate::scanner::SourceFile;
use chrono::Utc;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sequentially writes enumerated files into one output stream, each
/// preceded by a `===== path =====` delimiter. Only the output stream
/// itself can fail the run; every per-file problem is absorbed into the
/// output and the report.
pub struct FileCombiner {
    buffer_size: usize,
}

impl FileCombiner {
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024,
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(4096);
        self
    }

    /// Combine `entries` into `output_path`, truncating any previous
    /// content. `progress_callback` fires before each entry is attempted;
    /// `notice_callback` fires after each entry resolves, with its record.
    pub fn combine(
        &self,
        entries: &[SourceFile],
        output_path: &Path,
        progress_callback: Option<&dyn Fn(&CombineProgress)>,
        notice_callback: Option<&dyn Fn(&EntryRecord)>,
    ) -> Result<CombineReport> {
        let file = fs::File::create(output_path).map_err(|e| CombineError::OutputOpen {
            path: output_path.display().to_string(),
            source: e,
        })?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        let mut progress = CombineProgress::new(entries.len());
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            if let Some(callback) = progress_callback {
                callback(&progress);
            }

            let record = self.write_entry(entry, &mut writer, &mut progress)?;

            if let Some(callback) = notice_callback {
                callback(&record);
            }
            records.push(record);
        }

        writer.flush()?;

        if let Some(callback) = progress_callback {
            callback(&progress);
        }

        let count = |outcome: EntryOutcome| records.iter().filter(|r| r.outcome == outcome).count();

        Ok(CombineReport {
            output_path: output_path.display().to_string(),
            files_added: count(EntryOutcome::Written),
            files_missing: count(EntryOutcome::SkippedMissing),
            files_errored: count(EntryOutcome::WrittenAsError),
            bytes_written: progress.bytes_written,
            duration: progress.elapsed(),
            completed_at: Utc::now(),
            entries: records,
        })
    }

    fn write_entry<W: Write>(
        &self,
        entry: &SourceFile,
        writer: &mut W,
        progress: &mut CombineProgress,
    ) -> Result<EntryRecord> {
        let path = entry.display_path();

        // The file could have been deleted since enumeration; check again
        // at write time and skip silently in the output if so.
        if !entry.path.exists() {
            progress.advance(path.clone(), 0);
            return Ok(EntryRecord {
                path,
                outcome: EntryOutcome::SkippedMissing,
                detail: None,
            });
        }

        match fs::read(&entry.path) {
            Ok(bytes) => {
                // Best-effort text recovery: invalid sequences are
                // substituted rather than failing the entry.
                let text = String::from_utf8_lossy(&bytes);
                write!(writer, "\n\n===== {} =====\n\n", path)?;
                writer.write_all(text.as_bytes())?;
                progress.advance(path.clone(), text.len() as u64);
                Ok(EntryRecord {
                    path,
                    outcome: EntryOutcome::Written,
                    detail: None,
                })
            }
            Err(err) => {
                let detail = err.to_string();
                write!(writer, "\n\n===== ERROR READING FILE: {} =====\n\n", path)?;
                write!(writer, "{}", detail)?;
                progress.advance(path.clone(), detail.len() as u64);
                Ok(EntryRecord {
                    path,
                    outcome: EntryOutcome::WrittenAsError,
                    detail: Some(detail),
                })
            }
        }
    }
}

impl Default for FileCombiner {
    fn default() -> Self {
        Self::new()
    }
}
