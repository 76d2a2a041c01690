pub mod file_combiner;
pub mod report;

pub use file_combiner::FileCombiner;
pub use report::{CombineProgress, CombineReport, EntryOutcome, EntryRecord};
