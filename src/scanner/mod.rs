pub mod source_scanner;
pub mod suffix_filter;

pub use source_scanner::{ScanResult, ScanStatistics, SourceFile, SourceScanner};
pub use suffix_filter::SuffixFilter;
