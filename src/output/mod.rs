//! Output formatters for analysis reports

pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
