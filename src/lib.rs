//! Resume ATS analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod industries;
pub mod input;
pub mod analysis;
pub mod output;
pub mod store;

pub use analysis::engine::{AnalysisEngine, AnalysisReport};
pub use config::Config;
pub use error::{AtsAnalyzerError, Result};
