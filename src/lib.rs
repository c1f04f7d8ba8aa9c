//! Conversion of compiler diagnostics into SARIF 2.1.0 documents.

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use error::{Result, SarifError};
pub use report::{to_sarif, ConvertOptions};
pub use types::diagnostic::{Diagnostic, Position, Severity};
