//! Diagnostic to SARIF conversion.
//!
//! Each diagnostic becomes one SARIF result; results are grouped into one
//! run per producing compiler, and the runs are wrapped into a SARIF 2.1.0
//! document.

pub mod region;
pub mod result;
pub mod runs;
pub mod sarif;
pub mod severity;
pub mod uri;

use crate::error::{Result, SarifError};
use crate::types::config::DEFAULT_PLACEHOLDER_TOOL;
use std::path::PathBuf;

pub use sarif::{build_document, encode, to_sarif};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Absolute directory that artifact URIs are made relative to.
    pub root: PathBuf,
    pub pretty: bool,
    /// Driver name of the run emitted when there are no diagnostics.
    pub placeholder_tool: String,
}

impl ConvertOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pretty: false,
            placeholder_tool: DEFAULT_PLACEHOLDER_TOOL.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.root.is_absolute() {
            return Err(SarifError::InvalidRoot(self.root.display().to_string()));
        }
        Ok(())
    }
}
