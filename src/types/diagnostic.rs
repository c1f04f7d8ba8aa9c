use crate::error::SarifError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Hint,
    Information,
}

impl FromStr for Severity {
    type Err = SarifError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "hint" => Ok(Severity::Hint),
            "information" => Ok(Severity::Information),
            other => Err(SarifError::UnknownSeverity(other.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Hint => write!(f, "hint"),
            Severity::Information => write!(f, "information"),
        }
    }
}

/// Where a diagnostic points inside its file, in whichever shape the
/// producing compiler reported it. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Absent,
    Line(u32),
    LineColumn(u32, u32),
    Range(u32, u32, u32, u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub compiler_name: String,
    /// Raw message bytes; decoded lossily when the SARIF result is built.
    pub message: Vec<u8>,
    pub severity: Severity,
    pub file: PathBuf,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(
        compiler_name: impl Into<String>,
        message: impl Into<Vec<u8>>,
        severity: Severity,
        file: impl Into<PathBuf>,
        position: Position,
    ) -> Self {
        Self {
            compiler_name: compiler_name.into(),
            message: message.into(),
            severity,
            file: file.into(),
            position,
        }
    }
}
