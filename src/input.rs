//! Decoding of diagnostics handed over by the build pipeline as JSON.
//!
//! The input is a JSON array of objects:
//!
//! ```json
//! [{"compiler_name": "Elixir", "severity": "warning", "message": "unused var",
//!   "file": "/proj/lib/x.ex", "position": [10, 3]}]
//! ```
//!
//! `message` may also be an array of bytes so that non-UTF-8 compiler output
//! reaches the converter intact.

use crate::error::{Result, SarifError};
use crate::types::diagnostic::{Diagnostic, Position};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct RawDiagnostic {
    compiler_name: String,
    message: RawMessage,
    severity: String,
    file: PathBuf,
    #[serde(default)]
    position: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMessage {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<RawMessage> for Vec<u8> {
    fn from(message: RawMessage) -> Self {
        match message {
            RawMessage::Text(text) => text.into_bytes(),
            RawMessage::Bytes(bytes) => bytes,
        }
    }
}

impl RawDiagnostic {
    fn into_diagnostic(self) -> Result<Diagnostic> {
        Ok(Diagnostic {
            severity: self.severity.parse()?,
            position: position_from_json(&self.position)?,
            compiler_name: self.compiler_name,
            message: self.message.into(),
            file: self.file,
        })
    }
}

pub fn position_from_json(value: &Value) -> Result<Position> {
    match value {
        Value::Null => Ok(Position::Absent),
        Value::Number(_) => Ok(Position::Line(coordinate(value)?)),
        Value::Array(items) => match items.as_slice() {
            [line, column] => Ok(Position::LineColumn(coordinate(line)?, coordinate(column)?)),
            [start_line, start_column, end_line, end_column] => Ok(Position::Range(
                coordinate(start_line)?,
                coordinate(start_column)?,
                coordinate(end_line)?,
                coordinate(end_column)?,
            )),
            _ => Err(SarifError::InvalidPosition(value.to_string())),
        },
        _ => Err(SarifError::InvalidPosition(value.to_string())),
    }
}

fn coordinate(value: &Value) -> Result<u32> {
    value
        .as_u64()
        .and_then(|number| u32::try_from(number).ok())
        .ok_or_else(|| SarifError::InvalidPosition(value.to_string()))
}

/// Decodes a JSON diagnostics array. Fails on the first bad entry; nothing
/// is returned for the entries that did decode.
pub fn parse_diagnostics(json: &[u8]) -> Result<Vec<Diagnostic>> {
    let entries: Vec<Value> = serde_json::from_slice(json)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<RawDiagnostic>(entry)
                .map_err(SarifError::Json)
                .and_then(RawDiagnostic::into_diagnostic)
                .map_err(|source| SarifError::InvalidDiagnostic {
                    index,
                    source: Box::new(source),
                })
        })
        .collect()
}

pub fn read_diagnostics(path: Option<&Path>) -> Result<Vec<Diagnostic>> {
    let mut buffer = Vec::new();
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(SarifError::InputNotFound(path.display().to_string()));
            }
            tracing::debug!(path = %path.display(), "reading diagnostics");
            buffer = std::fs::read(path)?;
        }
        _ => {
            tracing::debug!("reading diagnostics from stdin");
            std::io::stdin().read_to_end(&mut buffer)?;
        }
    }

    let diagnostics = parse_diagnostics(&buffer)?;
    tracing::info!(count = diagnostics.len(), "decoded diagnostics");
    Ok(diagnostics)
}
