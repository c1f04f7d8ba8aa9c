//! Serializable SARIF 2.1.0 subset emitted by the converter.
//!
//! Field declaration order is the order fields appear in the encoded JSON.

use serde::{Deserialize, Serialize};

pub const SARIF_VERSION: &str = "2.1.0";
pub const SARIF_SCHEMA: &str =
    "https://docs.oasis-open.org/sarif/sarif/v2.1.0/errata01/os/schemas/sarif-schema-2.1.0.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifDocument {
    pub version: String,
    #[serde(rename = "$schema")]
    pub schema: String,
    pub runs: Vec<Run>,
}

impl SarifDocument {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            version: SARIF_VERSION.to_string(),
            schema: SARIF_SCHEMA.to_string(),
            runs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub tool: Tool,
    pub results: Vec<SarifResult>,
}

impl Run {
    pub fn new(driver_name: impl Into<String>, results: Vec<SarifResult>) -> Self {
        Self {
            tool: Tool {
                driver: Driver {
                    name: driver_name.into(),
                    rules: Vec::new(),
                },
            },
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub driver: Driver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    /// Rule metadata is never populated.
    pub rules: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifResult {
    pub message: Message,
    pub kind: Kind,
    pub level: Level,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Fail,
    Informational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    Note,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub physical_location: PhysicalLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocation {
    pub artifact_location: ArtifactLocation,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_uses_camel_case_keys() {
        let region = Region {
            start_line: 1,
            start_column: 2,
            end_line: 3,
            end_column: 4,
        };
        let rendered = serde_json::to_string(&region).expect("region should serialize");
        assert_eq!(
            rendered,
            r#"{"startLine":1,"startColumn":2,"endLine":3,"endColumn":4}"#
        );
    }

    #[test]
    fn document_header_fields_come_first() {
        let rendered =
            serde_json::to_string(&SarifDocument::new(vec![])).expect("document should serialize");
        assert!(rendered.starts_with(r#"{"version":"2.1.0","$schema":"https://"#));
    }

    #[test]
    fn level_none_serializes_as_string() {
        let rendered = serde_json::to_string(&Level::None).expect("level should serialize");
        assert_eq!(rendered, "\"none\"");
    }
}
