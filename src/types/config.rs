use crate::error::SarifError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PLACEHOLDER_TOOL: &str = "Elixir";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolConfig {
    pub sarif: Option<SarifConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SarifConfig {
    pub root: Option<PathBuf>,
    pub placeholder_tool: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

impl ToolConfig {
    pub fn root(&self) -> Option<&PathBuf> {
        self.sarif.as_ref().and_then(|sarif| sarif.root.as_ref())
    }

    pub fn placeholder_tool(&self) -> &str {
        self.sarif
            .as_ref()
            .and_then(|sarif| sarif.placeholder_tool.as_deref())
            .unwrap_or(DEFAULT_PLACEHOLDER_TOOL)
    }

    pub fn pretty(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|output| output.pretty)
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), SarifError> {
        if let Some(sarif) = &self.sarif {
            if let Some(root) = &sarif.root {
                if !root.is_absolute() {
                    return Err(SarifError::ConfigParse(format!(
                        "sarif.root must be an absolute path (found {})",
                        root.display()
                    )));
                }
            }
            if let Some(name) = &sarif.placeholder_tool {
                if name.trim().is_empty() {
                    return Err(SarifError::ConfigParse(
                        "sarif.placeholder_tool must be non-empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ToolConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.root().is_none());
        assert_eq!(cfg.placeholder_tool(), DEFAULT_PLACEHOLDER_TOOL);
        assert!(!cfg.pretty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[sarif]
root = "/srv/app"
placeholder_tool = "Mix"

[output]
pretty = true
"#;
        let cfg: ToolConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.root(), Some(&PathBuf::from("/srv/app")));
        assert_eq!(cfg.placeholder_tool(), "Mix");
        assert!(cfg.pretty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_relative_root() {
        let cfg: ToolConfig = toml::from_str(
            r#"
[sarif]
root = "lib"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("relative root should be rejected");
        assert!(err.to_string().contains("sarif.root must be an absolute path"));
    }

    #[test]
    fn validate_rejects_blank_placeholder() {
        let cfg: ToolConfig = toml::from_str(
            r#"
[sarif]
placeholder_tool = "  "
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
