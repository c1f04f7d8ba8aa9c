use crate::error::{Result, SarifError};
use crate::types::config::ToolConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "diag-sarif.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".diag-sarif/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/diag-sarif/config.toml";

/// Loads the layered configuration for `dir`.
///
/// Layers, lowest priority first: the global file under `$HOME`, the repo
/// file (or `explicit` when given), and the local override.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<Option<ToolConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(dir, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    dir: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<ToolConfig>> {
    let repo_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(SarifError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = dir.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                tracing::debug!(dir = %dir.display(), "no config file found");
                return Ok(None);
            }
            path
        }
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &dir.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ToolConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SarifError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    let mut overridden = Vec::new();
    overlay_layer(merged, value, "", &mut overridden);
    for key in &overridden {
        tracing::debug!(layer = %path.display(), key = %key, "config key overridden");
    }
    tracing::debug!(
        layer = %path.display(),
        overridden = overridden.len(),
        "merged config layer"
    );
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SarifError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Lays `overlay` over `base` table by table, recording the dotted key of
/// every value an earlier layer had already set.
fn overlay_layer(base: &mut Value, overlay: Value, prefix: &str, overridden: &mut Vec<String>) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                let dotted = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match base_table.get_mut(&key) {
                    Some(existing) if existing.is_table() && value.is_table() => {
                        overlay_layer(existing, value, &dotted, overridden)
                    }
                    Some(existing) => {
                        overridden.push(dotted);
                        *existing = value;
                    }
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
