use thiserror::Error;

#[derive(Error, Debug)]
pub enum SarifError {
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("unsupported position shape: {0}")]
    InvalidPosition(String),

    #[error("root must be an absolute path: {0:?}")]
    InvalidRoot(String),

    #[error("diagnostic #{index}: {source}")]
    InvalidDiagnostic {
        index: usize,
        #[source]
        source: Box<SarifError>,
    },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SarifError>;
