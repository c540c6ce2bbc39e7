use thiserror::Error;

/// Errors related to response (de)serialization.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to serialize response: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Errors related to response templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unsupported template format: '{0}'")]
    UnsupportedFormat(String),

    #[error("invalid TOML template: {0}")]
    Toml(String),

    #[error("invalid JSON template: {0}")]
    Json(String),

    #[error("invalid YAML template: {0}")]
    Yaml(String),

    #[error("{0} sets both text and ssml")]
    ConflictingSpeech(&'static str),
}
