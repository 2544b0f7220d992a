use crate::models::FieldName;
use thiserror::Error;

/// Shown when a transport failure carries no message of its own.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to get predictions";

/// Rejections raised by a flow before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Please select an image file")]
    NoFileSelected,

    #[error("Selected file is empty")]
    EmptyFile,

    #[error("A submission is already in progress")]
    AlreadyInFlight,

    #[error("Unknown input field: {0}")]
    UnknownField(String),

    #[error("{} is required", .0.display_name())]
    MissingField(FieldName),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Server responded with status: {0}")]
    Status(u16),

    #[error("{}", .0.as_deref().unwrap_or(TRANSPORT_FALLBACK_MESSAGE))]
    Transport(Option<String>),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Generative service is not configured: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Generative service error: {code} - {message}")]
    Status { code: u16, message: String },

    #[error("Failed to parse completion: {0}")]
    Parse(String),

    #[error(
        "Prompt was blocked{}",
        .0.as_deref().map(|r| format!(": {r}")).unwrap_or_default()
    )]
    PromptBlocked(Option<String>),

    #[error("Completion stopped early: {0}")]
    StoppedEarly(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing API credential")]
    MissingCredential,

    #[error("invalid URL for {key}: {reason}")]
    InvalidUrl { key: String, reason: String },

    #[error("{0} must not be blank")]
    Blank(String),
}
