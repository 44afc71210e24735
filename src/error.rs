//! Error types for Clinic UI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and data files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON deserialization error (data files)
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// A view failed while rendering its subtree
    #[snafu(display("Render failed: {}", message.as_deref().unwrap_or("no message")))]
    Render { message: Option<String> },

    /// A record handed to a view is missing a field the view needs
    #[snafu(display("{record} is missing required field `{field}`"))]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
}

impl Error {
    /// Create a render failure carrying a message
    pub fn render(message: impl Into<String>) -> Self {
        Error::Render {
            message: Some(message.into()),
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// A bare render failure has none; callers pick their own default.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Error::Render { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            other => Some(other.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
