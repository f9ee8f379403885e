use thiserror::Error;

/// Errors surfaced by the select widget.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The controlled value is not one of the option values.
    #[error("select '{name}': value '{value}' is not among its options")]
    UnknownValue { name: String, value: String },

    /// Writing to the terminal failed.
    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file logger could not be installed.
    #[error("failed to initialize logger: {0}")]
    Logger(String),
}
