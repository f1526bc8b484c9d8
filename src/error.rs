use miette::Diagnostic;
use thiserror::Error;

/// Main error type for armorial operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArmorialError {
    #[error("IO error: {0}")]
    #[diagnostic(code(armorial::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(armorial::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(armorial::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Artwork error for charge '{kind}': {message}")]
    #[diagnostic(code(armorial::artwork))]
    Artwork { kind: String, message: String },

    #[error("Render error: {message}")]
    #[diagnostic(code(armorial::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(armorial::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ArmorialError>;
