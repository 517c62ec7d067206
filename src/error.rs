use miette::Diagnostic;
use thiserror::Error;

/// Main error type for imgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum ImgridError {
    #[error("IO error: {0}")]
    #[diagnostic(code(imgrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(imgrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(imgrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(imgrid::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ImgridError {
    /// Shorthand for an `InvalidArgument` error without a help message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImgridError>;
