use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mdgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum GridError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mdgrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mdgrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mdgrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(mdgrid::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(mdgrid::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
