use thiserror::Error;

/// Custom error types for the toast crate
#[derive(Debug, Error)]
pub enum ToastError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid message bundle: {0}")]
    InvalidBundle(String),

    #[error("Main message bundle is already installed")]
    MainBundleInstalled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
