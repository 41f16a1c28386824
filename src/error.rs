use thiserror::Error;

/// Custom error types for toastr
#[derive(Debug, Error)]
pub enum ToastError {
    #[error("toast manager is no longer running; requests can't be delivered")]
    ManagerClosed,

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ToastError {
    fn from(err: toml::de::Error) -> Self {
        ToastError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
