//! Error handling types

use thiserror::Error;

use crate::value_objects::LanguageRejection;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Code Learning Platform
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided by the caller (empty code, malformed input)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Declared language is missing or not on the allow-list
    #[error("Unsupported language: {message}")]
    UnsupportedLanguage {
        /// Message naming the problem
        message: String,
        /// Canonical display names of the supported languages
        supported: Vec<String>,
    },

    /// Remote language model call failed (transport, status, quota, payload)
    #[error("Remote model error: {message}")]
    RemoteModel {
        /// Description of the remote failure
        message: String,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a remote model error
    pub fn remote_model<S: Into<String>>(message: S) -> Self {
        Self::RemoteModel {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration and network error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Whether this error was caused by caller input and should surface as a
    /// client error (HTTP 400) rather than an internal failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::UnsupportedLanguage { .. }
        )
    }

    /// Message suitable for showing to the caller
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } | Self::UnsupportedLanguage { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

impl From<LanguageRejection> for Error {
    fn from(rejection: LanguageRejection) -> Self {
        Self::UnsupportedLanguage {
            message: rejection.message,
            supported: rejection
                .supported_languages
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
