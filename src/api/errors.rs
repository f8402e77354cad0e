use thiserror::Error;
use url::Url;

use crate::errors::{ErrorCode, RequestFailure};

/// Coarse classification of an [`ApiClientError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad base URL, or the request body could not be built.
    RequestConstruction,
    /// Connection, TLS, timeout or body read failure.
    Transport,
    /// Reading the caller's upload content failed.
    ContentStream,
    /// The service answered with a non-200 status.
    RemoteRejection,
}

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E006] Invalid base URL: {0}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Example: https://api.gifs.com\n  • Ensure the URL includes the protocol (http:// or https://)")]
    CannotBeBase(Url),

    #[error("[E009] Invalid URL format: {0}\n\nSuggestions:\n  • Check the URL format is correct\n  • Use absolute URLs with protocol (http:// or https://)")]
    UrlCannotBeBase(#[from] url::ParseError),

    #[error("[E010] Failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("[E011] Failed to read upload content: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Failure(#[from] RequestFailure),
}

impl ApiClientError {
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::CannotBeBase(_) => ErrorCode::E006,
            Self::UrlCannotBeBase(_) => ErrorCode::E009,
            Self::Serialization(_) => ErrorCode::E010,
            Self::Reqwest(_) => ErrorCode::E999, // Network errors get generic code
            Self::IoError(_) => ErrorCode::E011,
            Self::Failure(f) => f.error_code(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CannotBeBase(_) | Self::UrlCannotBeBase(_) | Self::Serialization(_) => {
                ErrorCategory::RequestConstruction
            }
            Self::Reqwest(e) if e.is_builder() => ErrorCategory::RequestConstruction,
            Self::Reqwest(_) => ErrorCategory::Transport,
            Self::IoError(_) => ErrorCategory::ContentStream,
            Self::Failure(_) => ErrorCategory::RemoteRejection,
        }
    }

    /// Status code returned by the service, only set for rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Failure(f) => Some(f.status.as_u16()),
            _ => None,
        }
    }
}
