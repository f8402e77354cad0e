use reqwest::StatusCode;
use std::fmt::{self, Formatter};
use thiserror::Error;
use url::Url;

/// The remote service answered with something other than `200 OK`.
///
/// The response body is deliberately not kept here: it is written to the
/// log by the client and callers only get the status.
#[derive(Debug, Error)]
pub struct RequestFailure {
    pub url: Url,
    pub status: StatusCode,
}

impl RequestFailure {
    #[must_use]
    pub const fn new(url: Url, status: StatusCode) -> Self {
        Self { url, status }
    }

    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        ErrorCode::E002
    }

    #[must_use]
    pub fn suggestions(&self) -> Vec<&'static str> {
        match self.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => vec![
                "Check that the Gifs-API-Key is correct",
                "Make sure the key has not been revoked",
            ],
            StatusCode::NOT_FOUND => vec![
                "Check that the API URL is correct",
                "The endpoint should expose /media/import and /media/upload",
            ],
            StatusCode::PAYLOAD_TOO_LARGE => vec!["Try uploading a smaller file"],
            StatusCode::TOO_MANY_REQUESTS => vec![
                "Wait a moment before retrying",
                "Consider reducing request frequency",
            ],
            status if status.is_server_error() => vec![
                "The service is having trouble, try again later",
                "The response body is logged at warn level",
            ],
            _ => vec!["The response body is logged at warn level"],
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "[{}] Status code indicated error: {} ({})",
            self.error_code().as_str(),
            self.status.as_u16(),
            self.url
        )?;

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            write!(formatter, "\n\nSuggestions:")?;
            for suggestion in suggestions {
                write!(formatter, "\n  • {suggestion}")?;
            }
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    E002,
    E006,
    E009,
    E010,
    E011,
    E999,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::E002 => "E002",
            Self::E006 => "E006",
            Self::E009 => "E009",
            Self::E010 => "E010",
            Self::E011 => "E011",
            Self::E999 => "E999",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_numeric_status() {
        let url = Url::parse("https://api.gifs.com/media/upload").unwrap();
        let failure = RequestFailure::new(url, StatusCode::INTERNAL_SERVER_ERROR);

        let message = failure.to_string();
        assert!(message.starts_with("[E002]"));
        assert!(message.contains("500"));
        assert!(message.contains("/media/upload"));
        assert!(message.contains("try again later"));
        assert!(message.contains("logged at warn level"));
    }

    #[test]
    fn unauthorized_points_at_the_key() {
        let url = Url::parse("https://api.gifs.com/media/import").unwrap();
        let failure = RequestFailure::new(url, StatusCode::UNAUTHORIZED);

        assert!(failure.to_string().contains("401"));
        assert!(failure
            .suggestions()
            .iter()
            .any(|s| s.contains("Gifs-API-Key")));
    }
}
