use thiserror::Error;

/// Message shown in the UI when the menus cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load the menus. Please try again later.";

/// Failure to produce a complete menu collection.
///
/// The `Display` text carries the technical detail for logs; the UI shows
/// [`LoadError::user_message`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request for {location} failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{location} returned HTTP {status}")]
    Status { location: String, status: u16 },
    #[error("{location} is not a valid menu document: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid document location {location}: {source}")]
    Url {
        location: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }

    /// Location of the document that failed, when one is known.
    pub fn location(&self) -> Option<&str> {
        match self {
            LoadError::Io { location, .. }
            | LoadError::Http { location, .. }
            | LoadError::Status { location, .. }
            | LoadError::Malformed { location, .. }
            | LoadError::Url { location, .. } => Some(location),
            LoadError::Client(_) => None,
        }
    }
}
