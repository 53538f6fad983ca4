use std::sync::Arc;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the client.
///
/// Only [`Error::Network`], [`Error::Decode`] and [`Error::InvalidBaseUrl`] ever abort a listing
/// call. [`Error::InvalidTimestamp`] and [`Error::PayloadDecode`] describe a single degraded event:
/// batch parsing logs them and keeps going, they are only returned by the standalone helpers
/// [`parse_timestamp`](crate::parse_timestamp) and [`EventPayload::decode`](crate::EventPayload::decode).
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Invalid base URL configuration.
    #[error("invalid base_url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// Network error or non-success HTTP status.
    #[error(transparent)]
    // reqwest::Error is not clonable, so we're wrapping it in an Arc.
    Network(Arc<reqwest::Error>),

    /// Response body is not the expected JSON document.
    #[error("error decoding response body")]
    Decode(#[source] Arc<serde_json::Error>),

    /// `created_at` value does not match `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("invalid event timestamp")]
    InvalidTimestamp(#[source] chrono::ParseError),

    /// Event payload does not match the shape declared by its type.
    #[error("error decoding {event_type} payload")]
    PayloadDecode {
        /// Event type the payload was decoded for.
        event_type: String,
        /// Underlying parse diagnostic.
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(Arc::new(value.without_url()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Decode(Arc::new(value))
    }
}
