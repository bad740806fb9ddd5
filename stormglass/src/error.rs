use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the Storm Glass client.
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL or a resource path could not be parsed or joined.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The HTTP call failed: connection, TLS, timeout or cancellation.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{0}")]
    Api(ApiError),

    /// A success response carried a body that does not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error envelope reported by the API on non-success responses.
///
/// The server describes failures as `{"errors": {<field>: <detail>, ...}}`.
/// The envelope is never mutated after construction and is terminal: the
/// client does not retry on it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response the envelope was built from.
    #[serde(skip)]
    pub status: u16,

    /// Server-provided detail, keyed by the field or concern it refers to.
    #[serde(default)]
    pub errors: BTreeMap<String, serde_json::Value>,
}

impl ApiError {
    /// Builds the envelope from a raw response body.
    ///
    /// A body that is not valid JSON degrades to a single synthetic
    /// `unknown: "unknown_error_format"` entry; the status code alone is
    /// considered informative enough in that case.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Self>(body) {
            Ok(mut err) => {
                err.status = status;
                err
            }
            Err(_) => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "unknown".to_string(),
                    serde_json::Value::String("unknown_error_format".to_string()),
                );
                Self { status, errors }
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.status)?;

        // BTreeMap iteration keeps the rendered message identical across calls.
        let mut first = true;
        for (key, value) in &self.errors {
            if !first {
                f.write_str(",")?;
            }
            first = false;

            match value {
                serde_json::Value::String(s) => write!(f, "{key}:{s}")?,
                other => write!(f, "{key}:{other}")?,
            }
        }

        Ok(())
    }
}

impl std::error::Error for ApiError {}
