use thiserror::Error;

/// Failure while producing one body's scored rows.
///
/// A failed body is dropped from the unified dataset and reported as a
/// warning with the body name attached; the remaining bodies still succeed.
#[derive(Debug, Error)]
pub enum BodyError {
    /// Horizons was unreachable, timed out, or returned no parseable rows.
    #[error("ephemeris fetch failed for {body}: {reason}")]
    UpstreamFetch { body: String, reason: String },

    /// A data record inside the ephemeris block was truncated or otherwise
    /// not fully numeric.
    #[error("malformed ephemeris row for {body} (line {line}): {reason}")]
    MalformedRow {
        body: String,
        line: usize,
        reason: String,
    },

    /// A physical constant required by a transform is invalid. Normally
    /// caught by config validation before any fetch happens.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl BodyError {
    /// Body name this error is attached to, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            BodyError::UpstreamFetch { body, .. } => Some(body),
            BodyError::MalformedRow { body, .. } => Some(body),
            BodyError::Configuration(_) => None,
        }
    }
}
