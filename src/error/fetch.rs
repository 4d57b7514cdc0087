use thiserror::Error;

/// Failure to obtain a usable price sample from the upstream price API.
///
/// Tick-level: a fetch error skips reconciliation for the current tick only.
/// The scheduler retries on the next tick; there is no retry inside a fetch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request did not complete, returned a non-success status, or the
    /// body was not valid JSON.
    ///
    /// `status` is `None` when no response was received at all (connect error,
    /// timeout). `body` holds the raw response text, or the client error
    /// message when there was no response.
    #[error("Price request failed (status: {}): {body}", display_status(.status))]
    Transport {
        /// HTTP status code, if a response was received
        status: Option<u16>,
        /// Raw response body or transport error message
        body: String,
    },

    /// A required field is absent from the response payload.
    #[error("Price response is missing required field '{0}'")]
    MissingField(&'static str),

    /// A field is present but does not hold a usable number.
    #[error("Price response field '{field}' has malformed value: {value}")]
    MalformedValue {
        /// Logical name of the field
        field: &'static str,
        /// The offending JSON value, rendered as text
        value: String,
    },
}

fn display_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}
