/// Errors produced by a single catalog fetch attempt.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The configured endpoint is not a well-formed URL. A build or
    /// configuration defect, not something the user can recover from.
    #[error("catalog.invalid_endpoint")]
    InvalidEndpoint,
    /// The request never produced a usable response (connection failure,
    /// timeout, or a non-success status from the server).
    #[error("catalog.transport_failure")]
    Transport { cause: String },
    /// The server answered with no body at all.
    #[error("catalog.empty_response")]
    EmptyResponse,
    /// The body did not parse as the expected product array.
    #[error("catalog.decode_failure")]
    Decode { cause: String },
}
