use crate::error::PayloadError;
use crate::response::JsonObject;
use crate::url::RequestParams;

/// Base trait for all Subsonic API operations
///
/// An operation ties an endpoint name to a typed request and a typed response.
/// The executor signs and sends the request, decodes the envelope, and hands
/// the envelope body to [`SubsonicOperation::parse_response`] only when the
/// server reported success.
pub trait SubsonicOperation {
    /// Typed arguments for this operation
    type Request;

    /// Typed payload produced on success
    type Response;

    /// Endpoint name relative to `rest/`, e.g. `"ping.view"`
    const ENDPOINT: &'static str;

    /// Build the ordered query parameters from the request data
    ///
    /// Authentication and format parameters are added by the URL builder and
    /// must not appear here.
    fn build_params(request: &Self::Request) -> RequestParams;

    /// Extract the typed response from the `subsonic-response` object
    ///
    /// # Arguments
    /// * `body` - The envelope body, already checked for `status: "failed"`
    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError>;
}
