//! Request orchestration: sign, send, decode, extract

use rest_client::RestClient;

use crate::error::{ApiError, ClientError, Outcome, PayloadError};
use crate::operation::SubsonicOperation;
use crate::response::{JsonObject, ResponseDecoder};
use crate::transport::Transport;
use crate::url::{RequestParams, UrlBuilder};

/// Runs one request through the full pipeline and returns an [`Outcome`]
///
/// No failure escapes as a panic: missing credentials, transport errors,
/// malformed bodies, server failures and extractor errors all come back as an
/// [`ApiError`].
#[derive(Debug)]
pub struct RequestExecutor<T = RestClient> {
    url_builder: UrlBuilder,
    transport: T,
    decoder: ResponseDecoder,
}

impl<T: Transport> RequestExecutor<T> {
    pub fn new(url_builder: UrlBuilder, transport: T) -> Self {
        Self {
            url_builder,
            transport,
            decoder: ResponseDecoder::new(),
        }
    }

    pub fn url_builder(&self) -> &UrlBuilder {
        &self.url_builder
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a request against `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint name, e.g. `"getPlaylist.view"`
    /// * `params` - Ordered query parameters (auth is appended automatically)
    /// * `extractor` - Builds the payload from the envelope body
    pub fn execute<R, F>(&self, endpoint: &str, params: &RequestParams, extractor: F) -> Outcome<R>
    where
        F: FnOnce(&JsonObject) -> Result<R, PayloadError>,
    {
        let outcome = self.fetch(endpoint, params).and_then(|body| self.decoder.decode(&body, extractor));

        match &outcome {
            Ok(_) => tracing::trace!(endpoint, "request succeeded"),
            Err(e) => tracing::debug!(endpoint, kind = ?e.kind, code = e.code, "request failed"),
        }

        outcome
    }

    /// Execute a typed [`SubsonicOperation`]
    pub fn execute_operation<Op: SubsonicOperation>(&self, request: &Op::Request) -> Outcome<Op::Response> {
        let params = Op::build_params(request);
        self.execute(Op::ENDPOINT, &params, Op::parse_response)
    }

    fn fetch(&self, endpoint: &str, params: &RequestParams) -> Result<String, ApiError> {
        let url = self.url_builder.build_url(endpoint, params)?;
        let response = self.transport.get(&url).map_err(ClientError::from)?;
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::response::normalize::string_field;
    use parking_lot::Mutex;
    use rest_client::{RestError, RestResponse};

    /// Returns a canned result and records every requested URL
    struct FakeTransport {
        reply: Result<String, RestError>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        fn replying(body: &str) -> Self {
            Self {
                reply: Ok(body.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: RestError) -> Self {
            Self {
                reply: Err(error),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, url: &str) -> Result<RestResponse, RestError> {
            self.requests.lock().push(url.to_string());
            match &self.reply {
                Ok(body) => Ok(RestResponse {
                    status: 200,
                    body: body.clone(),
                }),
                Err(RestError::Network(msg)) => Err(RestError::Network(msg.clone())),
                Err(RestError::Status(code)) => Err(RestError::Status(*code)),
                Err(RestError::Body(msg)) => Err(RestError::Body(msg.clone())),
            }
        }
    }

    fn executor(transport: FakeTransport, with_credentials: bool) -> RequestExecutor<FakeTransport> {
        let builder = UrlBuilder::new("http://music.local", "test-client", "1.16.1");
        if with_credentials {
            builder.set_credentials("alice", "secret");
        }
        RequestExecutor::new(builder, transport)
    }

    fn ok_body(extra: &str) -> String {
        format!(r#"{{"subsonic-response":{{"status":"ok","version":"1.16.1"{}}}}}"#, extra)
    }

    #[test]
    fn test_execute_success() {
        let exec = executor(FakeTransport::replying(&ok_body(r#","mock":"value""#)), true);

        let result = exec.execute("ping.view", &RequestParams::new(), |body| {
            string_field(body, "mock").ok_or_else(|| PayloadError::MissingField("mock".to_string()))
        });

        assert_eq!(result, Ok("value".to_string()));
        let requests = exec.transport().requests.lock();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("http://music.local/rest/ping.view?f=json&u=alice&s="));
    }

    #[test]
    fn test_execute_without_credentials_never_calls_transport() {
        let exec = executor(FakeTransport::replying(&ok_body("")), false);

        let error = exec.execute("ping.view", &RequestParams::new(), |_| Ok(())).unwrap_err();

        assert_eq!(error.kind, ErrorKind::Configuration);
        assert_eq!(error.code, 0);
        assert!(exec.transport().requests.lock().is_empty());
    }

    #[test]
    fn test_execute_transport_failure() {
        let exec = executor(
            FakeTransport::failing(RestError::Network("connection refused".to_string())),
            true,
        );

        let error = exec.execute("ping.view", &RequestParams::new(), |_| Ok(())).unwrap_err();

        assert_eq!(error.kind, ErrorKind::Transport);
        assert_eq!(error.code, 0);
        assert!(error.message.contains("connection refused"));
    }

    #[test]
    fn test_execute_http_status_is_transport_failure() {
        let exec = executor(FakeTransport::failing(RestError::Status(502)), true);

        let error = exec.execute("ping.view", &RequestParams::new(), |_| Ok(())).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Transport);
        assert!(error.message.contains("502"));
    }

    #[test]
    fn test_execute_server_failure_skips_extractor() {
        let body = r#"{"subsonic-response":{"status":"failed","error":{"code":70,"message":"Playlist not found"}}}"#;
        let exec = executor(FakeTransport::replying(body), true);

        let error = exec
            .execute("getPlaylist.view", &RequestParams::new().with("id", 9), |_| -> Result<(), PayloadError> {
                panic!("extractor must not run")
            })
            .unwrap_err();

        assert_eq!(error, ApiError::api(70, "Playlist not found"));
    }

    #[test]
    fn test_execute_malformed_body() {
        let exec = executor(FakeTransport::replying(""), true);
        let error = exec.execute("ping.view", &RequestParams::new(), |_| Ok(())).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MalformedResponse);
        assert_eq!(error.message, "Empty response received");
    }

    struct EchoOperation;

    impl SubsonicOperation for EchoOperation {
        type Request = Vec<u32>;
        type Response = String;

        const ENDPOINT: &'static str = "echo.view";

        fn build_params(request: &Self::Request) -> RequestParams {
            RequestParams::new().with_all("id", request.iter())
        }

        fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
            string_field(body, "version").ok_or_else(|| PayloadError::MissingField("version".to_string()))
        }
    }

    #[test]
    fn test_execute_operation_uses_endpoint_and_params() {
        let exec = executor(FakeTransport::replying(&ok_body("")), true);

        let result = exec.execute_operation::<EchoOperation>(&vec![3, 1, 2]);

        assert_eq!(result, Ok("1.16.1".to_string()));
        let requests = exec.transport().requests.lock();
        assert!(requests[0].starts_with("http://music.local/rest/echo.view?f=json&id=3&id=1&id=2&u=alice"));
    }
}
