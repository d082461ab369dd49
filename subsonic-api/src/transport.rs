//! The network seam below the executor

use std::sync::Arc;

use rest_client::{RestClient, RestError, RestResponse};

/// Performs a GET on a fully built URL and returns the raw response
///
/// [`RestClient`] is the production implementation. Tests substitute
/// in-memory fakes.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<RestResponse, RestError>;
}

impl Transport for RestClient {
    fn get(&self, url: &str) -> Result<RestResponse, RestError> {
        RestClient::get(self, url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<RestResponse, RestError> {
        (**self).get(url)
    }
}
