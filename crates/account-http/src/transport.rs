//! Transport seam between the client and the network
//!
//! The client prepares a full `reqwest::Request` and hands it to an
//! injected transport, so tests can substitute the network exchange and
//! the client never owns connection or retry concerns.

use async_trait::async_trait;

/// Capability to perform one HTTP exchange.
///
/// Implemented for `reqwest::Client`; any other implementation (a recording
/// double, a rate-limiting decorator) can be injected through
/// [`crate::AccountClient::with_transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a prepared request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns the transport-level error (connection refused, timeout)
    /// unchanged; classification of response status codes happens in the
    /// client, not here.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::execute(self, request).await
    }
}
