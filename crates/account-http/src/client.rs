//! Reqwest-based client for the organisation account API

use crate::error::AccountHttpError;
use crate::transport::HttpTransport;
use crate::url::UrlBuilder;
use account_core::{BadRequestData, DataContainer, ListDataContainer, Resource, ResourceName};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// Mime type sent as `Accept` and `Content-Type` unless overridden.
pub const DEFAULT_MIME_TYPE: &str = "application/vnd.api+json";

/// List filter, accepted but not yet rendered into query parameters.
pub type ListFilter = serde_json::Map<String, serde_json::Value>;

/// Client for the account resource API.
///
/// The client is immutable: configuration is fixed at construction and the
/// `with_*` methods derive a new client with one option overridden, so
/// concurrent calls never observe a half-updated configuration.
///
/// # Example
///
/// ```ignore
/// use account_core::ResourceName;
/// use account_http::AccountClient;
///
/// let client = AccountClient::new("http://localhost:8080")
///     .with_api_version("v1");
///
/// let container = client.fetch(ResourceName::Account, &id).await?;
/// ```
pub struct AccountClient {
    transport: Box<dyn HttpTransport>,
    urls: UrlBuilder,
    mime_type: String,
    bearer_token: Option<String>,
}

impl AccountClient {
    /// Create a client backed by a default reqwest transport.
    ///
    /// The base URL should not include a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(Box::new(reqwest::Client::new()), base_url)
    }

    /// Create a client with an injected transport.
    pub fn with_transport(transport: Box<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            urls: UrlBuilder::new(base_url),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            bearer_token: None,
        }
    }

    /// Create a client whose transport aborts calls after `timeout`.
    ///
    /// Cancellation is the transport's concern: a call that exceeds the
    /// deadline surfaces as a transport error.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();
        Self::with_transport(Box::new(client), base_url)
    }

    /// Derive a client that prefixes endpoints with an API version segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.urls = self.urls.with_api_version(version);
        self
    }

    /// Derive a client sending `mime_type` as `Accept` and `Content-Type`.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Derive a client sending `Authorization: bearer {token}`.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Create a resource.
    ///
    /// POSTs a `{"data": ...}` envelope to the collection address and
    /// returns the server-populated envelope.
    ///
    /// # Errors
    ///
    /// Returns the classified response error, the transport error, or the
    /// body decode error; see [`AccountHttpError`].
    pub async fn create(
        &self,
        name: ResourceName,
        resource: Resource,
    ) -> Result<DataContainer, AccountHttpError> {
        let body = serde_json::to_string(&DataContainer::new(resource))?;
        let url = self.urls.resource_url(name);

        let response = self.make_request(Method::POST, url, Some(body)).await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    /// Fetch a single resource by id.
    ///
    /// # Errors
    ///
    /// Rejects a blank id client-side; otherwise returns the classified
    /// response, transport, or decode error.
    pub async fn fetch(
        &self,
        name: ResourceName,
        id: &str,
    ) -> Result<DataContainer, AccountHttpError> {
        if id.is_empty() {
            return Err(AccountHttpError::EmptyResourceId { operation: "fetch" });
        }
        let url = self.urls.resource_url_with_id(name, id);

        let response = self.make_request(Method::GET, url, None).await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    /// List resources for one page.
    ///
    /// `page_number` and `page_size` are rendered as `page[number]` and
    /// `page[size]` in their decimal forms; negative values pass through
    /// verbatim and are left for the server to reject. `filter` is accepted
    /// but not yet applied. Order of the returned data is the server's.
    ///
    /// # Errors
    ///
    /// Returns the classified response, transport, or decode error.
    pub async fn list(
        &self,
        name: ResourceName,
        filter: Option<ListFilter>,
        page_number: i64,
        page_size: i64,
    ) -> Result<ListDataContainer, AccountHttpError> {
        let mut parameters = BTreeMap::new();
        parameters.insert("page[number]".to_string(), page_number.to_string());
        parameters.insert("page[size]".to_string(), page_size.to_string());
        // TODO render `filter` into query parameters once the filter
        // contract of the API is settled.
        let _ = filter;
        let url = self.urls.resource_url_with_parameters(name, &parameters);

        let response = self.make_request(Method::GET, url, None).await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    /// Delete a resource at a specific version.
    ///
    /// The version travels as a `version` query parameter for optimistic
    /// concurrency. A 404 classifies as `NotFound` like every other
    /// operation; deleting an id that does not exist is an error.
    ///
    /// # Errors
    ///
    /// Rejects a blank id client-side; otherwise returns the classified
    /// response or transport error.
    pub async fn delete(
        &self,
        name: ResourceName,
        id: &str,
        version: i64,
    ) -> Result<(), AccountHttpError> {
        if id.is_empty() {
            return Err(AccountHttpError::EmptyResourceId {
                operation: "delete",
            });
        }
        let mut parameters = BTreeMap::new();
        parameters.insert("version".to_string(), version.to_string());
        let url = self
            .urls
            .resource_url_with_id_and_parameters(name, id, &parameters);

        self.make_request(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn make_request(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<reqwest::Response, AccountHttpError> {
        let address = Url::parse(&url).map_err(|source| AccountHttpError::InvalidUrl {
            url: url.clone(),
            reason: source.to_string(),
        })?;
        let mut request = reqwest::Request::new(method.clone(), address);

        let mime = HeaderValue::from_str(&self.mime_type)
            .map_err(|_| AccountHttpError::InvalidHeader { name: "Accept" })?;
        request.headers_mut().insert(ACCEPT, mime.clone());
        request.headers_mut().insert(CONTENT_TYPE, mime);
        if let Some(token) = &self.bearer_token {
            let value = HeaderValue::from_str(&format!("bearer {token}"))
                .map_err(|_| AccountHttpError::InvalidHeader {
                    name: "Authorization",
                })?;
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            *request.body_mut() = Some(reqwest::Body::from(body));
        }

        debug!(%method, %url, "dispatching request");
        let response = self.transport.execute(request).await?;
        debug!(%method, %url, status = %response.status(), "response received");

        self.classify_status(method, url, response).await
    }

    async fn classify_status(
        &self,
        method: Method,
        url: String,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AccountHttpError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AccountHttpError::NotFound { url });
        }
        if status == StatusCode::BAD_REQUEST {
            let data: BadRequestData = serde_json::from_str(&response.text().await?)?;
            return Err(AccountHttpError::BadRequest { method, data });
        }
        if status.as_u16() > 400 {
            return Err(AccountHttpError::ResponseStatus {
                method,
                url,
                status,
            });
        }
        Ok(response)
    }
}
