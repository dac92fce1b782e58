//! Deterministic resource URL construction
//!
//! URLs are rendered as plain strings so generated addresses stay stable
//! and directly assertable in tests. Query parameters travel in a
//! `BTreeMap`, which fixes the ascending key order without an explicit
//! sort. Values are emitted verbatim; the API's parameter names
//! (`page[number]`, `page[size]`) are part of the generated form.

use account_core::ResourceName;
use std::collections::BTreeMap;

/// Immutable URL builder for resource addresses.
///
/// Holds the API base URL and an optional version path segment:
///
/// ```text
/// {base}/{endpoint}
/// {base}/{version}/{endpoint}
/// ```
///
/// # Example
///
/// ```rust
/// use account_core::ResourceName;
/// use account_http::UrlBuilder;
///
/// let urls = UrlBuilder::new("https://api.example.com").with_api_version("v1");
/// assert_eq!(
///     urls.resource_url(ResourceName::Account),
///     "https://api.example.com/v1/organisation/accounts"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    api_version: Option<String>,
}

impl UrlBuilder {
    /// Create a builder with no version segment.
    ///
    /// The base URL should not include a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: None,
        }
    }

    /// Derive a builder that prefixes every endpoint with a version segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Address of a resource collection: `{base}/{endpoint}`.
    pub fn resource_url(&self, name: ResourceName) -> String {
        match &self.api_version {
            Some(version) => format!("{}/{}/{}", self.base_url, version, name.endpoint()),
            None => format!("{}/{}", self.base_url, name.endpoint()),
        }
    }

    /// Address of a single resource: `{resource_url}/{id}`.
    pub fn resource_url_with_id(&self, name: ResourceName, id: &str) -> String {
        format!("{}/{}", self.resource_url(name), id)
    }

    /// Collection address with a query string; empty parameters add no `?`.
    pub fn resource_url_with_parameters(
        &self,
        name: ResourceName,
        parameters: &BTreeMap<String, String>,
    ) -> String {
        format!("{}{}", self.resource_url(name), render_query(parameters))
    }

    /// Single-resource address with a query string.
    pub fn resource_url_with_id_and_parameters(
        &self,
        name: ResourceName,
        id: &str,
        parameters: &BTreeMap<String, String>,
    ) -> String {
        format!(
            "{}{}",
            self.resource_url_with_id(name, id),
            render_query(parameters)
        )
    }
}

fn render_query(parameters: &BTreeMap<String, String>) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let flat: Vec<String> = parameters
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("?{}", flat.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_resource_url() {
        let urls = UrlBuilder::new(BASE);
        assert_eq!(
            urls.resource_url(ResourceName::Account),
            "https://api.example.com/organisation/accounts"
        );
    }

    #[test]
    fn test_resource_url_with_version_segment() {
        let urls = UrlBuilder::new(BASE).with_api_version("v1");
        assert_eq!(
            urls.resource_url(ResourceName::Account),
            "https://api.example.com/v1/organisation/accounts"
        );
    }

    #[test]
    fn test_resource_url_with_id() {
        let urls = UrlBuilder::new(BASE);
        assert_eq!(
            urls.resource_url_with_id(ResourceName::Account, "some-id"),
            "https://api.example.com/organisation/accounts/some-id"
        );
    }

    #[test]
    fn test_parameters_render_in_ascending_key_order() {
        let urls = UrlBuilder::new(BASE);
        let mut parameters = BTreeMap::new();
        // Inserted out of order on purpose.
        parameters.insert("page[size]".to_string(), "3".to_string());
        parameters.insert("page[number]".to_string(), "0".to_string());

        assert_eq!(
            urls.resource_url_with_parameters(ResourceName::Account, &parameters),
            "https://api.example.com/organisation/accounts?page[number]=0&page[size]=3"
        );
    }

    #[test]
    fn test_empty_parameters_add_no_question_mark() {
        let urls = UrlBuilder::new(BASE);
        let parameters = BTreeMap::new();

        assert_eq!(
            urls.resource_url_with_parameters(ResourceName::Account, &parameters),
            "https://api.example.com/organisation/accounts"
        );
    }

    #[test]
    fn test_id_and_parameters_combine() {
        let urls = UrlBuilder::new(BASE);
        let mut parameters = BTreeMap::new();
        parameters.insert("version".to_string(), "1".to_string());

        assert_eq!(
            urls.resource_url_with_id_and_parameters(ResourceName::Account, "some-id", &parameters),
            "https://api.example.com/organisation/accounts/some-id?version=1"
        );
    }

    #[test]
    fn test_negative_page_values_pass_through() {
        let urls = UrlBuilder::new(BASE);
        let mut parameters = BTreeMap::new();
        parameters.insert("page[number]".to_string(), "-1".to_string());
        parameters.insert("page[size]".to_string(), "-5".to_string());

        assert_eq!(
            urls.resource_url_with_parameters(ResourceName::Account, &parameters),
            "https://api.example.com/organisation/accounts?page[number]=-1&page[size]=-5"
        );
    }
}
