//! Account API Types
//!
//! This module contains the wire types exchanged with the account API:
//! the resource record, the single/list envelopes and the 400-response
//! error payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Logical resources exposed by the API.
///
/// Each name maps to a fixed endpoint path segment; the table is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceName {
    Account,
}

impl ResourceName {
    /// Endpoint path segment for this resource, relative to the API base.
    pub fn endpoint(self) -> &'static str {
        match self {
            ResourceName::Account => "organisation/accounts",
        }
    }
}

/// One remote entity as carried on the wire.
///
/// `attributes` and `relationships` are schema-less JSON objects; the server
/// owns their shape. Timestamps are populated by the server and absent on
/// create requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,

    pub id: String,

    #[serde(default)]
    pub version: i64,

    pub organisation_id: String,

    #[serde(default)]
    pub attributes: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(default)]
    pub relationships: Map<String, Value>,
}

impl Resource {
    /// Build an account resource ready for a create request.
    ///
    /// The id is kept as a plain string: UUID validation belongs to the
    /// server, and the client must be able to submit a malformed id and
    /// surface the resulting 400.
    pub fn account(
        id: impl Into<String>,
        organisation_id: impl Into<String>,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            resource_type: "accounts".to_string(),
            id: id.into(),
            version: 0,
            organisation_id: organisation_id.into(),
            attributes,
            created_on: None,
            modified_on: None,
            relationships: Map::new(),
        }
    }
}

/// Envelope for single-resource responses and create-request bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataContainer {
    pub data: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, String>>,
}

impl DataContainer {
    /// Wrap a resource with no links (the create-request body shape).
    pub fn new(resource: Resource) -> Self {
        Self {
            data: resource,
            links: None,
        }
    }
}

/// Envelope for list responses. Order is server-determined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListDataContainer {
    pub data: Vec<Resource>,
}

/// Error payload carried by 400 responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadRequestData {
    pub error_code: i64,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn sample_account() -> Resource {
        let mut attributes = Map::new();
        attributes.insert("country".to_string(), Value::String("GB".to_string()));
        attributes.insert(
            "base_currency".to_string(),
            Value::String("GBP".to_string()),
        );
        Resource::account(
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            attributes,
        )
    }

    #[test]
    fn test_account_endpoint() {
        assert_eq!(ResourceName::Account.endpoint(), "organisation/accounts");
    }

    #[test]
    fn test_resource_name_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ResourceName::Account).unwrap(),
            "\"account\""
        );
    }

    #[test]
    fn test_resource_serialization_roundtrip() {
        let account = sample_account();

        let json = serde_json::to_string(&account).unwrap();
        let parsed: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(account, parsed);
    }

    #[test]
    fn test_container_roundtrip_without_links() {
        let container = DataContainer::new(sample_account());

        let json = serde_json::to_string(&container).unwrap();
        assert!(!json.contains("links"));

        let parsed: DataContainer = serde_json::from_str(&json).unwrap();
        assert_eq!(container, parsed);
    }

    #[test]
    fn test_type_tag_renames_to_type() {
        let json = serde_json::to_string(&sample_account()).unwrap();
        assert!(json.contains("\"type\":\"accounts\""));
        assert!(!json.contains("resource_type"));
    }

    #[test]
    fn test_absent_timestamps_are_omitted() {
        let json = serde_json::to_string(&sample_account()).unwrap();
        assert!(!json.contains("created_on"));
        assert!(!json.contains("modified_on"));
    }

    #[test]
    fn test_list_container_preserves_order() {
        let body = r#"{"data":[
            {"type":"accounts","id":"a","version":0,"organisation_id":"o","attributes":{},"relationships":{}},
            {"type":"accounts","id":"b","version":0,"organisation_id":"o","attributes":{},"relationships":{}},
            {"type":"accounts","id":"c","version":0,"organisation_id":"o","attributes":{},"relationships":{}}
        ]}"#;

        let parsed: ListDataContainer = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = parsed.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bad_request_data_deserialization() {
        let parsed: BadRequestData =
            serde_json::from_str(r#"{"error_code":0,"error_message":"id is not a valid uuid"}"#)
                .unwrap();
        assert_eq!(
            parsed,
            BadRequestData {
                error_code: 0,
                error_message: "id is not a valid uuid".to_string(),
            }
        );
    }
}
