//! Ticket DTOs.
//!
//! The wire field `type` is reserved in Rust, so the struct field is `kind`
//! with a serde rename. Create, full update, and patch all share one
//! all-optional payload shape — that is the backend's actual contract.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A ticket as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub project_id: String,
    /// Id of the user who created the ticket.
    pub user_id: String,
    #[serde(default)]
    pub assigned_user_id: Option<String>,
}

/// Payload for ticket create/update/patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ticket_deserializes_type_field_into_kind() {
        let json = r#"{
            "id": "t-1",
            "name": "Login button misaligned",
            "type": "bug",
            "priority": "low",
            "state": "open",
            "createdAt": "2024-04-10T08:30:00Z",
            "projectId": "p-1",
            "userId": "u-1",
            "assignedUserId": null
        }"#;
        let ticket: Ticket = serde_json::from_str(json).expect("should parse");
        assert_eq!(ticket.kind, "bug");
        assert_eq!(ticket.project_id, "p-1");
        assert!(ticket.assigned_user_id.is_none());
    }

    #[test]
    fn request_serializes_kind_as_type() {
        let req = TicketRequest {
            name: Some("Crash on save".into()),
            kind: Some("bug".into()),
            priority: Some("high".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"Crash on save","type":"bug","priority":"high"}"#
        );
    }

    #[test]
    fn empty_request_serializes_to_empty_object() {
        let json = serde_json::to_string(&TicketRequest::default()).expect("serialize");
        assert_eq!(json, "{}");
    }
}
