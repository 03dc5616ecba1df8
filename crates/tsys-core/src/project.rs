//! Project DTOs.
//!
//! Field names are camelCase on the wire, matching the backend's JSON. The
//! `status` field stays a plain string: the client renders whatever the
//! server sends and never validates its vocabulary.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `PUT /api/projects/{id}` — a full replacement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
}

/// Payload for `PATCH /api/projects/{id}` — all fields optional, absent
/// fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_deserializes_camel_case() {
        let json = r#"{
            "id": "p-1",
            "name": "Apollo",
            "description": null,
            "status": "open",
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).expect("should parse");
        assert_eq!(project.id, "p-1");
        assert_eq!(project.status, "open");
        assert!(project.description.is_none());
    }

    #[test]
    fn project_tolerates_missing_description() {
        let json = r#"{"id":"p-2","name":"Borealis","status":"closed","createdAt":"2024-03-01T12:00:00+02:00"}"#;
        let project: Project = serde_json::from_str(json).expect("should parse");
        assert!(project.description.is_none());
    }

    #[test]
    fn patch_request_omits_absent_fields() {
        let patch = ProjectPatchRequest {
            status: Some("closed".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).expect("serialize");
        assert_eq!(json, r#"{"status":"closed"}"#);
    }

    #[test]
    fn create_request_serializes_description_when_present() {
        let req = ProjectCreateRequest {
            name: "Apollo".into(),
            description: Some("moon stuff".into()),
        };
        let json = serde_json::to_string(&req).expect("serialize");
        assert_eq!(json, r#"{"name":"Apollo","description":"moon stuff"}"#);
    }
}
