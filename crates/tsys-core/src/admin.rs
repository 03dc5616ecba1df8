//! Admin endpoint payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Payload for `POST /api/admin/generate-data`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDataRequest {
    pub user_count: u32,
    pub project_count: u32,
    pub tickets_per_user: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generate_data_request_wire_shape() {
        let req = GenerateDataRequest {
            user_count: 5,
            project_count: 2,
            tickets_per_user: 10,
        };
        let json = serde_json::to_string(&req).expect("serialize");
        assert_eq!(
            json,
            r#"{"userCount":5,"projectCount":2,"ticketsPerUser":10}"#
        );
    }
}
