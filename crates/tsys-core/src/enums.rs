//! Vocabulary enums for the dropdown-constrained fields.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The wire DTOs carry these values as plain strings — the server's vocabulary
//! is never validated client-side. These enums exist to constrain *user input*
//! at the CLI edge, the same way the UI dropdowns did, so each implements
//! `FromStr` with an error listing the accepted values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A value outside the accepted vocabulary was supplied.
#[derive(Debug, Error)]
#[error("invalid {field} '{value}' (expected one of: {expected})")]
pub struct InvalidValue {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Closed,
}

impl ProjectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(InvalidValue {
                field: "status",
                value: other.to_string(),
                expected: "open, in_progress, closed",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TicketKind
// ---------------------------------------------------------------------------

/// The `type` field of a ticket. Named `kind` in Rust code because `type` is
/// reserved; serialized as `type` on the wire by the DTOs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketKind {
    Bug,
    Task,
    Feature,
}

impl TicketKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Task => "task",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketKind {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" => Ok(Self::Bug),
            "task" => Ok(Self::Task),
            "feature" => Ok(Self::Feature),
            other => Err(InvalidValue {
                field: "type",
                value: other.to_string(),
                expected: "bug, task, feature",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TicketPriority
// ---------------------------------------------------------------------------

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Med,
    High,
}

impl TicketPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "med" => Ok(Self::Med),
            "high" => Ok(Self::High),
            other => Err(InvalidValue {
                field: "priority",
                value: other.to_string(),
                expected: "low, med, high",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TicketState
// ---------------------------------------------------------------------------

/// Workflow state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    Open,
    InProgress,
    Closed,
}

impl TicketState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketState {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(InvalidValue {
                field: "state",
                value: other.to_string(),
                expected: "open, in_progress, closed",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_status_roundtrips_through_str() {
        for status in [
            ProjectStatus::Open,
            ProjectStatus::InProgress,
            ProjectStatus::Closed,
        ] {
            let parsed: ProjectStatus = status.as_str().parse().expect("should parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn ticket_kind_rejects_unknown_value() {
        let err = "epic".parse::<TicketKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid type 'epic' (expected one of: bug, task, feature)"
        );
    }

    #[test]
    fn priority_serializes_snake_case() {
        let json = serde_json::to_string(&TicketPriority::Med).expect("serialize");
        assert_eq!(json, "\"med\"");
    }

    #[test]
    fn state_display_matches_wire_value() {
        assert_eq!(TicketState::InProgress.to_string(), "in_progress");
    }
}
