//! # tsys-core
//!
//! Core types for the tsys ticket-tracker client.
//!
//! This crate provides the types shared across the tsys crates:
//! - Wire DTOs mirrored from the backend's JSON responses (projects, tickets)
//! - Request payload structs for every REST operation
//! - Vocabulary enums for the values the UI constrains via dropdowns
//!
//! The client holds no authoritative state: ids and timestamps always come
//! from the server's response, never from this crate.

pub mod admin;
pub mod auth;
pub mod enums;
pub mod project;
pub mod ticket;

pub use enums::{ProjectStatus, TicketKind, TicketPriority, TicketState};
pub use project::Project;
pub use ticket::Ticket;
