pub mod admin;
pub mod auth;
pub mod project;
pub mod ticket;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use project::ProjectCommands;
pub use ticket::TicketCommands;
