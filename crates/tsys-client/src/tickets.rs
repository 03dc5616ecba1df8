//! Ticket resource client: `/api/projects/{projectId}/tickets` and
//! `/api/tickets` (current user's assigned tickets, no project scope).

use reqwest::Method;

use tsys_core::Ticket;
use tsys_core::ticket::TicketRequest;

use crate::{ApiClient, ApiError, Auth};

fn tickets_path(project_id: &str) -> String {
    format!("/api/projects/{}/tickets", urlencoding::encode(project_id))
}

fn ticket_path(project_id: &str, ticket_id: &str) -> String {
    format!(
        "/api/projects/{}/tickets/{}",
        urlencoding::encode(project_id),
        urlencoding::encode(ticket_id)
    )
}

impl ApiClient {
    /// `GET /api/projects/{projectId}/tickets`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn list_tickets(&self, project_id: &str) -> Result<Vec<Ticket>, ApiError> {
        self.request_json(Method::GET, &tickets_path(project_id), None::<&()>, Auth::Bearer)
            .await
    }

    /// `GET /api/tickets` — tickets assigned to the current user across all
    /// projects. The "current user" is whoever the bearer token says it is;
    /// the client sends no user id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn list_assigned_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.request_json(Method::GET, "/api/tickets", None::<&()>, Auth::Bearer)
            .await
    }

    /// `GET /api/projects/{projectId}/tickets/{ticketId}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn get_ticket(&self, project_id: &str, ticket_id: &str) -> Result<Ticket, ApiError> {
        self.request_json(
            Method::GET,
            &ticket_path(project_id, ticket_id),
            None::<&()>,
            Auth::Bearer,
        )
        .await
    }

    /// `POST /api/projects/{projectId}/tickets`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn create_ticket(
        &self,
        project_id: &str,
        req: &TicketRequest,
    ) -> Result<Ticket, ApiError> {
        self.request_json(Method::POST, &tickets_path(project_id), Some(req), Auth::Bearer)
            .await
    }

    /// `PUT /api/projects/{projectId}/tickets/{ticketId}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn update_ticket(
        &self,
        project_id: &str,
        ticket_id: &str,
        req: &TicketRequest,
    ) -> Result<Ticket, ApiError> {
        self.request_json(
            Method::PUT,
            &ticket_path(project_id, ticket_id),
            Some(req),
            Auth::Bearer,
        )
        .await
    }

    /// `PATCH /api/projects/{projectId}/tickets/{ticketId}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn patch_ticket(
        &self,
        project_id: &str,
        ticket_id: &str,
        req: &TicketRequest,
    ) -> Result<Ticket, ApiError> {
        self.request_json(
            Method::PATCH,
            &ticket_path(project_id, ticket_id),
            Some(req),
            Auth::Bearer,
        )
        .await
    }

    /// `DELETE /api/projects/{projectId}/tickets/{ticketId}` — 204 on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn delete_ticket(&self, project_id: &str, ticket_id: &str) -> Result<(), ApiError> {
        self.request_unit(
            Method::DELETE,
            &ticket_path(project_id, ticket_id),
            None::<&()>,
            Auth::Bearer,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_paths_are_nested_under_the_project() {
        assert_eq!(tickets_path("p-1"), "/api/projects/p-1/tickets");
        assert_eq!(ticket_path("p-1", "t-9"), "/api/projects/p-1/tickets/t-9");
    }
}
