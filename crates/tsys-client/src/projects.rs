//! Project resource client: `/api/projects`.

use reqwest::Method;

use tsys_core::Project;
use tsys_core::project::{ProjectCreateRequest, ProjectPatchRequest, ProjectUpdateRequest};

use crate::{ApiClient, ApiError, Auth};

fn project_path(project_id: &str) -> String {
    format!("/api/projects/{}", urlencoding::encode(project_id))
}

impl ApiClient {
    /// `GET /api/projects`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.request_json(Method::GET, "/api/projects", None::<&()>, Auth::Bearer)
            .await
    }

    /// `GET /api/projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        self.request_json(Method::GET, &project_path(project_id), None::<&()>, Auth::Bearer)
            .await
    }

    /// `POST /api/projects` — the returned project carries the server-assigned
    /// id; the client never fabricates one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn create_project(&self, req: &ProjectCreateRequest) -> Result<Project, ApiError> {
        self.request_json(Method::POST, "/api/projects", Some(req), Auth::Bearer)
            .await
    }

    /// `PUT /api/projects/{id}` — full replacement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn update_project(
        &self,
        project_id: &str,
        req: &ProjectUpdateRequest,
    ) -> Result<Project, ApiError> {
        self.request_json(Method::PUT, &project_path(project_id), Some(req), Auth::Bearer)
            .await
    }

    /// `PATCH /api/projects/{id}` — partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn patch_project(
        &self,
        project_id: &str,
        req: &ProjectPatchRequest,
    ) -> Result<Project, ApiError> {
        self.request_json(Method::PATCH, &project_path(project_id), Some(req), Auth::Bearer)
            .await
    }

    /// `DELETE /api/projects/{id}` — the backend answers 204.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// backend reports an error.
    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &project_path(project_id), None::<&()>, Auth::Bearer)
            .await
    }
}
