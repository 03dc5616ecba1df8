//! Admin resource client: `/api/admin`. Both endpoints are admin-only
//! server-side; the client just forwards the bearer token and surfaces the
//! 403 like any other error.

use reqwest::Method;

use tsys_core::admin::GenerateDataRequest;

use crate::{ApiClient, ApiError, Auth, http};

/// The downloaded export: raw bytes plus the filename the server suggested
/// via `Content-Disposition` (fallback `export.json`).
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// `GET /api/admin/export-json` — downloads the full-database JSON dump.
    ///
    /// The body is kept opaque: the export contains entities (users,
    /// comments, histories) the client has no DTOs for.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// caller is not an admin.
    pub async fn export_json(&self) -> Result<ExportFile, ApiError> {
        let resp = self
            .send(Method::GET, "/api/admin/export-json", None::<&()>, Auth::Bearer)
            .await?;
        let resp = http::check_response(resp).await?;

        let filename = resp
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_attachment_filename)
            .unwrap_or_else(|| "export.json".to_string());

        let bytes = resp.bytes().await?.to_vec();
        Ok(ExportFile { filename, bytes })
    }

    /// `POST /api/admin/generate-data` — asks the backend to seed test data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// caller is not an admin.
    pub async fn generate_data(&self, req: &GenerateDataRequest) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "/api/admin/generate-data", Some(req), Auth::Bearer)
            .await
    }
}

/// Pull the filename out of `attachment; filename="..."`.
fn parse_attachment_filename(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let name = rest.split(';').next()?.trim().trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filename_parses_from_quoted_disposition() {
        let header = r#"attachment; filename="export-20240310-141500.json""#;
        assert_eq!(
            parse_attachment_filename(header).as_deref(),
            Some("export-20240310-141500.json")
        );
    }

    #[test]
    fn filename_parses_without_quotes() {
        assert_eq!(
            parse_attachment_filename("attachment; filename=dump.json").as_deref(),
            Some("dump.json")
        );
    }

    #[test]
    fn missing_filename_yields_none() {
        assert!(parse_attachment_filename("attachment").is_none());
        assert!(parse_attachment_filename(r#"attachment; filename="""#).is_none());
    }
}
