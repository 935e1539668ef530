//! Google Drive API connector implementation
//!
//! Implements the `DocumentProvider` trait for Google Drive API v3.

use async_trait::async_trait;
use bridge_traits::error::Result as BridgeResult;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bridge_traits::provider::{DocumentProvider, ItemKind, RemoteItem};
use bridge_traits::session::Session;
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{GoogleDriveError, Result};
use crate::types::{CreateFileRequest, DriveFile, FilesListResponse};

/// Google Drive API base URL
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Google Drive media-upload base URL
const DRIVE_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";

/// Fields to request for file resources
const FILE_FIELDS: &str = "id,name,mimeType,trashed,parents";

/// MIME type of a Google Docs document
pub const DOCUMENT_MIME_TYPE: &str = "application/vnd.google-apps.document";

/// MIME type of a Drive folder
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Export format for document content
const EXPORT_MIME_TYPE: &str = "text/html";

/// Google Drive API connector
///
/// Implements `DocumentProvider` for Google Drive API v3. The connector
/// holds no per-user state: every operation takes an explicit `Session`
/// whose bearer token is attached to that request only. Retry policy is
/// the `HttpClient`'s concern; a failure that survives the transport is
/// surfaced unmodified.
///
/// # Example
///
/// ```ignore
/// use provider_google_drive::GoogleDriveConnector;
/// use bridge_traits::provider::DocumentProvider;
///
/// let connector = GoogleDriveConnector::new(http_client);
/// let children = connector.list_children(&session, "folder_id").await?;
/// ```
pub struct GoogleDriveConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,
}

impl GoogleDriveConnector {
    /// Create a new Google Drive connector
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    fn mime_type_for(kind: ItemKind) -> &'static str {
        match kind {
            ItemKind::Document => DOCUMENT_MIME_TYPE,
            ItemKind::Folder => FOLDER_MIME_TYPE,
        }
    }

    fn authorized(session: &Session, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest::new(method, url)
            .bearer_token(session.bearer_token())
            .accept_json()
    }

    /// Execute a request and map non-2xx statuses to provider errors
    async fn send(
        &self,
        request: HttpRequest,
        item_id: Option<&str>,
    ) -> Result<bridge_traits::http::HttpResponse> {
        let response = self.http_client.execute(request).await?;

        if response.is_success() {
            debug!(status = response.status, "Drive API request succeeded");
            return Ok(response);
        }

        match response.status {
            401 => Err(GoogleDriveError::AuthenticationFailed(
                String::from_utf8_lossy(&response.body).to_string(),
            )),
            404 => Err(GoogleDriveError::FileNotFound {
                file_id: item_id.unwrap_or("unknown").to_string(),
            }),
            status => Err(GoogleDriveError::ApiError {
                status_code: status,
                message: String::from_utf8_lossy(&response.body).to_string(),
            }),
        }
    }
}

#[async_trait]
impl DocumentProvider for GoogleDriveConnector {
    #[instrument(skip(self, session), fields(folder_id = %folder_id))]
    async fn list_children(
        &self,
        session: &Session,
        folder_id: &str,
    ) -> BridgeResult<Vec<RemoteItem>> {
        info!("Listing folder children from Google Drive");

        let query = format!("'{}' in parents", folder_id);
        let url = format!(
            "{}/files?q={}&fields=files({})",
            DRIVE_API_BASE,
            urlencoding::encode(&query),
            FILE_FIELDS
        );

        let request = Self::authorized(session, HttpMethod::Get, url);
        let response = self.send(request, Some(folder_id)).await?;

        let list_response: FilesListResponse = serde_json::from_slice(&response.body)
            .map_err(|e| {
                GoogleDriveError::ParseError(format!("Failed to parse files list response: {}", e))
            })?;

        let items: Vec<RemoteItem> = list_response.files.into_iter().map(Into::into).collect();

        info!(count = items.len(), "Listed folder children");

        Ok(items)
    }

    #[instrument(skip(self, session), fields(kind = ?kind, name = %name))]
    async fn create_item(
        &self,
        session: &Session,
        kind: ItemKind,
        name: &str,
        parent_id: Option<&str>,
    ) -> BridgeResult<RemoteItem> {
        info!("Creating item in Google Drive");

        let body = CreateFileRequest {
            name: name.to_string(),
            mime_type: Self::mime_type_for(kind).to_string(),
            parents: parent_id.map(|id| vec![id.to_string()]),
        };

        let url = format!("{}/files?fields={}", DRIVE_API_BASE, FILE_FIELDS);
        let request = Self::authorized(session, HttpMethod::Post, url).json(&body)?;
        let response = self.send(request, None).await?;

        let file: DriveFile = serde_json::from_slice(&response.body).map_err(|e| {
            GoogleDriveError::ParseError(format!("Failed to parse created file: {}", e))
        })?;

        Ok(file.into())
    }

    #[instrument(skip(self, session), fields(document_id = %document_id))]
    async fn export_document(&self, session: &Session, document_id: &str) -> BridgeResult<String> {
        info!("Exporting document from Google Drive");

        let url = format!(
            "{}/files/{}/export?mimeType={}",
            DRIVE_API_BASE,
            document_id,
            urlencoding::encode(EXPORT_MIME_TYPE)
        );

        let request = HttpRequest::new(HttpMethod::Get, url).bearer_token(session.bearer_token());
        let response = self.send(request, Some(document_id)).await?;

        Ok(response.text()?)
    }

    #[instrument(skip(self, session, content), fields(document_id = %document_id))]
    async fn update_document(
        &self,
        session: &Session,
        document_id: &str,
        content: &str,
    ) -> BridgeResult<()> {
        info!(bytes = content.len(), "Updating document content");

        let url = format!(
            "{}/files/{}?uploadType=media",
            DRIVE_UPLOAD_BASE, document_id
        );

        let request = Self::authorized(session, HttpMethod::Patch, url)
            .raw_body(EXPORT_MIME_TYPE, Bytes::from(content.to_string()));
        self.send(request, Some(document_id)).await?;

        Ok(())
    }

    #[instrument(skip(self, session), fields(item_id = %item_id))]
    async fn delete_item(&self, session: &Session, item_id: &str) -> BridgeResult<()> {
        info!("Deleting item from Google Drive");

        let url = format!("{}/files/{}", DRIVE_API_BASE, item_id);
        let request = Self::authorized(session, HttpMethod::Delete, url);
        self.send(request, Some(item_id)).await?;

        Ok(())
    }

    #[instrument(skip(self, session), fields(item_id = %item_id))]
    async fn get_item_metadata(&self, session: &Session, item_id: &str) -> BridgeResult<RemoteItem> {
        let url = format!(
            "{}/files/{}?fields={}",
            DRIVE_API_BASE, item_id, FILE_FIELDS
        );

        let request = Self::authorized(session, HttpMethod::Get, url);
        let response = self.send(request, Some(item_id)).await?;

        let file: DriveFile = serde_json::from_slice(&response.body).map_err(|e| {
            GoogleDriveError::ParseError(format!("Failed to parse file metadata: {}", e))
        })?;

        Ok(file.into())
    }
}
