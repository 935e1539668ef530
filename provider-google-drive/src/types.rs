//! Google Drive API request and response types
//!
//! Data structures for the Drive API v3 endpoints this provider uses.

use bridge_traits::provider::{ItemKind, RemoteItem};
use serde::{Deserialize, Serialize};

use crate::connector::{DOCUMENT_MIME_TYPE, FOLDER_MIME_TYPE};

/// Google Drive API file resource
///
/// See: https://developers.google.com/drive/api/v3/reference/files#resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    pub name: String,

    /// MIME type
    pub mime_type: String,

    /// Whether file is trashed
    #[serde(default)]
    pub trashed: bool,

    /// Parent folder IDs
    #[serde(default)]
    pub parents: Vec<String>,
}

impl From<DriveFile> for RemoteItem {
    fn from(file: DriveFile) -> Self {
        let kind = match file.mime_type.as_str() {
            DOCUMENT_MIME_TYPE => Some(ItemKind::Document),
            FOLDER_MIME_TYPE => Some(ItemKind::Folder),
            _ => None,
        };

        RemoteItem {
            id: file.id,
            name: file.name,
            mime_type: file.mime_type,
            kind,
            trashed: file.trashed,
            parents: file.parents,
        }
    }
}

/// Google Drive API files.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/files/list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesListResponse {
    /// Files in the listing, in API order
    pub files: Vec<DriveFile>,

    /// Token for the next page, when the listing was truncated
    #[serde(default)]
    pub next_page_token: Option<String>,

    /// Whether the search was incomplete
    #[serde(default)]
    pub incomplete_search: bool,
}

/// Metadata body for files.create
///
/// See: https://developers.google.com/drive/api/v3/reference/files/create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// Name of the new file or folder
    pub name: String,

    /// MIME type selecting document vs folder
    pub mime_type: String,

    /// Parent folder, absent for the top-level project folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drive_file() {
        let json = r#"{
            "id": "abc123",
            "name": "Chapter One",
            "mimeType": "application/vnd.google-apps.document",
            "trashed": false,
            "parents": ["folder1"]
        }"#;

        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.id, "abc123");
        assert_eq!(file.name, "Chapter One");
        assert_eq!(file.mime_type, "application/vnd.google-apps.document");
        assert!(!file.trashed);
    }

    #[test]
    fn test_deserialize_drive_file_defaults() {
        // files.list with narrow fields omits trashed and parents
        let json = r#"{
            "id": "abc123",
            "name": "Notes",
            "mimeType": "application/vnd.google-apps.folder"
        }"#;

        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert!(!file.trashed);
        assert!(file.parents.is_empty());
    }

    #[test]
    fn test_deserialize_files_list_response() {
        let json = r#"{
            "files": [
                {
                    "id": "file1",
                    "name": "Draft",
                    "mimeType": "application/vnd.google-apps.document"
                }
            ],
            "nextPageToken": "token123",
            "incompleteSearch": false
        }"#;

        let response: FilesListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.next_page_token, Some("token123".to_string()));
    }

    #[test]
    fn test_serialize_create_request_omits_missing_parents() {
        let request = CreateFileRequest {
            name: "New Project".to_string(),
            mime_type: "application/vnd.google-apps.folder".to_string(),
            parents: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("parents"));
        assert!(json.contains(r#""mimeType":"application/vnd.google-apps.folder""#));
    }

    #[test]
    fn test_drive_file_into_remote_item() {
        let file = DriveFile {
            id: "doc1".to_string(),
            name: "Draft".to_string(),
            mime_type: "application/vnd.google-apps.document".to_string(),
            trashed: true,
            parents: vec!["folder1".to_string()],
        };

        let item: RemoteItem = file.into();
        assert_eq!(item.id, "doc1");
        assert_eq!(item.kind, Some(ItemKind::Document));
        assert!(item.trashed);
        assert_eq!(item.parents, vec!["folder1".to_string()]);
    }

    #[test]
    fn test_unrecognized_mime_type_has_no_kind() {
        let file = DriveFile {
            id: "pdf1".to_string(),
            name: "scan.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            trashed: false,
            parents: vec![],
        };

        let item: RemoteItem = file.into();
        assert_eq!(item.kind, None);
    }
}
