//! Document Provider Abstraction
//!
//! The capability set the document-project feature needs from a remote
//! storage backend: list a folder's children, create documents and
//! folders, export and overwrite document content, delete items, and
//! read item metadata. Google Drive is the only production backend
//! today (`provider-google-drive`); tests substitute a mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::Session;

/// Kind of item a provider can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Document,
    Folder,
}

/// One remote item as the provider reports it
///
/// Ids are opaque strings issued by the backend and never generated
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// Backend-agnostic classification; `None` when the MIME type is
    /// neither a document nor a folder
    pub kind: Option<ItemKind>,
    /// Whether the backend has marked the item for deletion
    pub trashed: bool,
    /// Parent folder ids, when the backend reports them
    pub parents: Vec<String>,
}

/// Remote document storage provider
///
/// Every operation takes an explicit [`Session`]; providers hold no
/// per-user state. Failures surface as a single opaque [`BridgeError`]
/// category — callers get whatever the backend raised, unmodified, and
/// must not expect retries or partial results from this layer.
///
/// [`BridgeError`]: crate::error::BridgeError
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// List the immediate children of a folder, in backend order
    ///
    /// The returned order is meaningful: tree construction preserves it.
    async fn list_children(&self, session: &Session, folder_id: &str) -> Result<Vec<RemoteItem>>;

    /// Create a document or folder, optionally inside a parent folder
    async fn create_item(
        &self,
        session: &Session,
        kind: ItemKind,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<RemoteItem>;

    /// Export a document's content as rendered HTML
    async fn export_document(&self, session: &Session, document_id: &str) -> Result<String>;

    /// Overwrite a document's content with the given HTML payload
    async fn update_document(
        &self,
        session: &Session,
        document_id: &str,
        content: &str,
    ) -> Result<()>;

    /// Remove an item from the backend
    async fn delete_item(&self, session: &Session, item_id: &str) -> Result<()>;

    /// Fetch metadata for a single item (used to detect trashed items)
    async fn get_item_metadata(&self, session: &Session, item_id: &str) -> Result<RemoteItem>;
}
