//! Project Tree Construction
//!
//! Maps a remote folder hierarchy into an in-memory tree. Given a root
//! folder id, the mapper lists immediate children, emits a leaf for each
//! document, recurses into each sub-folder, and skips anything else.
//! Child order always equals the provider's listing order.

use bridge_traits::provider::{DocumentProvider, ItemKind};
use bridge_traits::session::Session;
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::Result;

/// One node of a project tree
///
/// Documents are always leaves; only folders carry children. The
/// invariant holds by construction: there is no children field on the
/// `Document` variant to populate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Document {
        id: String,
        title: String,
        mime_type: String,
    },
    Folder {
        id: String,
        title: String,
        mime_type: String,
        /// Sub-tree in listing order
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Node id as issued by the backend
    pub fn id(&self) -> &str {
        match self {
            TreeNode::Document { id, .. } | TreeNode::Folder { id, .. } => id,
        }
    }

    /// Display title copied from the remote item name
    pub fn title(&self) -> &str {
        match self {
            TreeNode::Document { title, .. } | TreeNode::Folder { title, .. } => title,
        }
    }
}

/// Builds project trees from a remote folder hierarchy
///
/// Each call constructs a fresh tree; nothing is cached between calls.
/// Traversal is depth-first and strictly sequential: a folder's listing
/// is awaited before recursion continues, and sibling folders are never
/// walked concurrently. Recursion depth equals the remote nesting depth;
/// the backend cannot produce a folder that is its own ancestor, so no
/// cycle detection is needed.
pub struct ProjectTreeMapper {
    provider: Arc<dyn DocumentProvider>,
}

impl ProjectTreeMapper {
    pub fn new(provider: Arc<dyn DocumentProvider>) -> Self {
        Self { provider }
    }

    /// Map a folder and everything beneath it into an ordered tree
    ///
    /// # Errors
    ///
    /// A listing failure anywhere in the recursion aborts the whole
    /// call: the error propagates unmodified and no partial tree is
    /// returned, even when earlier siblings were already mapped.
    #[instrument(skip(self, session), fields(folder_id = %folder_id))]
    pub fn map_folder<'a>(
        &'a self,
        session: &'a Session,
        folder_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<TreeNode>>> {
        async move {
            let items = self.provider.list_children(session, folder_id).await?;

            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                match item.kind {
                    Some(ItemKind::Document) => {
                        nodes.push(TreeNode::Document {
                            id: item.id,
                            title: item.name,
                            mime_type: item.mime_type,
                        });
                    }
                    Some(ItemKind::Folder) => {
                        let children = self.map_folder(session, &item.id).await?;
                        nodes.push(TreeNode::Folder {
                            id: item.id,
                            title: item.name,
                            mime_type: item.mime_type,
                            children,
                        });
                    }
                    None => {
                        // Neither document nor folder: no record emitted
                        debug!(
                            item_id = %item.id,
                            mime_type = %item.mime_type,
                            "Skipping item with unsupported MIME type"
                        );
                    }
                }
            }

            Ok(nodes)
        }
        .boxed()
    }
}
