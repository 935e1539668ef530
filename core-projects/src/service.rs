//! # Project Service
//!
//! The service layer the web tier talks to. Every operation is a thin
//! delegation to the document provider (plus, for tracked projects, the
//! repository); failures propagate unmodified and nothing is retried or
//! compensated here.

use bridge_traits::provider::{DocumentProvider, ItemKind, RemoteItem};
use bridge_traits::session::Session;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::repository::{ProjectRepository, TrackedProject};
use crate::tree::{ProjectTreeMapper, TreeNode};

/// Title used when a document is created without one
const DEFAULT_DOCUMENT_TITLE: &str = "Text Document";

/// The bare content-type meta tag Google Docs emits at the top of an
/// HTML export
const GOOGLE_EXPORT_META: &str =
    r#"<meta content="text/html; charset=UTF-8" http-equiv="content-type">"#;

/// Replacement prefix restoring a full document shell with the inline
/// page styling the editor expects
const WRAPPED_DOCUMENT_PREFIX: &str = r#"<html><head><meta content="text/html; charset=UTF-8" http-equiv="content-type"></head><body style="background-color:#ffffff;padding:72pt 72pt 72pt 72pt;max-width:468pt">"#;

/// Wrap edited document HTML into a full page before writing it back
///
/// Google's HTML export strips the `<html>`/`<body>` shell down to a
/// bare meta tag. This substitutes the full shell back in and closes it,
/// so the stored document renders with the expected page styling. The
/// transform is a fixed string substitution, nothing more.
pub fn wrap_document_html(content: &str) -> String {
    let body = content.replace(GOOGLE_EXPORT_META, WRAPPED_DOCUMENT_PREFIX);
    format!("{}</body></html>", body)
}

/// Service façade for the document-project feature
///
/// Holds the provider and the tracked-project repository; per-user
/// credentials arrive as an explicit [`Session`] on every call.
pub struct ProjectService {
    provider: Arc<dyn DocumentProvider>,
    repository: Arc<dyn ProjectRepository>,
    mapper: ProjectTreeMapper,
}

impl ProjectService {
    /// Create a new service from explicit collaborators
    pub fn new(
        provider: Arc<dyn DocumentProvider>,
        repository: Arc<dyn ProjectRepository>,
    ) -> Self {
        let mapper = ProjectTreeMapper::new(Arc::clone(&provider));
        Self {
            provider,
            repository,
            mapper,
        }
    }

    /// Retrieve the full tree of a project folder
    ///
    /// A fresh tree is built on every call; persistence of the result is
    /// the caller's responsibility.
    #[instrument(skip(self, session), fields(folder_id = %folder_id))]
    pub async fn retrieve_project(
        &self,
        session: &Session,
        folder_id: &str,
    ) -> Result<Vec<TreeNode>> {
        self.mapper.map_folder(session, folder_id).await
    }

    /// Create a new project: a top-level folder plus a local tracking row
    #[instrument(skip(self, session), fields(name = %name))]
    pub async fn create_project(&self, session: &Session, name: &str) -> Result<TrackedProject> {
        let item = self
            .provider
            .create_item(session, ItemKind::Folder, name, None)
            .await?;

        let project = TrackedProject {
            project_id: item.id,
            name: item.name,
            created_at: Utc::now(),
        };
        self.repository.insert(&project).await?;

        info!(project_id = %project.project_id, "Created and tracked project");

        Ok(project)
    }

    /// Create a folder, optionally inside a parent folder
    #[instrument(skip(self, session), fields(name = %name))]
    pub async fn create_folder(
        &self,
        session: &Session,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<RemoteItem> {
        Ok(self
            .provider
            .create_item(session, ItemKind::Folder, name, parent_id)
            .await?)
    }

    /// Create a document, optionally inside a parent folder
    ///
    /// Falls back to a default title when none is given.
    #[instrument(skip(self, session))]
    pub async fn create_document(
        &self,
        session: &Session,
        title: Option<&str>,
        parent_id: Option<&str>,
    ) -> Result<RemoteItem> {
        let title = title.unwrap_or(DEFAULT_DOCUMENT_TITLE);

        Ok(self
            .provider
            .create_item(session, ItemKind::Document, title, parent_id)
            .await?)
    }

    /// Export a document's content as rendered HTML
    #[instrument(skip(self, session), fields(document_id = %document_id))]
    pub async fn export_document(&self, session: &Session, document_id: &str) -> Result<String> {
        Ok(self.provider.export_document(session, document_id).await?)
    }

    /// Overwrite a document with edited HTML content
    ///
    /// The content is wrapped into a full page (see
    /// [`wrap_document_html`]) before it is written back.
    #[instrument(skip(self, session, content), fields(document_id = %document_id))]
    pub async fn update_document(
        &self,
        session: &Session,
        document_id: &str,
        content: &str,
    ) -> Result<()> {
        let wrapped = wrap_document_html(content);

        Ok(self
            .provider
            .update_document(session, document_id, &wrapped)
            .await?)
    }

    /// Delete an item from the backend
    ///
    /// Tracked-project rows are not touched here; `refresh_projects`
    /// picks up remote deletions on its next pass.
    #[instrument(skip(self, session), fields(item_id = %item_id))]
    pub async fn delete_item(&self, session: &Session, item_id: &str) -> Result<()> {
        Ok(self.provider.delete_item(session, item_id).await?)
    }

    /// Scan tracked projects and drop references to remotely trashed ones
    ///
    /// Returns the number of references removed. A metadata lookup
    /// failure aborts the scan and propagates; rows already pruned in
    /// this pass stay pruned.
    #[instrument(skip(self, session))]
    pub async fn refresh_projects(&self, session: &Session) -> Result<usize> {
        let mut removed = 0;

        for project in self.repository.list().await? {
            let item = self
                .provider
                .get_item_metadata(session, &project.project_id)
                .await?;

            if item.trashed {
                warn!(
                    project_id = %project.project_id,
                    "Tracked project was trashed remotely, dropping local reference"
                );
                self.repository.delete(&project.project_id).await?;
                removed += 1;
            }
        }

        info!(removed, "Refreshed tracked projects");

        Ok(removed)
    }

    /// Retrieve the most recently tracked project and its tree
    ///
    /// Used to lazy-load the last project on login. Returns `None` when
    /// nothing is tracked yet.
    #[instrument(skip(self, session))]
    pub async fn last_project(
        &self,
        session: &Session,
    ) -> Result<Option<(TrackedProject, Vec<TreeNode>)>> {
        let Some(project) = self.repository.find_latest().await? else {
            return Ok(None);
        };

        let tree = self.retrieve_project(session, &project.project_id).await?;

        Ok(Some((project, tree)))
    }
}

#[cfg(feature = "desktop-shims")]
impl ProjectService {
    /// Bootstrap the service with desktop defaults
    ///
    /// Wires the Google Drive connector over the configured (or default
    /// reqwest) HTTP client and a SQLite tracked-project store at the
    /// configured database path.
    pub async fn desktop(config: &core_runtime::config::CoreConfig) -> Result<Self> {
        use crate::repository::SqliteProjectRepository;
        use provider_google_drive::GoogleDriveConnector;
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

        let http_client = config.require_http_client()?;
        let provider = Arc::new(GoogleDriveConnector::new(http_client));

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repository = SqliteProjectRepository::new(pool);
        repository.migrate().await?;

        Ok(Self::new(provider, Arc::new(repository)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::{BridgeError, Result as BridgeResult};
    use chrono::TimeZone;
    use mockall::mock;
    use mockall::predicate::eq;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::repository::SqliteProjectRepository;

    mock! {
        Provider {}

        #[async_trait]
        impl DocumentProvider for Provider {
            async fn list_children(&self, session: &Session, folder_id: &str) -> BridgeResult<Vec<RemoteItem>>;
            async fn create_item<'s, 'b, 'n, 'p>(&'s self, session: &'b Session, kind: ItemKind, name: &'n str, parent_id: Option<&'p str>) -> BridgeResult<RemoteItem>;
            async fn export_document(&self, session: &Session, document_id: &str) -> BridgeResult<String>;
            async fn update_document(&self, session: &Session, document_id: &str, content: &str) -> BridgeResult<()>;
            async fn delete_item(&self, session: &Session, item_id: &str) -> BridgeResult<()>;
            async fn get_item_metadata(&self, session: &Session, item_id: &str) -> BridgeResult<RemoteItem>;
        }
    }

    fn remote(id: &str, name: &str, kind: ItemKind, trashed: bool) -> RemoteItem {
        let mime_type = match kind {
            ItemKind::Document => "application/vnd.google-apps.document",
            ItemKind::Folder => "application/vnd.google-apps.folder",
        };

        RemoteItem {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            kind: Some(kind),
            trashed,
            parents: vec![],
        }
    }

    async fn test_repository() -> Arc<dyn ProjectRepository> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let repository = SqliteProjectRepository::new(pool);
        repository.migrate().await.unwrap();
        Arc::new(repository)
    }

    fn tracked(id: &str, name: &str, ts: i64) -> TrackedProject {
        TrackedProject {
            project_id: id.to_string(),
            name: name.to_string(),
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    fn test_session() -> Session {
        Session::new("test_token")
    }

    #[test]
    fn test_wrap_document_html_substitutes_shell() {
        let exported = format!("{}<p>Hello</p>", GOOGLE_EXPORT_META);
        let wrapped = wrap_document_html(&exported);

        assert!(wrapped.starts_with(WRAPPED_DOCUMENT_PREFIX));
        assert!(wrapped.ends_with("<p>Hello</p></body></html>"));
        assert!(!wrapped.contains(&format!("{}{}", GOOGLE_EXPORT_META, "<p>")));
    }

    #[test]
    fn test_wrap_document_html_without_meta_still_closes_body() {
        let wrapped = wrap_document_html("<p>Hello</p>");
        assert_eq!(wrapped, "<p>Hello</p></body></html>");
    }

    #[tokio::test]
    async fn test_create_document_uses_default_title() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_item()
            .withf(|_, kind, name, parent| {
                *kind == ItemKind::Document && name == "Text Document" && parent.is_none()
            })
            .times(1)
            .returning(|_, _, name, _| Ok(remote("doc1", name, ItemKind::Document, false)));

        let service = ProjectService::new(Arc::new(provider), test_repository().await);
        let item = service
            .create_document(&test_session(), None, None)
            .await
            .unwrap();

        assert_eq!(item.name, "Text Document");
    }

    #[tokio::test]
    async fn test_create_document_with_title_and_parent() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_item()
            .withf(|_, kind, name, parent| {
                *kind == ItemKind::Document && name == "Chapter One" && *parent == Some("folder1")
            })
            .times(1)
            .returning(|_, _, name, _| Ok(remote("doc1", name, ItemKind::Document, false)));

        let service = ProjectService::new(Arc::new(provider), test_repository().await);
        let item = service
            .create_document(&test_session(), Some("Chapter One"), Some("folder1"))
            .await
            .unwrap();

        assert_eq!(item.id, "doc1");
    }

    #[tokio::test]
    async fn test_update_document_wraps_content() {
        let exported = format!("{}<p>Edited</p>", GOOGLE_EXPORT_META);
        let expected = wrap_document_html(&exported);

        let mut provider = MockProvider::new();
        provider
            .expect_update_document()
            .withf(move |_, document_id, content| document_id == "doc1" && content == expected)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = ProjectService::new(Arc::new(provider), test_repository().await);
        service
            .update_document(&test_session(), "doc1", &exported)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_export_document_passes_through() {
        let mut provider = MockProvider::new();
        provider
            .expect_export_document()
            .with(mockall::predicate::always(), eq("doc1"))
            .times(1)
            .returning(|_, _| Ok("<p>content</p>".to_string()));

        let service = ProjectService::new(Arc::new(provider), test_repository().await);
        let html = service
            .export_document(&test_session(), "doc1")
            .await
            .unwrap();

        assert_eq!(html, "<p>content</p>");
    }

    #[tokio::test]
    async fn test_create_project_tracks_new_folder() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_item()
            .withf(|_, kind, name, parent| {
                *kind == ItemKind::Folder && name == "Novel" && parent.is_none()
            })
            .times(1)
            .returning(|_, _, name, _| Ok(remote("folder1", name, ItemKind::Folder, false)));

        let repository = test_repository().await;
        let service = ProjectService::new(Arc::new(provider), Arc::clone(&repository));

        let project = service.create_project(&test_session(), "Novel").await.unwrap();
        assert_eq!(project.project_id, "folder1");

        let stored = repository.find_by_id("folder1").await.unwrap();
        assert_eq!(stored.map(|p| p.name), Some("Novel".to_string()));
    }

    #[tokio::test]
    async fn test_refresh_projects_removes_trashed_references() {
        let repository = test_repository().await;
        repository
            .insert(&tracked("live", "Live", 1_600_000_000))
            .await
            .unwrap();
        repository
            .insert(&tracked("gone", "Gone", 1_700_000_000))
            .await
            .unwrap();

        let mut provider = MockProvider::new();
        provider
            .expect_get_item_metadata()
            .times(2)
            .returning(|_, item_id| {
                Ok(remote(
                    item_id,
                    "Project",
                    ItemKind::Folder,
                    item_id == "gone",
                ))
            });

        let service = ProjectService::new(Arc::new(provider), Arc::clone(&repository));
        let removed = service.refresh_projects(&test_session()).await.unwrap();

        assert_eq!(removed, 1);
        assert!(repository.find_by_id("gone").await.unwrap().is_none());
        assert!(repository.find_by_id("live").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_refresh_projects_propagates_metadata_failure() {
        let repository = test_repository().await;
        repository
            .insert(&tracked("folder1", "Novel", 1_700_000_000))
            .await
            .unwrap();

        let mut provider = MockProvider::new();
        provider
            .expect_get_item_metadata()
            .times(1)
            .returning(|_, _| Err(BridgeError::OperationFailed("quota exceeded".to_string())));

        let service = ProjectService::new(Arc::new(provider), Arc::clone(&repository));
        let result = service.refresh_projects(&test_session()).await;

        assert!(result.is_err());
        // The failing row was not deleted
        assert!(repository.find_by_id("folder1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_last_project_none_when_untracked() {
        let provider = MockProvider::new();
        let service = ProjectService::new(Arc::new(provider), test_repository().await);

        let result = service.last_project(&test_session()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_last_project_returns_most_recent_tree() {
        let repository = test_repository().await;
        repository
            .insert(&tracked("old", "Old", 1_600_000_000))
            .await
            .unwrap();
        repository
            .insert(&tracked("new", "New", 1_700_000_000))
            .await
            .unwrap();

        let mut provider = MockProvider::new();
        provider
            .expect_list_children()
            .withf(|_, folder_id| folder_id == "new")
            .times(1)
            .returning(|_, _| Ok(vec![remote("doc1", "Intro", ItemKind::Document, false)]));

        let service = ProjectService::new(Arc::new(provider), Arc::clone(&repository));
        let (project, tree) = service
            .last_project(&test_session())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(project.project_id, "new");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id(), "doc1");
    }

    #[tokio::test]
    async fn test_delete_item_passes_through() {
        let mut provider = MockProvider::new();
        provider
            .expect_delete_item()
            .withf(|_, item_id| item_id == "doc1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProjectService::new(Arc::new(provider), test_repository().await);
        service.delete_item(&test_session(), "doc1").await.unwrap();
    }
}
