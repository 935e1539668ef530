//! # Tracked Project Repository
//!
//! Persistence for the user's tracked project list. A tracked project is
//! a local reference to a remote root folder; the refresh operation in
//! the service layer prunes rows whose remote item was trashed.

use crate::error::{ProjectError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// One tracked project
///
/// `project_id` is the backend-issued id of the project's root folder,
/// never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedProject {
    pub project_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for tracked-project persistence
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert a new tracked project
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is already tracked or the
    /// database operation fails
    async fn insert(&self, project: &TrackedProject) -> Result<()>;

    /// List all tracked projects, most recent first
    async fn list(&self) -> Result<Vec<TrackedProject>>;

    /// Find the most recently tracked project
    async fn find_latest(&self) -> Result<Option<TrackedProject>>;

    /// Find a tracked project by its remote id
    async fn find_by_id(&self, project_id: &str) -> Result<Option<TrackedProject>>;

    /// Remove a tracked project reference (the remote item is untouched)
    async fn delete(&self, project_id: &str) -> Result<()>;
}

// ============================================================================
// SQLite Implementation
// ============================================================================

/// SQLite implementation of ProjectRepository
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new SQLite project repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the backing table when it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tracked_projects (
                project_id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Database row representation of a tracked project
#[derive(Debug, FromRow)]
struct TrackedProjectRow {
    project_id: String,
    name: String,
    created_at: String,
}

impl TryFrom<TrackedProjectRow> for TrackedProject {
    type Error = ProjectError;

    fn try_from(row: TrackedProjectRow) -> Result<TrackedProject> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| {
                ProjectError::InvalidRecord(format!(
                    "Bad created_at for project {}: {}",
                    row.project_id, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(TrackedProject {
            project_id: row.project_id,
            name: row.name,
            created_at,
        })
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn insert(&self, project: &TrackedProject) -> Result<()> {
        sqlx::query(
            "INSERT INTO tracked_projects (project_id, name, created_at) VALUES (?, ?, ?)",
        )
        .bind(&project.project_id)
        .bind(&project.name)
        .bind(project.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<TrackedProject>> {
        let rows: Vec<TrackedProjectRow> = sqlx::query_as(
            "SELECT project_id, name, created_at FROM tracked_projects ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_latest(&self) -> Result<Option<TrackedProject>> {
        let row: Option<TrackedProjectRow> = sqlx::query_as(
            "SELECT project_id, name, created_at FROM tracked_projects \
             ORDER BY created_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_id(&self, project_id: &str) -> Result<Option<TrackedProject>> {
        let row: Option<TrackedProjectRow> = sqlx::query_as(
            "SELECT project_id, name, created_at FROM tracked_projects WHERE project_id = ?",
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn delete(&self, project_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM tracked_projects WHERE project_id = ?")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
