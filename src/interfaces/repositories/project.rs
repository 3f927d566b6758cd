use async_trait::async_trait;

use crate::{entities::project::ProjectRow, errors::AppError, repositories::sqlx_repo::SqlxProjectRepo};

const PROJECT_COLUMNS: &str = r#"
    id, title, slug, description, image_url, tech_stack,
    github_url, live_url, featured, display_order, created_at, updated_at
"#;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, featured_only: bool) -> Result<Vec<ProjectRow>, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<ProjectRow, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, featured_only: bool) -> Result<Vec<ProjectRow>, AppError> {
        let query = format!(
            "SELECT {} FROM projects WHERE ($1 = FALSE OR featured = TRUE) ORDER BY display_order ASC, created_at DESC",
            PROJECT_COLUMNS
        );

        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(featured_only)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<ProjectRow, AppError> {
        let query = format!("SELECT {} FROM projects WHERE slug = $1", PROJECT_COLUMNS);

        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }
}
