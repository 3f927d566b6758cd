use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::experience::ExperienceRow, errors::AppError, repositories::sqlx_repo::SqlxExperienceRepo};

const EXPERIENCE_COLUMNS: &str = r#"
    id, title, company, position, start_date, end_date, description,
    tech_stack, achievements, display_order, created_at, updated_at
"#;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experiences in storage order; callers sort for display
    async fn list_experiences(&self) -> Result<Vec<ExperienceRow>, AppError>;

    async fn get_experience_by_id(&self, id: &Uuid) -> Result<ExperienceRow, AppError>;

    /// Lightweight round-trip used by the health check
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxExperienceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxExperienceRepo { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn list_experiences(&self) -> Result<Vec<ExperienceRow>, AppError> {
        let query = format!(
            "SELECT {} FROM experiences ORDER BY display_order ASC, start_date DESC",
            EXPERIENCE_COLUMNS
        );

        let rows = sqlx::query_as::<_, ExperienceRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn get_experience_by_id(&self, id: &Uuid) -> Result<ExperienceRow, AppError> {
        let query = format!("SELECT {} FROM experiences WHERE id = $1", EXPERIENCE_COLUMNS);

        sqlx::query_as::<_, ExperienceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Experience not found".into()))
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
