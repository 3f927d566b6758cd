use async_trait::async_trait;
use uuid::Uuid;

use crate::{entities::contact_me::ContactMeFormInsert, errors::AppError, repositories::sqlx_repo::SqlxContactMeRepo};

#[async_trait]
pub trait ContactMeRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &ContactMeFormInsert) -> Result<Uuid, AppError>;
}

impl SqlxContactMeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactMeRepo { pool }
    }
}

#[async_trait]
impl ContactMeRepository for SqlxContactMeRepo {
    async fn create_contact_message(&self, msg: &ContactMeFormInsert) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message) 
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
