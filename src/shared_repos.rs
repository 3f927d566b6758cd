use crate::repositories::sqlx_repo::{SqlxContactMeRepo, SqlxExperienceRepo, SqlxProjectRepo};

/// One pool, cloned into each repository.
#[derive(Clone)]
pub struct SharedRepositories {
    pub experience_repo: SqlxExperienceRepo,
    pub project_repo: SqlxProjectRepo,
    pub contact_repo: SqlxContactMeRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let experience_repo = SqlxExperienceRepo::new(pool.clone());
        let project_repo = SqlxProjectRepo::new(pool.clone());
        let contact_repo = SqlxContactMeRepo::new(pool);

        SharedRepositories {
            experience_repo,
            project_repo,
            contact_repo,
        }
    }
}
