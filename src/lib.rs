use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases, resume_builder, tenure, theme};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, render, utils};

use render::json::JsonResumeRenderer;
use repositories::sqlx_repo::{SqlxContactMeRepo, SqlxExperienceRepo, SqlxProjectRepo};
use resume_builder::ResumeDocumentBuilder;
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactMeHandler, experience::ExperienceHandler, project::ProjectHandler};

pub struct AppState {
    pub experience_handler: AppExperienceHandler,
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
}

pub type AppExperienceHandler = ExperienceHandler<SqlxExperienceRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppContactHandler = ContactMeHandler<SqlxContactMeRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let repos = SharedRepositories::new(pool);
        let builder = ResumeDocumentBuilder::new(config.resume.clone());

        AppState {
            experience_handler: ExperienceHandler::new(
                repos.experience_repo,
                builder,
                Arc::new(JsonResumeRenderer),
            ),
            project_handler: ProjectHandler::new(repos.project_repo),
            contact_handler: ContactMeHandler::new(repos.contact_repo),
        }
    }
}
