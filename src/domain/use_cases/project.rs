use crate::{
    entities::project::{validate_slug, ProjectListResponse, ProjectResponse},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects in display order, optionally only the featured ones
    pub async fn list_projects(&self, featured_only: bool) -> Result<ProjectListResponse, AppError> {
        let projects: Vec<ProjectResponse> = self.project_repo
            .list_projects(featured_only)
            .await?
            .into_iter()
            .map(ProjectResponse::from)
            .collect();

        Ok(ProjectListResponse {
            total: projects.len(),
            projects,
        })
    }

    /// Retrieves a project by its slug
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<ProjectResponse, AppError> {
        let slug = slug.trim();
        validate_slug(slug).map_err(|e| {
            AppError::InvalidInput(
                e.message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid slug".to_string())
            )
        })?;

        let row = self.project_repo.get_project_by_slug(slug).await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
                _ => e,
            })?;

        Ok(row.into())
    }
}
