use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    #[serde(default)]
    pub featured: bool,
}

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects(query.featured).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(project))
}
