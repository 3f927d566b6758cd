use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse, Responder,
};
use tracing::instrument;

use crate::{errors::AppError, AppState};

/// Document tree inline, for client-side preview
#[instrument(skip(state))]
pub async fn get_resume_document(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let document = state.experience_handler.resume_document().await?;

    Ok(HttpResponse::Ok().json(document))
}

/// Rendered résumé as a file download
#[instrument(skip(state))]
pub async fn download_resume(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let export = state.experience_handler.export_resume().await?;

    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(export.file_name)],
    };

    Ok(HttpResponse::Ok()
        .content_type(export.content_type)
        .insert_header(disposition)
        .body(export.bytes))
}
