use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    entities::{
        experience::{ExperienceListResponse, ExperienceRecord, ExperienceResponse},
        resume::{ResumeDocument, ResumeExport},
    },
    errors::AppError,
    render::ResumeRenderer,
    repositories::experience::ExperienceRepository,
    resume_builder::{sort_by_recency, ResumeDocumentBuilder},
    tenure::period_label_at,
    utils::valid_uuid::valid_uuid,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
    builder: ResumeDocumentBuilder,
    renderer: Arc<dyn ResumeRenderer>,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(
        experience_repo: R,
        builder: ResumeDocumentBuilder,
        renderer: Arc<dyn ResumeRenderer>
    ) -> Self {
        ExperienceHandler { experience_repo, builder, renderer }
    }

    /// Loads every stored experience, normalized into display records.
    /// Records without a title or company are skipped and logged.
    async fn load_records(&self) -> Result<Vec<ExperienceRecord>, AppError> {
        let rows = self.experience_repo.list_experiences().await?;

        let records = rows
            .into_iter()
            .map(ExperienceRecord::from)
            .filter(|record| match record.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Skipping experience {}: {}", record.id, e);
                    false
                }
            })
            .collect();

        Ok(records)
    }

    /// Lists experiences, most recent first, with their period labels
    pub async fn list_experiences(&self) -> Result<ExperienceListResponse, AppError> {
        self.list_experiences_at(Utc::now()).await
    }

    pub async fn list_experiences_at(&self, now: DateTime<Utc>) -> Result<ExperienceListResponse, AppError> {
        let records = self.load_records().await?;

        let experiences: Vec<ExperienceResponse> = sort_by_recency(&records)
            .into_iter()
            .map(|record| to_response(record.clone(), now))
            .collect();

        Ok(ExperienceListResponse {
            total: experiences.len(),
            experiences,
        })
    }

    /// Retrieves a single experience by its ID
    pub async fn get_experience(&self, id: &str) -> Result<ExperienceResponse, AppError> {
        let valid_id = valid_uuid(id)?;

        let row = self.experience_repo.get_experience_by_id(&valid_id).await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Experience not found".to_string()),
                _ => e,
            })?;

        Ok(to_response(row.into(), Utc::now()))
    }

    /// Builds the résumé document tree from all stored experiences
    pub async fn resume_document(&self) -> Result<ResumeDocument, AppError> {
        let records = self.load_records().await?;
        Ok(self.builder.build(&records))
    }

    /// Builds and renders the résumé for download
    pub async fn export_resume(&self) -> Result<ResumeExport, AppError> {
        let document = self.resume_document().await?;
        let bytes = self.renderer.render(&document)?;
        let file_name = self.renderer.file_name(&document);

        tracing::info!(file_name = %file_name, bytes = bytes.len(), "Exported resume");

        Ok(ResumeExport {
            file_name,
            content_type: self.renderer.content_type(),
            bytes,
        })
    }
}

fn to_response(record: ExperienceRecord, now: DateTime<Utc>) -> ExperienceResponse {
    let period = period_label_at(&record.start_date, record.end_date.as_deref(), now);
    ExperienceResponse { record, period }
}
