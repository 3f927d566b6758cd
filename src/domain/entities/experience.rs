use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

use crate::{entities::period::PeriodLabel, utils::tags::normalize_tags};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExperienceRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub tech_stack: JsonValue, // strings or { "name": .. } objects
    pub achievements: Vec<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Domain Models ─────────────────────────────────────────────────

/// One work-experience entry as the formatters and the résumé builder see it.
///
/// Dates stay strings here so a malformed value degrades to a sentinel label
/// instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExperienceRecord {
    pub id: String,

    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,

    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[serde(default)]
    pub achievements: Vec<String>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    #[serde(flatten)]
    pub record: ExperienceRecord,
    pub period: PeriodLabel,
}

#[derive(Debug, Serialize)]
pub struct ExperienceListResponse {
    pub experiences: Vec<ExperienceResponse>,
    pub total: usize,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<ExperienceRow> for ExperienceRecord {
    fn from(row: ExperienceRow) -> Self {
        let achievements = row.achievements
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        ExperienceRecord {
            id: row.id.to_string(),
            title: row.title.trim().to_string(),
            company: row.company.trim().to_string(),
            position: row.position.trim().to_string(),
            start_date: row.start_date.format("%Y-%m-%d").to_string(),
            end_date: row.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            description: row.description.trim().to_string(),
            tech_stack: normalize_tags(&row.tech_stack),
            achievements,
        }
    }
}
