use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::ValidationError;

use crate::utils::{image_url::sanitize_optional_image_url, tags::normalize_tags};

const MIN_SLUG_LENGTH: usize = 3;
const MAX_SLUG_LENGTH: usize = 80;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tech_stack: JsonValue,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// `None` tells the front end to show its placeholder image.
    pub image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
    pub total: usize,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.len() < MIN_SLUG_LENGTH || slug.len() > MAX_SLUG_LENGTH {
        return Err(new_validation_error("slug_length", "Slug must be between 3 and 80 characters"));
    }
    if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(new_validation_error("slug_invalid_chars", "Slug must contain only lowercase letters, digits, or hyphens"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error("slug_edge_hyphen", "Slug must not start or end with a hyphen"));
    }
    if slug.contains("--") {
        return Err(new_validation_error("slug_double_hyphen", "Slug must not contain consecutive hyphens"));
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<ProjectRow> for ProjectResponse {
    fn from(row: ProjectRow) -> Self {
        ProjectResponse {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            image_url: sanitize_optional_image_url(row.image_url.as_deref()),
            tech_stack: normalize_tags(&row.tech_stack),
            github_url: non_blank(row.github_url),
            live_url: non_blank(row.live_url),
            featured: row.featured,
        }
    }
}
