#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mockall::mock;
use portfolio_api::{
    entities::{
        contact_me::ContactMeFormInsert,
        experience::{ExperienceRecord, ExperienceRow},
        project::ProjectRow,
        resume::{Block, BlockContent, ResumeDocument, ResumeProfile, SectionKind, SkillGroup, Metric, ResumeProject},
    },
    errors::AppError,
    repositories::{contact_me::ContactMeRepository, experience::ExperienceRepository, project::ProjectRepository},
};
use serde_json::json;
use uuid::Uuid;

// === Mocks for the repository traits ===
mock! {
    pub ExperienceRepo {}

    #[async_trait::async_trait]
    impl ExperienceRepository for ExperienceRepo {
        async fn list_experiences(&self) -> Result<Vec<ExperienceRow>, AppError>;
        async fn get_experience_by_id(&self, id: &Uuid) -> Result<ExperienceRow, AppError>;
        async fn check_connection(&self) -> Result<(), AppError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn list_projects(&self, featured_only: bool) -> Result<Vec<ProjectRow>, AppError>;
        async fn get_project_by_slug(&self, slug: &str) -> Result<ProjectRow, AppError>;
    }
}

mock! {
    pub ContactRepo {}

    #[async_trait::async_trait]
    impl ContactMeRepository for ContactRepo {
        async fn create_contact_message(&self, msg: &ContactMeFormInsert) -> Result<Uuid, AppError>;
    }
}

/// The "now" every deterministic test measures against.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
}

// === Experience fixtures ===

#[derive(Debug, Clone)]
pub struct TestExperience {
    record: ExperienceRecord,
}

impl TestExperience {
    pub fn new(id: &str, start_date: &str) -> Self {
        Self {
            record: ExperienceRecord {
                id: id.to_string(),
                title: format!("Engineer {}", id),
                company: format!("Company {}", id),
                position: String::new(),
                start_date: start_date.to_string(),
                end_date: None,
                description: String::new(),
                tech_stack: Vec::new(),
                achievements: Vec::new(),
            },
        }
    }

    pub fn ended(mut self, end_date: &str) -> Self {
        self.record.end_date = Some(end_date.to_string());
        self
    }

    pub fn titled(mut self, title: &str, company: &str) -> Self {
        self.record.title = title.to_string();
        self.record.company = company.to_string();
        self
    }

    pub fn position(mut self, position: &str) -> Self {
        self.record.position = position.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.record.description = description.to_string();
        self
    }

    pub fn achievements(mut self, items: &[&str]) -> Self {
        self.record.achievements = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn tech(mut self, items: &[&str]) -> Self {
        self.record.tech_stack = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> ExperienceRecord {
        self.record
    }
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn experience_row(title: &str, start: &str, end: Option<&str>) -> ExperienceRow {
    ExperienceRow {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        position: "Backend".to_string(),
        start_date: date(start),
        end_date: end.map(date),
        description: "Built things.".to_string(),
        tech_stack: json!(["Rust", {"name": "PostgreSQL"}]),
        achievements: vec!["Shipped v2".to_string()],
        display_order: 0,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn project_row(slug: &str, image_url: Option<&str>) -> ProjectRow {
    ProjectRow {
        id: Uuid::new_v4(),
        title: format!("Project {}", slug),
        slug: slug.to_string(),
        description: "A project".to_string(),
        image_url: image_url.map(str::to_string),
        tech_stack: json!([{"name": "Rust"}, "Actix"]),
        github_url: Some("https://github.com/example/project".to_string()),
        live_url: Some("   ".to_string()),
        featured: true,
        display_order: 0,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn sample_profile() -> ResumeProfile {
    ResumeProfile {
        name: "Ada Lovelace".to_string(),
        headline: "Analytical Engine Programmer".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        location: Some("London".to_string()),
        links: Vec::new(),
        summary: "First programmer.".to_string(),
        metrics: vec![Metric { label: "Programs".to_string(), value: "1".to_string() }],
        skill_groups: vec![SkillGroup {
            category: "Languages".to_string(),
            skills: vec!["Notes".to_string(), "Tables".to_string()],
        }],
        projects: vec![ResumeProject {
            name: "Note G".to_string(),
            description: "Bernoulli numbers".to_string(),
            tech: vec!["Analytical Engine".to_string()],
        }],
        footer: "References available upon request".to_string(),
    }
}

// === Document helpers ===

pub struct EntryView<'a> {
    pub record_id: &'a str,
    pub divider: bool,
    pub blocks: &'a [Block],
}

pub fn experience_entries(document: &ResumeDocument) -> Vec<EntryView<'_>> {
    let section = document
        .sections
        .iter()
        .find(|s| s.kind == SectionKind::Experience)
        .expect("experience section present");

    section
        .blocks
        .iter()
        .map(|block| match &block.content {
            BlockContent::Entry { record_id, blocks } => EntryView {
                record_id: record_id.as_str(),
                divider: block.style.divider,
                blocks: blocks.as_slice(),
            },
            other => panic!("unexpected block in experience section: {:?}", other),
        })
        .collect()
}

pub fn entry_ids(document: &ResumeDocument) -> Vec<String> {
    experience_entries(document)
        .iter()
        .map(|e| e.record_id.to_string())
        .collect()
}

pub fn text_of(block: &Block) -> &str {
    match &block.content {
        BlockContent::Heading { text } | BlockContent::Paragraph { text } => text.as_str(),
        other => panic!("block has no text: {:?}", other),
    }
}
