use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    entities::{
        experience::ExperienceRecord,
        resume::{Block, BlockContent, BlockRole, ResumeDocument, ResumeProfile, Section, SectionKind},
    },
    tenure::{generate_period_string_at, parse_date},
    theme::{style_for, A4_PAGE, BULLET_GLYPH},
};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static UNSAFE_FILE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid regex"));

/// Turns experience records plus the static profile into a styled
/// `ResumeDocument`. Holds no state besides the profile, so one builder can
/// serve any number of concurrent exports.
#[derive(Debug, Clone)]
pub struct ResumeDocumentBuilder {
    profile: ResumeProfile,
}

impl ResumeDocumentBuilder {
    pub fn new(profile: ResumeProfile) -> Self {
        ResumeDocumentBuilder { profile }
    }

    pub fn profile(&self) -> &ResumeProfile {
        &self.profile
    }

    /// Builds the document, measuring ongoing roles up to now.
    pub fn build(&self, records: &[ExperienceRecord]) -> ResumeDocument {
        self.build_at(records, Utc::now())
    }

    pub fn build_at(&self, records: &[ExperienceRecord], now: DateTime<Utc>) -> ResumeDocument {
        let sorted = sort_by_recency(records);

        tracing::debug!(
            experiences = sorted.len(),
            "Building resume document for {}",
            self.profile.name
        );

        let sections = vec![
            self.header_section(),
            self.profile_section(),
            self.metrics_section(),
            self.skills_section(),
            self.projects_section(),
            experience_section(&sorted, now),
            self.footer_section(),
        ];

        ResumeDocument {
            title: format!("{} - Resume", self.profile.name.trim()),
            file_stem: resume_file_stem(&self.profile.name),
            page: A4_PAGE,
            sections,
        }
    }

    fn header_section(&self) -> Section {
        let profile = &self.profile;
        let mut blocks = vec![
            block(BlockRole::Name, BlockContent::Heading { text: profile.name.clone() }),
        ];

        if !profile.headline.trim().is_empty() {
            blocks.push(block(BlockRole::Headline, BlockContent::Paragraph { text: profile.headline.clone() }));
        }

        let items: Vec<String> = std::iter::once(profile.email.clone())
            .chain(profile.phone.clone())
            .chain(profile.location.clone())
            .chain(profile.links.iter().map(|link| link.url.clone()))
            .filter(|item| !item.trim().is_empty())
            .collect();

        if !items.is_empty() {
            blocks.push(block(BlockRole::Contact, BlockContent::ContactLine { items }));
        }

        Section { kind: SectionKind::Header, title: None, blocks }
    }

    fn profile_section(&self) -> Section {
        let mut blocks = Vec::new();
        if !self.profile.summary.trim().is_empty() {
            blocks.push(block(BlockRole::Summary, BlockContent::Paragraph { text: self.profile.summary.clone() }));
        }

        titled(SectionKind::Profile, "Profile Summary", blocks)
    }

    fn metrics_section(&self) -> Section {
        let mut blocks = Vec::new();
        if !self.profile.metrics.is_empty() {
            blocks.push(block(BlockRole::Metric, BlockContent::MetricGrid { metrics: self.profile.metrics.clone() }));
        }

        titled(SectionKind::Metrics, "Key Metrics", blocks)
    }

    fn skills_section(&self) -> Section {
        let mut blocks = Vec::new();
        for group in &self.profile.skill_groups {
            blocks.push(block(BlockRole::SkillCategory, BlockContent::Heading { text: group.category.clone() }));
            if !group.skills.is_empty() {
                blocks.push(block(BlockRole::SkillChip, BlockContent::TagRow { tags: group.skills.clone() }));
            }
        }

        titled(SectionKind::Skills, "Skills", blocks)
    }

    fn projects_section(&self) -> Section {
        let mut blocks = Vec::new();
        for project in &self.profile.projects {
            blocks.push(block(BlockRole::ProjectTitle, BlockContent::Heading { text: project.name.clone() }));
            if !project.description.trim().is_empty() {
                blocks.push(block(BlockRole::ProjectDescription, BlockContent::Paragraph { text: project.description.clone() }));
            }
            if !project.tech.is_empty() {
                blocks.push(block(BlockRole::TechChip, BlockContent::TagRow { tags: project.tech.clone() }));
            }
        }

        titled(SectionKind::Projects, "Notable Projects", blocks)
    }

    fn footer_section(&self) -> Section {
        let mut blocks = Vec::new();
        if !self.profile.footer.trim().is_empty() {
            blocks.push(block(BlockRole::Footer, BlockContent::Paragraph { text: self.profile.footer.clone() }));
        }

        Section { kind: SectionKind::Footer, title: None, blocks }
    }
}

/// Most recent start date first. The sort is stable, and records whose start
/// date does not parse go last in input order.
pub fn sort_by_recency(records: &[ExperienceRecord]) -> Vec<&ExperienceRecord> {
    let mut sorted: Vec<&ExperienceRecord> = records.iter().collect();
    // Reverse(None) orders after every Reverse(Some(_))
    sorted.sort_by_cached_key(|record| Reverse(parse_date(&record.start_date)));
    sorted
}

fn experience_section(sorted: &[&ExperienceRecord], now: DateTime<Utc>) -> Section {
    let last = sorted.len().saturating_sub(1);
    let blocks = sorted
        .iter()
        .enumerate()
        .map(|(index, record)| experience_entry(record, index == last, now))
        .collect();

    titled(SectionKind::Experience, "Professional Experience", blocks)
}

fn experience_entry(record: &ExperienceRecord, is_last: bool, now: DateTime<Utc>) -> Block {
    let mut blocks = vec![
        block(BlockRole::JobTitle, BlockContent::Heading { text: record.title.clone() }),
        block(BlockRole::Company, BlockContent::Paragraph { text: company_line(record) }),
        block(BlockRole::Period, BlockContent::Paragraph {
            text: generate_period_string_at(&record.start_date, record.end_date.as_deref(), now),
        }),
    ];

    if !record.description.trim().is_empty() {
        blocks.push(block(BlockRole::Description, BlockContent::Paragraph { text: record.description.clone() }));
    }

    if !record.achievements.is_empty() {
        let items = record.achievements
            .iter()
            .map(|a| format!("{}{}", BULLET_GLYPH, a))
            .collect();
        blocks.push(block(BlockRole::Achievement, BlockContent::BulletList { items }));
    }

    if !record.tech_stack.is_empty() {
        blocks.push(block(BlockRole::TechChip, BlockContent::TagRow { tags: record.tech_stack.clone() }));
    }

    let mut style = style_for(BlockRole::ExperienceEntry);
    style.divider = !is_last;

    Block {
        role: BlockRole::ExperienceEntry,
        style,
        content: BlockContent::Entry { record_id: record.id.clone(), blocks },
    }
}

/// "Acme Corp" or "Acme Corp | Platform Team" when the position adds something.
fn company_line(record: &ExperienceRecord) -> String {
    let position = record.position.trim();
    if position.is_empty() || position.eq_ignore_ascii_case(record.title.trim()) {
        record.company.clone()
    } else {
        format!("{} | {}", record.company, position)
    }
}

fn block(role: BlockRole, content: BlockContent) -> Block {
    Block { role, style: style_for(role), content }
}

fn titled(kind: SectionKind, title: &str, blocks: Vec<Block>) -> Section {
    Section {
        kind,
        title: Some(block(BlockRole::SectionTitle, BlockContent::Heading { text: title.to_string() })),
        blocks,
    }
}

/// `Jane_Doe_Resume` for "Jane Doe"; characters unsafe in a file name are dropped.
pub fn resume_file_stem(name: &str) -> String {
    let joined = WHITESPACE_RUN.replace_all(name.trim(), "_");
    let cleaned = UNSAFE_FILE_CHARS.replace_all(&joined, "");

    if cleaned.trim_matches('_').is_empty() {
        "Resume".to_string()
    } else {
        format!("{}_Resume", cleaned)
    }
}
