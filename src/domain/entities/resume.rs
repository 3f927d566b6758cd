use serde::{Deserialize, Serialize};

// ───── Document Tree ─────────────────────────────────────────────────

/// Fixed-layout description of the résumé, ready for a renderer to paginate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeDocument {
    pub title: String,
    /// File name without extension, e.g. `Jane_Doe_Resume`.
    pub file_stem: String,
    pub page: PageSetup,
    pub sections: Vec<Section>,
}

/// Page geometry in PostScript points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSetup {
    pub size: &'static str,
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Profile,
    Metrics,
    Skills,
    Projects,
    Experience,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: Option<Block>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub role: BlockRole,
    pub style: Style,
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Heading { text: String },
    Paragraph { text: String },
    BulletList { items: Vec<String> },
    TagRow { tags: Vec<String> },
    MetricGrid { metrics: Vec<Metric> },
    ContactLine { items: Vec<String> },
    /// One experience record with its own child blocks.
    Entry { record_id: String, blocks: Vec<Block> },
}

/// Theme table key. Every block is styled by its role alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockRole {
    Name,
    Headline,
    Contact,
    SectionTitle,
    Summary,
    Metric,
    SkillCategory,
    SkillChip,
    ProjectTitle,
    ProjectDescription,
    ExperienceEntry,
    JobTitle,
    Company,
    Period,
    Description,
    Achievement,
    TechChip,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub font_weight: FontWeight,
    pub font_size: f32,
    pub color: ColorToken,
    pub background: Option<ColorToken>,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Bottom border under the block.
    pub divider: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Ink,
    Slate,
    Muted,
    Accent,
    ChipBackground,
    Rule,
}

impl ColorToken {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Ink => "#111827",
            ColorToken::Slate => "#374151",
            ColorToken::Muted => "#6b7280",
            ColorToken::Accent => "#2563eb",
            ColorToken::ChipBackground => "#eff6ff",
            ColorToken::Rule => "#e5e7eb",
        }
    }
}

// ───── Static Content (configuration) ───────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// Everything on the résumé that does not come from experience records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<ProfileLink>,
    pub summary: String,
    pub metrics: Vec<Metric>,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<ResumeProject>,
    pub footer: String,
}

impl Default for ResumeProfile {
    fn default() -> Self {
        ResumeProfile {
            name: "Portfolio Owner".to_string(),
            headline: "Software Engineer".to_string(),
            email: "hello@example.com".to_string(),
            phone: None,
            location: None,
            links: Vec::new(),
            summary: String::new(),
            metrics: Vec::new(),
            skill_groups: Vec::new(),
            projects: Vec::new(),
            footer: "References available upon request".to_string(),
        }
    }
}

// ───── Export ───────────────────────────────────────────────────────

/// Rendered résumé bytes plus what the HTTP layer needs to serve them.
#[derive(Debug, Clone)]
pub struct ResumeExport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}
