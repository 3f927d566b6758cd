use crate::entities::resume::{BlockRole, ColorToken, FontWeight, PageSetup, Style};

pub const A4_PAGE: PageSetup = PageSetup {
    size: "A4",
    width: 595.28,
    height: 841.89,
    margin_top: 36.0,
    margin_bottom: 36.0,
    margin_left: 40.0,
    margin_right: 40.0,
};

pub const BULLET_GLYPH: &str = "• ";

const fn style(font_weight: FontWeight, font_size: f32, color: ColorToken, margin_top: f32, margin_bottom: f32) -> Style {
    Style {
        font_weight,
        font_size,
        color,
        background: None,
        margin_top,
        margin_bottom,
        divider: false,
    }
}

const fn chip(color: ColorToken) -> Style {
    Style {
        font_weight: FontWeight::Medium,
        font_size: 8.0,
        color,
        background: Some(ColorToken::ChipBackground),
        margin_top: 4.0,
        margin_bottom: 0.0,
        divider: false,
    }
}

/// Static theme table: block role to resolved style.
pub const fn style_for(role: BlockRole) -> Style {
    use BlockRole::*;
    use ColorToken::*;
    use FontWeight::*;

    match role {
        Name => style(Bold, 24.0, Ink, 0.0, 2.0),
        Headline => style(Medium, 12.0, Accent, 0.0, 6.0),
        Contact => style(Regular, 9.0, Muted, 0.0, 12.0),
        SectionTitle => Style {
            divider: true,
            ..style(Bold, 13.0, Ink, 14.0, 8.0)
        },
        Summary => style(Regular, 10.0, Slate, 0.0, 4.0),
        Metric => style(Bold, 11.0, Accent, 0.0, 4.0),
        SkillCategory => style(Bold, 10.0, Slate, 6.0, 2.0),
        SkillChip => chip(Slate),
        ProjectTitle => style(Bold, 11.0, Ink, 6.0, 2.0),
        ProjectDescription => style(Regular, 9.5, Slate, 0.0, 2.0),
        ExperienceEntry => Style {
            divider: true,
            ..style(Regular, 10.0, Ink, 0.0, 12.0)
        },
        JobTitle => style(Bold, 12.0, Ink, 0.0, 1.0),
        Company => style(Medium, 10.5, Accent, 0.0, 1.0),
        Period => style(Regular, 9.0, Muted, 0.0, 4.0),
        Description => style(Regular, 10.0, Slate, 0.0, 4.0),
        Achievement => style(Regular, 9.5, Slate, 0.0, 2.0),
        TechChip => chip(Accent),
        Footer => style(Regular, 8.0, Muted, 18.0, 0.0),
    }
}
