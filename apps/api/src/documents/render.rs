//! Unified document renderer.
//!
//! One rendering routine per document type, parameterized by a `LayoutStyle`
//! descriptor. Visual variants differ only in fonts, colors and section
//! ordering; the field-resolution and placeholder logic is shared, so no
//! template can drift from the others. Rendering has no failure path: an
//! all-empty document renders placeholders, empty optional sections are
//! suppressed.

use serde::Deserialize;

use crate::documents::resolve::{date_range, escape, present, resolve};
use crate::locale::{Locale, SectionLabel};
use crate::models::cover_letter::CoverLetterData;
use crate::models::resume::ResumeData;

/// Sections a resume layout may order. `Custom` expands to every custom
/// section the document carries, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Languages,
    Interests,
    Certifications,
    Qualities,
    Custom,
}

/// Visual parameters for one template variant.
#[derive(Debug)]
pub struct LayoutStyle {
    pub template_id: &'static str,
    pub font_stack: &'static str,
    pub heading_color: &'static str,
    pub accent_color: &'static str,
    pub heading_uppercase: bool,
    pub rule_under_headings: bool,
    pub section_order: &'static [Section],
}

const STANDARD_ORDER: &[Section] = &[
    Section::Summary,
    Section::Experience,
    Section::Education,
    Section::Projects,
    Section::Skills,
    Section::Languages,
    Section::Certifications,
    Section::Interests,
    Section::Qualities,
    Section::Custom,
];

const SKILLS_FIRST_ORDER: &[Section] = &[
    Section::Summary,
    Section::Skills,
    Section::Experience,
    Section::Education,
    Section::Projects,
    Section::Languages,
    Section::Certifications,
    Section::Interests,
    Section::Qualities,
    Section::Custom,
];

const EXPERIENCE_FIRST_ORDER: &[Section] = &[
    Section::Experience,
    Section::Summary,
    Section::Education,
    Section::Projects,
    Section::Skills,
    Section::Certifications,
    Section::Languages,
    Section::Interests,
    Section::Qualities,
    Section::Custom,
];

const RESUME_LAYOUTS: &[LayoutStyle] = &[
    LayoutStyle {
        template_id: "classic",
        font_stack: "Georgia, 'Times New Roman', serif",
        heading_color: "#1f3a5f",
        accent_color: "#1f3a5f",
        heading_uppercase: false,
        rule_under_headings: true,
        section_order: STANDARD_ORDER,
    },
    LayoutStyle {
        template_id: "modern",
        font_stack: "'Helvetica Neue', Arial, sans-serif",
        heading_color: "#0d9488",
        accent_color: "#0d9488",
        heading_uppercase: true,
        rule_under_headings: false,
        section_order: STANDARD_ORDER,
    },
    LayoutStyle {
        template_id: "minimal",
        font_stack: "'Inter', 'Segoe UI', sans-serif",
        heading_color: "#52525b",
        accent_color: "#a1a1aa",
        heading_uppercase: true,
        rule_under_headings: false,
        section_order: SKILLS_FIRST_ORDER,
    },
    LayoutStyle {
        template_id: "executive",
        font_stack: "'Garamond', Georgia, serif",
        heading_color: "#7c2d12",
        accent_color: "#7c2d12",
        heading_uppercase: false,
        rule_under_headings: true,
        section_order: EXPERIENCE_FIRST_ORDER,
    },
    LayoutStyle {
        template_id: "creative",
        font_stack: "'Poppins', 'Segoe UI', sans-serif",
        heading_color: "#9333ea",
        accent_color: "#c084fc",
        heading_uppercase: true,
        rule_under_headings: false,
        section_order: SKILLS_FIRST_ORDER,
    },
];

const LETTER_LAYOUTS: &[LayoutStyle] = &[
    LayoutStyle {
        template_id: "classic",
        font_stack: "Georgia, 'Times New Roman', serif",
        heading_color: "#1f3a5f",
        accent_color: "#1f3a5f",
        heading_uppercase: false,
        rule_under_headings: false,
        section_order: &[],
    },
    LayoutStyle {
        template_id: "modern",
        font_stack: "'Helvetica Neue', Arial, sans-serif",
        heading_color: "#0d9488",
        accent_color: "#0d9488",
        heading_uppercase: true,
        rule_under_headings: false,
        section_order: &[],
    },
    LayoutStyle {
        template_id: "executive",
        font_stack: "'Garamond', Georgia, serif",
        heading_color: "#7c2d12",
        accent_color: "#7c2d12",
        heading_uppercase: false,
        rule_under_headings: true,
        section_order: &[],
    },
];

pub fn resume_layout(template_id: &str) -> Option<&'static LayoutStyle> {
    RESUME_LAYOUTS.iter().find(|l| l.template_id == template_id)
}

pub fn letter_layout(template_id: &str) -> Option<&'static LayoutStyle> {
    LETTER_LAYOUTS.iter().find(|l| l.template_id == template_id)
}

/// Edit mode wraps every field in a `data-field` span so the client can wire
/// inline editing. The renderer itself never persists anything; edits flow
/// back through the regular save endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Preview,
    Edit,
}

fn field(out: &mut String, mode: RenderMode, path: &str, text: &str) {
    match mode {
        RenderMode::Preview => out.push_str(&escape(text)),
        RenderMode::Edit => {
            out.push_str(&format!(
                "<span data-field=\"{path}\" contenteditable=\"true\">{}</span>",
                escape(text)
            ));
        }
    }
}

fn heading(out: &mut String, style: &LayoutStyle, text: &str) {
    let transform = if style.heading_uppercase {
        "text-transform:uppercase;letter-spacing:0.05em;"
    } else {
        ""
    };
    let rule = if style.rule_under_headings {
        format!("border-bottom:1px solid {};", style.accent_color)
    } else {
        String::new()
    };
    out.push_str(&format!(
        "<h2 style=\"color:{};{transform}{rule}\">{}</h2>",
        style.heading_color,
        escape(text)
    ));
}

fn resume_header(out: &mut String, data: &ResumeData, style: &LayoutStyle, locale: Locale, mode: RenderMode) {
    let p = &data.personal_info;
    out.push_str("<header class=\"doc-header\">");
    if let Some(photo) = p.photo.as_deref().filter(|v| present(v)) {
        out.push_str(&format!(
            "<img class=\"doc-photo\" src=\"{}\" alt=\"\"/>",
            escape(photo)
        ));
    }
    out.push_str(&format!("<h1 style=\"color:{}\">", style.heading_color));
    field(out, mode, "personalInfo.name", resolve(&p.name, locale.your_name()));
    out.push_str("</h1><p class=\"doc-contact\">");
    field(out, mode, "personalInfo.email", resolve(&p.email, locale.email_placeholder()));
    out.push_str(" · ");
    field(out, mode, "personalInfo.phone", resolve(&p.phone, locale.phone_placeholder()));
    out.push_str(" · ");
    field(out, mode, "personalInfo.location", resolve(&p.location, locale.location_placeholder()));
    if let Some(linkedin) = p.linkedin.as_deref().filter(|v| present(v)) {
        out.push_str(" · ");
        field(out, mode, "personalInfo.linkedin", linkedin);
    }
    out.push_str("</p></header>");
}

fn render_section(
    out: &mut String,
    section: Section,
    data: &ResumeData,
    style: &LayoutStyle,
    locale: Locale,
    mode: RenderMode,
) {
    match section {
        Section::Summary => {
            heading(out, style, locale.section_heading(SectionLabel::Summary));
            out.push_str("<p>");
            field(out, mode, "summary", resolve(&data.summary, locale.summary_placeholder()));
            out.push_str("</p>");
        }
        Section::Experience => {
            if data.experience.is_empty() {
                return;
            }
            heading(out, style, locale.section_heading(SectionLabel::Experience));
            for (i, e) in data.experience.iter().enumerate() {
                out.push_str("<div class=\"doc-entry\"><h3>");
                field(out, mode, &format!("experience.{i}.title"), resolve(&e.title, locale.job_title_placeholder()));
                out.push_str("</h3><p class=\"doc-entry-meta\">");
                field(out, mode, &format!("experience.{i}.company"), resolve(&e.company, locale.company_placeholder()));
                let range = date_range(&e.start_date, &e.end_date, locale);
                if !range.is_empty() {
                    out.push_str(&format!(" · {}", escape(&range)));
                }
                out.push_str("</p>");
                if present(&e.description) {
                    out.push_str("<p>");
                    field(out, mode, &format!("experience.{i}.description"), &e.description);
                    out.push_str("</p>");
                }
                out.push_str("</div>");
            }
        }
        Section::Education => {
            if data.education.is_empty() {
                return;
            }
            heading(out, style, locale.section_heading(SectionLabel::Education));
            for (i, e) in data.education.iter().enumerate() {
                out.push_str("<div class=\"doc-entry\"><h3>");
                field(out, mode, &format!("education.{i}.degree"), &e.degree);
                out.push_str("</h3><p class=\"doc-entry-meta\">");
                field(out, mode, &format!("education.{i}.school"), &e.school);
                let range = date_range(&e.start_date, &e.end_date, locale);
                if !range.is_empty() {
                    out.push_str(&format!(" · {}", escape(&range)));
                }
                out.push_str("</p>");
                if present(&e.description) {
                    out.push_str("<p>");
                    field(out, mode, &format!("education.{i}.description"), &e.description);
                    out.push_str("</p>");
                }
                out.push_str("</div>");
            }
        }
        Section::Projects => {
            if data.projects.is_empty() {
                return;
            }
            heading(out, style, locale.section_heading(SectionLabel::Projects));
            for (i, p) in data.projects.iter().enumerate() {
                out.push_str("<div class=\"doc-entry\"><h3>");
                field(out, mode, &format!("projects.{i}.name"), &p.name);
                out.push_str("</h3>");
                if present(&p.technologies) {
                    out.push_str("<p class=\"doc-entry-meta\">");
                    field(out, mode, &format!("projects.{i}.technologies"), &p.technologies);
                    out.push_str("</p>");
                }
                if present(&p.description) {
                    out.push_str("<p>");
                    field(out, mode, &format!("projects.{i}.description"), &p.description);
                    out.push_str("</p>");
                }
                if let Some(link) = p.link.as_deref().filter(|v| present(v)) {
                    out.push_str(&format!(
                        "<p class=\"doc-entry-meta\"><a href=\"{0}\">{0}</a></p>",
                        escape(link)
                    ));
                }
                out.push_str("</div>");
            }
        }
        Section::Skills => {
            if data.skills.is_empty() {
                return;
            }
            heading(out, style, locale.section_heading(SectionLabel::Skills));
            out.push_str("<ul class=\"doc-skills\">");
            for (i, s) in data.skills.iter().enumerate() {
                out.push_str("<li><strong>");
                field(out, mode, &format!("skills.{i}.category"), &s.category);
                out.push_str("</strong> ");
                out.push_str(&escape(&s.items.join(", ")));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Section::Languages => {
            let Some(languages) = data.languages.as_deref().filter(|l| !l.is_empty()) else {
                return;
            };
            heading(out, style, locale.section_heading(SectionLabel::Languages));
            out.push_str("<ul>");
            for l in languages {
                out.push_str("<li>");
                out.push_str(&escape(&l.name));
                if present(&l.level) {
                    out.push_str(&format!(" — {}", escape(&l.level)));
                }
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Section::Interests => {
            string_list_section(out, style, locale.section_heading(SectionLabel::Interests), data.interests.as_deref());
        }
        Section::Certifications => {
            string_list_section(out, style, locale.section_heading(SectionLabel::Certifications), data.certifications.as_deref());
        }
        Section::Qualities => {
            string_list_section(out, style, locale.section_heading(SectionLabel::Qualities), data.qualities.as_deref());
        }
        Section::Custom => {
            let Some(sections) = data.custom_sections.as_deref() else {
                return;
            };
            for custom in sections {
                if custom.items.is_empty() {
                    continue;
                }
                heading(out, style, &custom.title);
                out.push_str("<ul>");
                for item in &custom.items {
                    out.push_str(&format!("<li>{}</li>", escape(item)));
                }
                out.push_str("</ul>");
            }
        }
    }
}

fn string_list_section(out: &mut String, style: &LayoutStyle, title: &str, items: Option<&[String]>) {
    let Some(items) = items.filter(|i| !i.is_empty()) else {
        return;
    };
    heading(out, style, title);
    out.push_str("<ul>");
    for item in items {
        out.push_str(&format!("<li>{}</li>", escape(item)));
    }
    out.push_str("</ul>");
}

/// Renders a resume into an HTML fragment.
pub fn render_resume(data: &ResumeData, style: &LayoutStyle, locale: Locale, mode: RenderMode) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(&format!(
        "<article class=\"doc doc-resume doc-{}\" style=\"font-family:{}\">",
        style.template_id, style.font_stack
    ));
    resume_header(&mut out, data, style, locale, mode);
    for &section in style.section_order {
        render_section(&mut out, section, data, style, locale, mode);
    }
    out.push_str("</article>");
    out
}

/// Renders a cover letter into an HTML fragment.
pub fn render_cover_letter(
    data: &CoverLetterData,
    style: &LayoutStyle,
    locale: Locale,
    mode: RenderMode,
) -> String {
    let p = &data.personal_info;
    let mut out = String::with_capacity(1024);
    out.push_str(&format!(
        "<article class=\"doc doc-letter doc-{}\" style=\"font-family:{}\">",
        style.template_id, style.font_stack
    ));

    out.push_str("<header class=\"doc-header\">");
    out.push_str(&format!("<h1 style=\"color:{}\">", style.heading_color));
    field(&mut out, mode, "personalInfo.name", resolve(&p.name, locale.your_name()));
    out.push_str("</h1><p class=\"doc-contact\">");
    field(&mut out, mode, "personalInfo.email", resolve(&p.email, locale.email_placeholder()));
    out.push_str(" · ");
    field(&mut out, mode, "personalInfo.phone", resolve(&p.phone, locale.phone_placeholder()));
    out.push_str("</p></header>");

    // Recipient block: only lines with content, company falls back to placeholder.
    out.push_str("<section class=\"doc-recipient\">");
    if present(&data.recipient_info.name) {
        out.push_str("<p>");
        field(&mut out, mode, "recipientInfo.name", &data.recipient_info.name);
        out.push_str("</p>");
    }
    if present(&data.recipient_info.title) {
        out.push_str("<p>");
        field(&mut out, mode, "recipientInfo.title", &data.recipient_info.title);
        out.push_str("</p>");
    }
    out.push_str("<p>");
    field(
        &mut out,
        mode,
        "recipientInfo.company",
        resolve(&data.recipient_info.company, locale.company_placeholder()),
    );
    out.push_str("</p></section>");

    // Subject line.
    out.push_str(&format!("<p class=\"doc-subject\" style=\"color:{}\"><strong>", style.accent_color));
    field(
        &mut out,
        mode,
        "jobInfo.title",
        resolve(&data.job_info.title, locale.job_title_placeholder()),
    );
    if present(&data.job_info.reference) {
        out.push_str(" (");
        field(&mut out, mode, "jobInfo.reference", &data.job_info.reference);
        out.push(')');
    }
    out.push_str("</strong></p>");

    // Greeting: empty recipient name resolves to the localized fallback.
    out.push_str("<p class=\"doc-greeting\">");
    out.push_str(&escape(locale.dear()));
    out.push(' ');
    field(
        &mut out,
        mode,
        "recipientInfo.name",
        resolve(&data.recipient_info.name, locale.hiring_manager()),
    );
    out.push_str(",</p>");

    let paragraphs = [
        ("experience", data.experience.as_str(), locale.default_letter_experience()),
        ("skills", data.skills.as_str(), locale.default_letter_skills()),
        ("motivation", data.motivation.as_str(), locale.default_letter_motivation()),
        ("closing", data.closing.as_str(), locale.default_letter_closing()),
    ];
    for (path, value, fallback) in paragraphs {
        out.push_str("<p>");
        field(&mut out, mode, path, resolve(value, fallback));
        out.push_str("</p>");
    }

    out.push_str("<p class=\"doc-signoff\">");
    out.push_str(&escape(locale.sincerely()));
    out.push_str("<br/>");
    field(&mut out, mode, "personalInfo.name", resolve(&p.name, locale.your_name()));
    out.push_str("</p></article>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, SkillCategory};

    fn all_layouts() -> impl Iterator<Item = &'static LayoutStyle> {
        RESUME_LAYOUTS.iter()
    }

    #[test]
    fn test_empty_resume_renders_placeholders_in_every_template() {
        let data = ResumeData::default();
        for style in all_layouts() {
            let html = render_resume(&data, style, Locale::En, RenderMode::Preview);
            assert!(html.contains("Your Name"), "{} missing name placeholder", style.template_id);
            assert!(html.contains("email@example.com"), "{} missing email placeholder", style.template_id);
            assert!(
                html.contains("A short professional summary goes here."),
                "{} missing summary placeholder",
                style.template_id
            );
        }
    }

    #[test]
    fn test_empty_optional_sections_are_suppressed() {
        let data = ResumeData::default();
        let html = render_resume(&data, resume_layout("classic").unwrap(), Locale::En, RenderMode::Preview);
        assert!(!html.contains("Work Experience"));
        assert!(!html.contains("Projects"));
        assert!(!html.contains("Languages"));
    }

    #[test]
    fn test_filled_sections_appear_in_layout_order() {
        let data = ResumeData {
            experience: vec![ExperienceEntry {
                title: "Engineer".into(),
                company: "Acme".into(),
                start_date: "2021".into(),
                end_date: String::new(),
                description: "Built things".into(),
            }],
            skills: vec![SkillCategory {
                category: "Languages".into(),
                items: vec!["Rust".into(), "Go".into()],
            }],
            ..ResumeData::default()
        };
        let html = render_resume(&data, resume_layout("minimal").unwrap(), Locale::En, RenderMode::Preview);
        // minimal lists skills before experience
        let skills_at = html.find("Rust, Go").unwrap();
        let exp_at = html.find("Acme").unwrap();
        assert!(skills_at < exp_at);
        assert!(html.contains("2021 – Present"));
    }

    #[test]
    fn test_edit_mode_emits_field_hooks() {
        let data = ResumeData::default();
        let html = render_resume(&data, resume_layout("modern").unwrap(), Locale::En, RenderMode::Edit);
        assert!(html.contains("data-field=\"personalInfo.name\""));
        assert!(html.contains("contenteditable=\"true\""));
    }

    #[test]
    fn test_preview_mode_has_no_edit_hooks() {
        let data = ResumeData::default();
        let html = render_resume(&data, resume_layout("modern").unwrap(), Locale::En, RenderMode::Preview);
        assert!(!html.contains("data-field"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let data = ResumeData {
            summary: "<script>alert(1)</script>".into(),
            ..ResumeData::default()
        };
        let html = render_resume(&data, resume_layout("classic").unwrap(), Locale::En, RenderMode::Preview);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_recipient_renders_hiring_manager_greeting() {
        let data = CoverLetterData::default();
        let html = render_cover_letter(&data, letter_layout("classic").unwrap(), Locale::En, RenderMode::Preview);
        assert!(html.contains("Dear Hiring Manager,"));
    }

    #[test]
    fn test_named_recipient_used_in_greeting() {
        let data = CoverLetterData {
            recipient_info: crate::models::cover_letter::RecipientInfo {
                name: "Ms. Smith".into(),
                title: String::new(),
                company: "Acme".into(),
            },
            ..CoverLetterData::default()
        };
        let html = render_cover_letter(&data, letter_layout("modern").unwrap(), Locale::En, RenderMode::Preview);
        assert!(html.contains("Dear Ms. Smith,"));
    }

    #[test]
    fn test_french_greeting_fallback() {
        let data = CoverLetterData::default();
        let html = render_cover_letter(&data, letter_layout("classic").unwrap(), Locale::Fr, RenderMode::Preview);
        assert!(html.contains("Madame, Monsieur"));
    }

    #[test]
    fn test_every_catalog_template_has_a_layout() {
        use crate::documents::catalog::{COVER_LETTER_TEMPLATES, RESUME_TEMPLATES};
        for t in RESUME_TEMPLATES {
            assert!(resume_layout(t.id).is_some(), "no layout for resume template {}", t.id);
        }
        for t in COVER_LETTER_TEMPLATES {
            assert!(letter_layout(t.id).is_some(), "no layout for letter template {}", t.id);
        }
    }
}
