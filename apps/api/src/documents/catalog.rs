//! Template catalog — one descriptor per visual variant, per document type.
//! Premium templates are hidden from the default listing and only appear when
//! the caller opts in via `include_premium`.

use serde::Serialize;

use crate::models::DocumentKind;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Hex swatch shown in the template picker.
    pub swatch: &'static str,
    pub requires_subscription: bool,
    /// Hidden behind the "show premium" toggle in listings.
    pub premium: bool,
}

pub const RESUME_TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "classic",
        name: "Classic",
        description: "Traditional single-column layout with serif headings.",
        swatch: "#1f3a5f",
        requires_subscription: false,
        premium: false,
    },
    TemplateDescriptor {
        id: "modern",
        name: "Modern",
        description: "Clean sans-serif layout with a colored accent bar.",
        swatch: "#0d9488",
        requires_subscription: false,
        premium: false,
    },
    TemplateDescriptor {
        id: "minimal",
        name: "Minimal",
        description: "Whitespace-heavy layout, skills before experience.",
        swatch: "#52525b",
        requires_subscription: false,
        premium: false,
    },
    TemplateDescriptor {
        id: "executive",
        name: "Executive",
        description: "Formal layout with an emphasis on experience.",
        swatch: "#7c2d12",
        requires_subscription: true,
        premium: true,
    },
    TemplateDescriptor {
        id: "creative",
        name: "Creative",
        description: "Bold headings and a sidebar for skills and languages.",
        swatch: "#9333ea",
        requires_subscription: true,
        premium: true,
    },
];

pub const COVER_LETTER_TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "classic",
        name: "Classic",
        description: "Traditional business letter.",
        swatch: "#1f3a5f",
        requires_subscription: false,
        premium: false,
    },
    TemplateDescriptor {
        id: "modern",
        name: "Modern",
        description: "Contemporary letter with accent heading.",
        swatch: "#0d9488",
        requires_subscription: false,
        premium: false,
    },
    TemplateDescriptor {
        id: "executive",
        name: "Executive",
        description: "Formal letter with letterhead styling.",
        swatch: "#7c2d12",
        requires_subscription: true,
        premium: true,
    },
];

fn catalog(kind: DocumentKind) -> &'static [TemplateDescriptor] {
    match kind {
        DocumentKind::Resume => RESUME_TEMPLATES,
        DocumentKind::CoverLetter => COVER_LETTER_TEMPLATES,
    }
}

/// Looks up a descriptor by id within one document type's catalog.
pub fn find_template(kind: DocumentKind, id: &str) -> Option<&'static TemplateDescriptor> {
    catalog(kind).iter().find(|t| t.id == id)
}

/// Lists templates for the picker. Premium templates only appear when
/// `include_premium` is set; non-premium gated templates are always listed
/// (they render a lock badge client-side).
pub fn list_templates(kind: DocumentKind, include_premium: bool) -> Vec<&'static TemplateDescriptor> {
    catalog(kind)
        .iter()
        .filter(|t| include_premium || !t.premium)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_template_per_kind() {
        assert!(find_template(DocumentKind::Resume, "minimal").is_some());
        // "minimal" exists only for resumes
        assert!(find_template(DocumentKind::CoverLetter, "minimal").is_none());
        assert!(find_template(DocumentKind::Resume, "nope").is_none());
    }

    #[test]
    fn test_default_listing_hides_premium() {
        let listed = list_templates(DocumentKind::Resume, false);
        assert!(listed.iter().all(|t| !t.premium));
        assert!(listed.iter().any(|t| t.id == "classic"));
    }

    #[test]
    fn test_toggle_reveals_premium() {
        let listed = list_templates(DocumentKind::Resume, true);
        assert_eq!(listed.len(), RESUME_TEMPLATES.len());
        assert!(listed.iter().any(|t| t.id == "executive"));
    }

    #[test]
    fn test_every_template_has_a_swatch() {
        for t in RESUME_TEMPLATES.iter().chain(COVER_LETTER_TEMPLATES) {
            assert!(t.swatch.starts_with('#'), "{} missing swatch", t.id);
        }
    }
}
