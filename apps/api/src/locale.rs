//! Locale tables — placeholder text, default copy, date and currency formatting.
//!
//! Every user-facing fallback string lives here so the renderer and the mock
//! generation service never hardcode copy inline.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Parses a language tag, falling back to English for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "fr-be" | "fr-ca" => Locale::Fr,
            _ => Locale::En,
        }
    }

    // --- Renderer placeholders -------------------------------------------

    pub fn your_name(self) -> &'static str {
        match self {
            Locale::En => "Your Name",
            Locale::Fr => "Votre nom",
        }
    }

    pub fn email_placeholder(self) -> &'static str {
        match self {
            Locale::En => "email@example.com",
            Locale::Fr => "email@exemple.com",
        }
    }

    pub fn phone_placeholder(self) -> &'static str {
        match self {
            Locale::En => "+1 555 000 0000",
            Locale::Fr => "+33 6 00 00 00 00",
        }
    }

    pub fn location_placeholder(self) -> &'static str {
        match self {
            Locale::En => "City, Country",
            Locale::Fr => "Ville, Pays",
        }
    }

    pub fn summary_placeholder(self) -> &'static str {
        match self {
            Locale::En => "A short professional summary goes here.",
            Locale::Fr => "Un bref résumé professionnel apparaît ici.",
        }
    }

    /// Greeting fallback when the recipient name is empty.
    pub fn hiring_manager(self) -> &'static str {
        match self {
            Locale::En => "Hiring Manager",
            Locale::Fr => "Madame, Monsieur",
        }
    }

    pub fn dear(self) -> &'static str {
        match self {
            Locale::En => "Dear",
            Locale::Fr => "À l'attention de",
        }
    }

    pub fn sincerely(self) -> &'static str {
        match self {
            Locale::En => "Sincerely,",
            Locale::Fr => "Cordialement,",
        }
    }

    pub fn present(self) -> &'static str {
        match self {
            Locale::En => "Present",
            Locale::Fr => "Aujourd'hui",
        }
    }

    pub fn company_placeholder(self) -> &'static str {
        match self {
            Locale::En => "Company Name",
            Locale::Fr => "Nom de l'entreprise",
        }
    }

    pub fn job_title_placeholder(self) -> &'static str {
        match self {
            Locale::En => "Job Title",
            Locale::Fr => "Intitulé du poste",
        }
    }

    // --- Section headings -------------------------------------------------

    pub fn section_heading(self, section: SectionLabel) -> &'static str {
        match (self, section) {
            (Locale::En, SectionLabel::Summary) => "Profile",
            (Locale::En, SectionLabel::Experience) => "Work Experience",
            (Locale::En, SectionLabel::Education) => "Education",
            (Locale::En, SectionLabel::Projects) => "Projects",
            (Locale::En, SectionLabel::Skills) => "Skills",
            (Locale::En, SectionLabel::Languages) => "Languages",
            (Locale::En, SectionLabel::Interests) => "Interests",
            (Locale::En, SectionLabel::Certifications) => "Certifications",
            (Locale::En, SectionLabel::Qualities) => "Qualities",
            (Locale::Fr, SectionLabel::Summary) => "Profil",
            (Locale::Fr, SectionLabel::Experience) => "Expérience professionnelle",
            (Locale::Fr, SectionLabel::Education) => "Formation",
            (Locale::Fr, SectionLabel::Projects) => "Projets",
            (Locale::Fr, SectionLabel::Skills) => "Compétences",
            (Locale::Fr, SectionLabel::Languages) => "Langues",
            (Locale::Fr, SectionLabel::Interests) => "Centres d'intérêt",
            (Locale::Fr, SectionLabel::Certifications) => "Certifications",
            (Locale::Fr, SectionLabel::Qualities) => "Qualités",
        }
    }

    // --- Mock generation defaults ----------------------------------------

    pub fn default_summary(self) -> &'static str {
        match self {
            Locale::En => {
                "Motivated professional with a track record of delivering quality work \
                 and collaborating effectively across teams."
            }
            Locale::Fr => {
                "Professionnel motivé, habitué à livrer un travail de qualité et à \
                 collaborer efficacement en équipe."
            }
        }
    }

    pub fn default_letter_experience(self) -> &'static str {
        match self {
            Locale::En => {
                "Over the past years I have built up solid experience directly relevant \
                 to this position."
            }
            Locale::Fr => {
                "Au fil des années, j'ai acquis une solide expérience en lien direct \
                 avec ce poste."
            }
        }
    }

    pub fn default_letter_skills(self) -> &'static str {
        match self {
            Locale::En => {
                "My skills match the requirements of the role, and I am eager to put \
                 them to work for your organization."
            }
            Locale::Fr => {
                "Mes compétences correspondent aux exigences du poste et je souhaite \
                 les mettre au service de votre organisation."
            }
        }
    }

    pub fn default_letter_motivation(self) -> &'static str {
        match self {
            Locale::En => {
                "I am motivated by the opportunity to contribute to your team and to \
                 keep developing professionally."
            }
            Locale::Fr => {
                "Je suis motivé par la perspective de contribuer à votre équipe et de \
                 continuer à progresser professionnellement."
            }
        }
    }

    pub fn default_letter_closing(self) -> &'static str {
        match self {
            Locale::En => {
                "I would welcome the chance to discuss my application in an interview."
            }
            Locale::Fr => {
                "Je me tiens à votre disposition pour un entretien afin d'échanger sur \
                 ma candidature."
            }
        }
    }

    // --- Notices ----------------------------------------------------------

    pub fn premium_locked_notice(self) -> &'static str {
        match self {
            Locale::En => "This template requires a Pro subscription. Upgrade to use it.",
            Locale::Fr => {
                "Ce modèle nécessite un abonnement Pro. Passez au niveau supérieur pour \
                 l'utiliser."
            }
        }
    }

    pub fn payment_unconfirmed_notice(self) -> &'static str {
        match self {
            Locale::En => {
                "We could not confirm your payment yet. If you were charged, your \
                 account will be updated shortly."
            }
            Locale::Fr => {
                "Nous n'avons pas encore pu confirmer votre paiement. Si vous avez été \
                 débité, votre compte sera mis à jour sous peu."
            }
        }
    }
}

/// Labels for resume sections, resolved to localized headings at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Languages,
    Interests,
    Certifications,
    Qualities,
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Formats a timestamp as a short human date, e.g. "12 Jan 2026" / "12 janv. 2026".
pub fn format_date(ts: &DateTime<Utc>, locale: Locale) -> String {
    let month = match locale {
        Locale::En => MONTHS_EN[ts.month0() as usize],
        Locale::Fr => MONTHS_FR[ts.month0() as usize],
    };
    format!("{} {} {}", ts.day(), month, ts.year())
}

/// Formats an amount in cents as a localized currency string.
/// English locales price in dollars, French locales in euros.
pub fn format_currency(cents: i64, locale: Locale) -> String {
    let whole = cents / 100;
    let frac = (cents % 100).abs();
    match locale {
        Locale::En => format!("${whole}.{frac:02}"),
        Locale::Fr => format!("{whole},{frac:02} €"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_french_tags() {
        assert_eq!(Locale::from_tag("fr"), Locale::Fr);
        assert_eq!(Locale::from_tag("FR-ca"), Locale::Fr);
    }

    #[test]
    fn test_format_date_en_and_fr() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 12, 10, 0, 0).unwrap();
        assert_eq!(format_date(&ts, Locale::En), "12 Aug 2026");
        assert_eq!(format_date(&ts, Locale::Fr), "12 août 2026");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(999, Locale::En), "$9.99");
        assert_eq!(format_currency(999, Locale::Fr), "9,99 €");
        assert_eq!(format_currency(1000, Locale::En), "$10.00");
    }
}
