use serde::{Deserialize, Serialize};

use crate::models::resume::PersonalInfo;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub reference: String,
}

/// Cover letter document: header info plus four free-text narrative blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub recipient_info: RecipientInfo,
    #[serde(default)]
    pub job_info: JobInfo,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub closing: String,
    /// Identifier of the selected template; must name a cover letter descriptor.
    #[serde(default = "default_letter_template")]
    pub template: String,
}

fn default_letter_template() -> String {
    "classic".to_string()
}
