use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured résumé record returned by the extraction pipeline and accepted
/// by the save endpoint. All five fields are always present; sections that
/// could not be extracted default to empty rather than being omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
}

/// A saved record as held by the store. Identity and save time are stamped
/// at append time, never supplied by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: ResumeRecord,
}
