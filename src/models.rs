use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub slug: String,
    pub name: String,
    pub company: String,
    pub logo_path: String,
    pub description: String,
    pub short_description: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub image_path: String,
    pub background_path: String,
    pub skills: Vec<String>,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Deserialize)]
pub struct JobData {
    pub entries: Vec<JobRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectData {
    pub entries: Vec<ProjectRecord>,
}
