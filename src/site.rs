use anyhow::Context;

use crate::catalog::Catalog;
use crate::models::{JobData, JobRecord, Profile, ProjectData, ProjectRecord};

const PROFILE_JSON: &str = include_str!("../data/profile.json");
const JOBS_JSON: &str = include_str!("../data/jobs.json");
const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// All content the site renders. Built once, then shared read-only.
#[derive(Debug, Clone)]
pub struct Site {
    pub profile: Profile,
    pub jobs: Catalog<JobRecord>,
    pub projects: Catalog<ProjectRecord>,
}

/// One page the site serves, identified by its route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Jobs,
    Job(String),
    Projects,
    Project(String),
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Jobs => "/jobs".to_string(),
            Page::Job(slug) => format!("/jobs/{slug}"),
            Page::Projects => "/projects".to_string(),
            Page::Project(slug) => format!("/projects/{slug}"),
        }
    }
}

impl Site {
    /// Loads the content compiled into the binary.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_json(PROFILE_JSON, JOBS_JSON, PROJECTS_JSON)
    }

    pub fn from_json(profile: &str, jobs: &str, projects: &str) -> anyhow::Result<Self> {
        let profile: Profile = serde_json::from_str(profile).context("parsing profile data")?;
        let jobs: JobData = serde_json::from_str(jobs).context("parsing job data")?;
        let projects: ProjectData =
            serde_json::from_str(projects).context("parsing project data")?;

        let site = Self {
            profile,
            jobs: Catalog::new("job", jobs.entries)?,
            projects: Catalog::new("project", projects.entries)?,
        };
        tracing::debug!(
            jobs = site.jobs.len(),
            projects = site.projects.len(),
            "site content loaded"
        );
        Ok(site)
    }

    /// Every page that must exist, list views first.
    pub fn pages(&self) -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::Jobs, Page::Projects];
        pages.extend(self.jobs.slugs().into_iter().map(|s| Page::Job(s.to_string())));
        pages.extend(
            self.projects
                .slugs()
                .into_iter()
                .map(|s| Page::Project(s.to_string())),
        );
        pages
    }
}
