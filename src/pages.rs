use askama::Template;

use crate::catalog::Catalog;
use crate::error::{AppError, CatalogError};
use crate::models::{JobRecord, Profile, ProjectRecord};
use crate::site::{Page, Site};

/// Document title and description for the page head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// `"{name} at {company}"` for a known job, empty metadata otherwise.
pub fn job_metadata(jobs: &Catalog<JobRecord>, slug: &str) -> PageMeta {
    jobs.get(slug)
        .map(|job| PageMeta::new(format!("{} at {}", job.name, job.company), &job.description))
        .unwrap_or_default()
}

pub fn project_metadata(projects: &Catalog<ProjectRecord>, slug: &str) -> PageMeta {
    projects
        .get(slug)
        .map(|project| PageMeta::new(&project.name, &project.description))
        .unwrap_or_default()
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    pub profile: Profile,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsTemplate {
    pub meta: PageMeta,
    pub jobs: Vec<JobRecord>,
}

#[derive(Template)]
#[template(path = "job.html")]
pub struct JobDetailTemplate {
    pub meta: PageMeta,
    pub job: JobRecord,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub meta: PageMeta,
    pub projects: Vec<ProjectRecord>,
}

#[derive(Template)]
#[template(path = "project.html")]
pub struct ProjectDetailTemplate {
    pub meta: PageMeta,
    pub project: ProjectRecord,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
}

impl NotFoundTemplate {
    pub fn new() -> Self {
        Self {
            meta: PageMeta::new("Page not found", "The page you are looking for does not exist."),
        }
    }
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self::new()
    }
}

pub fn home(site: &Site) -> HomeTemplate {
    HomeTemplate {
        meta: PageMeta::new(&site.profile.name, "Portfolio of projects and professional experience"),
        profile: site.profile.clone(),
    }
}

pub fn jobs(site: &Site) -> JobsTemplate {
    JobsTemplate {
        meta: PageMeta::new("My Professional Journey", "Roles and companies I have worked with"),
        jobs: site.jobs.entries().to_vec(),
    }
}

pub fn job_detail(site: &Site, slug: &str) -> Result<JobDetailTemplate, CatalogError> {
    let job = site.jobs.resolve(slug)?;
    Ok(JobDetailTemplate {
        meta: job_metadata(&site.jobs, slug),
        job: job.clone(),
    })
}

pub fn projects(site: &Site) -> ProjectsTemplate {
    ProjectsTemplate {
        meta: PageMeta::new("My Projects", "Things I have designed and built"),
        projects: site.projects.entries().to_vec(),
    }
}

pub fn project_detail(site: &Site, slug: &str) -> Result<ProjectDetailTemplate, CatalogError> {
    let project = site.projects.resolve(slug)?;
    Ok(ProjectDetailTemplate {
        meta: project_metadata(&site.projects, slug),
        project: project.clone(),
    })
}

/// Renders `page` to HTML.
pub fn render(site: &Site, page: &Page) -> Result<String, AppError> {
    let html = match page {
        Page::Home => home(site).render()?,
        Page::Jobs => jobs(site).render()?,
        Page::Job(slug) => job_detail(site, slug)?.render()?,
        Page::Projects => projects(site).render()?,
        Page::Project(slug) => project_detail(site, slug)?.render()?,
    };
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::load().expect("embedded content is valid")
    }

    #[test]
    fn job_metadata_names_role_and_company() {
        let site = site();
        let meta = job_metadata(&site.jobs, "senior-web-developer-techinnovate");
        assert_eq!(meta.title, "Senior Web Developer at TechInnovate Solutions");
        assert!(meta.description.starts_with("Led full-stack development"));
    }

    #[test]
    fn job_metadata_for_unknown_slug_is_empty() {
        let site = site();
        assert_eq!(job_metadata(&site.jobs, "nonexistent-slug"), PageMeta::default());
    }

    #[test]
    fn project_detail_renders_links_and_technologies() {
        let site = site();
        let html = render(&site, &Page::Project("eco-tracker".to_string())).expect("render");
        assert!(html.contains("<title>Eco-Tracker</title>"));
        assert!(html.contains("GitHub Repository"));
        assert!(html.contains("Live Project"));
        assert!(html.contains("Chart.js"));
    }

    #[test]
    fn project_without_links_omits_buttons() {
        let mut site = site();
        let mut entries = site.projects.entries().to_vec();
        entries[0].github_link = None;
        entries[0].live_link = None;
        site.projects = Catalog::new("project", entries).expect("catalog");
        let html = render(&site, &Page::Project("eco-tracker".to_string())).expect("render");
        assert!(!html.contains("GitHub Repository"));
        assert!(!html.contains("Live Project"));
    }

    #[test]
    fn list_views_link_to_stored_slugs() {
        let site = site();
        let html = render(&site, &Page::Jobs).expect("render jobs");
        assert!(html.contains(r#"href="/jobs/full-stack-engineer-cloudnative""#));
        let html = render(&site, &Page::Projects).expect("render projects");
        assert!(html.contains(r#"href="/projects/urban-forager""#));
    }

    #[test]
    fn unknown_detail_page_is_not_found() {
        let err = render(&site(), &Page::Job("nonexistent-slug".to_string())).unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::NotFound { kind: "job", .. })
        ));
    }

    #[test]
    fn home_page_shows_profile() {
        let html = render(&site(), &Page::Home).expect("render home");
        assert!(html.contains("Haley Smith"));
        assert!(html.contains("Photography"));
        assert!(html.contains(r#"href="/projects""#));
        assert!(html.contains(r#"href="/jobs""#));
    }
}
