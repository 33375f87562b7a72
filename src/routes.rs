use std::path::Path;
use std::sync::Arc;

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, HeaderValue, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::error::{not_found_response, AppError};
use crate::pages::{
    self, HomeTemplate, JobDetailTemplate, JobsTemplate, ProjectDetailTemplate, ProjectsTemplate,
};
use crate::site::Site;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
}

pub fn build_router(site: Arc<Site>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/jobs", get(jobs))
        .route("/jobs/:slug", get(job_detail))
        .route("/projects", get(projects))
        .route("/projects/:slug", get(project_detail))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(fallback)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { site })
}

async fn home(State(state): State<AppState>) -> HomeTemplate {
    pages::home(&state.site)
}

async fn jobs(State(state): State<AppState>) -> JobsTemplate {
    pages::jobs(&state.site)
}

async fn job_detail(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<JobDetailTemplate, AppError> {
    Ok(pages::job_detail(&state.site, &slug)?)
}

async fn projects(State(state): State<AppState>) -> ProjectsTemplate {
    pages::projects(&state.site)
}

async fn project_detail(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<ProjectDetailTemplate, AppError> {
    Ok(pages::project_detail(&state.site, &slug)?)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn fallback(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no route");
    not_found_response()
}
