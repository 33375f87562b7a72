use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::pages::NotFoundTemplate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no {kind} with slug '{slug}'")]
    NotFound { kind: &'static str, slug: String },

    #[error("duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("{kind} entry at position {position} has an empty slug")]
    EmptySlug { kind: &'static str, position: usize },

    #[error("{kind} slug '{slug}' may only contain lowercase letters, digits and '-'")]
    InvalidSlug { kind: &'static str, slug: String },
}

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self, "resource not found");
            return not_found_response();
        }
        tracing::error!(error = %self, "request failed");
        (status, "internal server error").into_response()
    }
}

pub fn not_found_response() -> Response {
    match NotFoundTemplate::new().render() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render not-found page");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}
