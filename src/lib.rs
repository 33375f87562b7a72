pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pages;
pub mod routes;
pub mod site;

pub use catalog::{slugify, Catalog, CatalogEntry};
pub use error::{AppError, CatalogError};
pub use routes::build_router;
pub use site::{Page, Site};
