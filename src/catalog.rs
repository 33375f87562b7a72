//! Immutable slug-keyed catalogs for the jobs and projects pages.
//!
//! A catalog is an ordered list of records plus an index from slug to
//! position. It is built once at startup and only read afterwards, so it
//! can be shared between handlers without locking.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::{JobRecord, ProjectRecord};

/// A record addressable by a URL slug.
pub trait CatalogEntry {
    fn slug(&self) -> &str;
}

impl CatalogEntry for JobRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl CatalogEntry for ProjectRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    kind: &'static str,
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new(kind: &'static str, entries: Vec<T>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let slug = entry.slug();
            if slug.is_empty() {
                return Err(CatalogError::EmptySlug { kind, position });
            }
            if !is_url_safe(slug) {
                return Err(CatalogError::InvalidSlug {
                    kind,
                    slug: slug.to_string(),
                });
            }
            if index.insert(slug.to_string(), position).is_some() {
                return Err(CatalogError::DuplicateSlug {
                    kind,
                    slug: slug.to_string(),
                });
            }
        }
        Ok(Self {
            kind,
            entries,
            index,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Every slug in the catalog, in list order.
    pub fn slugs(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::slug).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, slug: &str) -> Option<&T> {
        self.index.get(slug).map(|&i| &self.entries[i])
    }

    pub fn resolve(&self, slug: &str) -> Result<&T, CatalogError> {
        self.get(slug).ok_or_else(|| CatalogError::NotFound {
            kind: self.kind,
            slug: slug.to_string(),
        })
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Slugs are used verbatim as one URL path segment and one directory name.
fn is_url_safe(slug: &str) -> bool {
    slug.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Lower-cases `name` and joins its whitespace-separated words with `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
