//! Static export: enumerate every page, then render and write each one.

use std::path::{Path, PathBuf};

use anyhow::Context;
use askama::Template;
use serde::Serialize;

use crate::pages::{self, NotFoundTemplate};
use crate::site::{Page, Site};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const NOT_FOUND_FILE: &str = "404.html";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportManifest {
    generated_at: String,
    pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    pub pages: usize,
    pub assets: usize,
}

/// Where `page` lands under `out_dir`.
pub fn page_file(out_dir: &Path, page: &Page) -> PathBuf {
    let path = page.path();
    let relative = path.trim_matches('/');
    if relative.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(relative).join("index.html")
    }
}

pub async fn export_site(
    site: &Site,
    out_dir: &Path,
    static_dir: Option<&Path>,
) -> anyhow::Result<ExportReport> {
    let pages = site.pages();

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for page in &pages {
        let html = pages::render(site, page)
            .with_context(|| format!("rendering {}", page.path()))?;
        write_file(&page_file(out_dir, page), html.as_bytes()).await?;
        tracing::debug!(path = %page.path(), "page exported");
    }

    let not_found = NotFoundTemplate::new()
        .render()
        .context("rendering not-found page")?;
    write_file(&out_dir.join(NOT_FOUND_FILE), not_found.as_bytes()).await?;

    let manifest = ExportManifest {
        generated_at: chrono::Utc::now().to_rfc3339(),
        pages: pages.iter().map(Page::path).collect(),
    };
    let manifest = serde_json::to_vec_pretty(&manifest).context("encoding manifest")?;
    write_file(&out_dir.join(MANIFEST_FILE), &manifest).await?;

    let assets = match static_dir {
        Some(dir) => {
            let exists = tokio::fs::try_exists(dir)
                .await
                .with_context(|| format!("checking {}", dir.display()))?;
            if exists {
                copy_tree(dir, &out_dir.join("static")).await?
            } else {
                tracing::warn!(dir = %dir.display(), "static directory missing, skipping assets");
                0
            }
        }
        None => 0,
    };

    tracing::info!(
        out_dir = %out_dir.display(),
        pages = pages.len(),
        assets,
        "site exported"
    );
    Ok(ExportReport {
        out_dir: out_dir.to_path_buf(),
        pages: pages.len(),
        assets,
    })
}

async fn write_file(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))
}

async fn copy_tree(from: &Path, to: &Path) -> anyhow::Result<usize> {
    let mut copied = 0;
    let mut pending = vec![(from.to_path_buf(), to.to_path_buf())];
    while let Some((src, dst)) = pending.pop() {
        tokio::fs::create_dir_all(&dst)
            .await
            .with_context(|| format!("creating {}", dst.display()))?;
        let mut entries = tokio::fs::read_dir(&src)
            .await
            .with_context(|| format!("reading {}", src.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let target = dst.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                pending.push((entry.path(), target));
            } else {
                tokio::fs::copy(entry.path(), &target)
                    .await
                    .with_context(|| format!("copying {}", entry.path().display()))?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}
