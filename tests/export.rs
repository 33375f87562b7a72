use haley_portfolio::export::{export_site, page_file, MANIFEST_FILE, NOT_FOUND_FILE};
use haley_portfolio::{Page, Site};

#[tokio::test]
async fn export_writes_every_page_and_manifest() {
    let out = tempfile::tempdir().unwrap();
    let site = Site::load().unwrap();

    let report = export_site(&site, out.path(), None).await.unwrap();
    assert_eq!(report.pages, site.pages().len());
    assert_eq!(report.assets, 0);

    for page in site.pages() {
        let file = page_file(out.path(), &page);
        assert!(file.is_file(), "missing {}", file.display());
    }

    let job = std::fs::read_to_string(page_file(
        out.path(),
        &Page::Job("senior-web-developer-techinnovate".to_string()),
    ))
    .unwrap();
    assert!(job.contains("<title>Senior Web Developer at TechInnovate Solutions</title>"));
    assert!(out.path().join(NOT_FOUND_FILE).is_file());

    let manifest: serde_json::Value =
        serde_json::from_slice(&std::fs::read(out.path().join(MANIFEST_FILE)).unwrap()).unwrap();
    assert!(manifest["generatedAt"].as_str().is_some());
    let pages = manifest["pages"].as_array().unwrap();
    assert_eq!(pages.len(), report.pages);
    assert!(pages.iter().any(|p| p == "/projects/skillswap"));
}

#[tokio::test]
async fn export_copies_static_assets() {
    let assets = tempfile::tempdir().unwrap();
    std::fs::create_dir(assets.path().join("img")).unwrap();
    std::fs::write(assets.path().join("site.css"), "body{}").unwrap();
    std::fs::write(assets.path().join("img").join("profile.jpg"), [0u8; 4]).unwrap();

    let out = tempfile::tempdir().unwrap();
    let site = Site::load().unwrap();
    let report = export_site(&site, out.path(), Some(assets.path())).await.unwrap();

    assert_eq!(report.assets, 2);
    assert!(out.path().join("static/site.css").is_file());
    assert!(out.path().join("static/img/profile.jpg").is_file());
}

#[tokio::test]
async fn missing_static_dir_is_skipped() {
    let out = tempfile::tempdir().unwrap();
    let site = Site::load().unwrap();
    let missing = out.path().join("does-not-exist");
    let report = export_site(&site, &out.path().join("site"), Some(&missing))
        .await
        .unwrap();
    assert_eq!(report.assets, 0);
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_static_dir_fails_the_export() {
    let root = tempfile::tempdir().unwrap();
    let not_a_dir = root.path().join("assets");
    std::fs::write(&not_a_dir, "plain file").unwrap();

    let site = Site::load().unwrap();
    let err = export_site(&site, &root.path().join("site"), Some(&not_a_dir.join("inner")))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("checking "));
}
