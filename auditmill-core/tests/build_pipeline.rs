//! End-to-end build against the shipped dataset

use std::fs;
use std::path::{Path, PathBuf};

use auditmill_core::builder::run_build;
use auditmill_core::config::BuildConfig;
use tempfile::TempDir;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crate should live in the workspace")
        .to_path_buf()
}

fn shipped_config(out: &Path, export_docx: bool) -> BuildConfig {
    let root = workspace_root();
    let mut config = BuildConfig::default();
    config.paths.data_dir = root.join("data");
    config.paths.template_dir = root.join("templates");
    config.output.site_dir = out.join("source");
    config.output.docx_dir = out.join("docx");
    config.output.export_docx = export_docx;
    config.output.manifest = Some(out.join("summary.json"));
    config
}

#[test]
fn test_full_build_of_shipped_dataset() {
    let temp = TempDir::new().expect("should create temp dir");
    let config = shipped_config(temp.path(), true);

    let summary = run_build(&config).expect("build should succeed");

    assert_eq!(summary.chapter_count, 3);
    assert_eq!(summary.question_count, 10);
    assert_eq!(summary.incidence_count, 7);
    // index + incidence index + 7 incidence pages + 3 chapter pages + 10 question pages
    assert_eq!(summary.pages_written, 22);
    // one document per chapter plus incidences.docx
    assert_eq!(summary.documents_written, 4);

    // 450 + 530 + 60 + 72 + 5 + 64 + 190 million across the incidence set
    assert_eq!(summary.assets_lost_millions, 1371.0);
    // 24000 + 260k + 76000 accounts; "Not disclosed" counts as zero
    assert!((summary.compromised_accounts_millions - 0.36).abs() < 1e-9);

    let site = config.output.site_dir;
    let index = fs::read_to_string(site.join("index.rst")).expect("index page");
    assert!(index.contains("10 assessment"));
    assert!(index.contains("wallet-management/index"));

    // Question pages are named by the slug of the question id
    let question = fs::read_to_string(site.join("wallet-management/cold-wallet-share.rst"))
        .expect("question page");
    assert!(question.contains("cold storage"));
    assert!(question.contains("Yes / No"));

    let docx = config.output.docx_dir;
    for name in [
        "governance.docx",
        "wallet-management.docx",
        "operational-security.docx",
        "incidences.docx",
    ] {
        let len = fs::metadata(docx.join(name)).expect("document").len();
        assert!(len > 0, "{name} should not be empty");
    }

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("summary.json")).unwrap())
            .expect("manifest should be valid JSON");
    assert_eq!(manifest["incidence_count"], 7);
    assert_eq!(manifest["pages_written"], 22);
}

#[test]
fn test_cross_references_on_incidence_pages() {
    let temp = TempDir::new().expect("should create temp dir");
    let config = shipped_config(temp.path(), false);

    run_build(&config).expect("build should succeed");

    // coincheck is cited as "coincheck" by one question and "Coincheck" by
    // another; both must resolve to the same incidence.
    let page = fs::read_to_string(config.output.site_dir.join("incidences/coincheck.rst"))
        .expect("incidence page");
    assert!(page.contains("wallet-management/cold-wallet-share"));
    assert!(page.contains("wallet-management/hot-wallet-limits"));

    // zaif is cited only from the cold wallet question
    let page = fs::read_to_string(config.output.site_dir.join("incidences/zaif.rst"))
        .expect("incidence page");
    assert!(page.contains("cold-wallet-share"));
    assert!(!page.contains("hot-wallet-limits"));
}

#[test]
fn test_incidence_index_is_title_sorted() {
    let temp = TempDir::new().expect("should create temp dir");
    let config = shipped_config(temp.path(), false);

    run_build(&config).expect("build should succeed");

    let page = fs::read_to_string(config.output.site_dir.join("incidences/index.rst"))
        .expect("incidence index");
    let positions: Vec<usize> = ["bitfinex", "bitstamp", "coincheck", "mtgox", "nicehash"]
        .iter()
        .map(|id| page.find(&format!("   {id}\n")).expect("toctree entry"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_docx_export_is_opt_in() {
    let temp = TempDir::new().expect("should create temp dir");
    let config = shipped_config(temp.path(), false);

    let summary = run_build(&config).expect("build should succeed");

    assert_eq!(summary.documents_written, 0);
    assert!(!config.output.docx_dir.join("incidences.docx").exists());
}
