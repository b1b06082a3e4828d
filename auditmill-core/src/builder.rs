//! Build pipeline: load data, cross-reference, render, export

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::BuildConfig;
use crate::data;
use crate::docx;
use crate::site::{self, SiteTotals};
use crate::Result;

/// Summary of one build run
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub generated_at: DateTime<Utc>,
    pub chapter_count: usize,
    pub question_count: usize,
    pub incidence_count: usize,
    pub assets_lost_millions: f64,
    pub compromised_accounts_millions: f64,
    pub pages_written: u32,
    pub documents_written: u32,
}

/// Run the whole pipeline against the given configuration
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary> {
    let chapters = data::load_chapters(&config.paths.data_dir)?;
    let mut incidences = data::load_incidences(&config.paths.data_dir)?;
    data::link_incidences(&chapters, &mut incidences);

    let totals = SiteTotals::from_data(&chapters, &incidences);
    info!(
        chapters = chapters.len(),
        questions = totals.question_count,
        incidences = totals.incidence_count,
        "data loaded"
    );

    let tera = site::load_templates(&config.paths.template_dir)?;
    let pages_written = site::render_site(
        &tera,
        &config.output.site_dir,
        &chapters,
        &incidences,
        &totals,
    )?;
    info!(pages = pages_written, "site rendered");

    let documents_written = if config.output.export_docx {
        docx::export_documents(&chapters, &incidences, &config.output.docx_dir)?
    } else {
        0
    };

    let summary = BuildSummary {
        generated_at: Utc::now(),
        chapter_count: chapters.len(),
        question_count: totals.question_count,
        incidence_count: totals.incidence_count,
        assets_lost_millions: totals.assets_lost_millions,
        compromised_accounts_millions: totals.compromised_accounts_millions,
        pages_written,
        documents_written,
    };

    if let Some(path) = &config.output.manifest {
        export_manifest(&summary, path)?;
    }

    Ok(summary)
}

/// Export the build summary to a JSON file
pub fn export_manifest(summary: &BuildSummary, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
