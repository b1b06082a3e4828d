//! Render the questionnaire into site pages

use std::fs;
use std::path::Path;

use tera::{Context, Tera};
use tracing::info;

use crate::data::models::{Chapter, Incidence};
use crate::labels::{ANSWERS, APPLIES};
use crate::site::engine::slug;
use crate::Result;

/// Aggregates rendered on the index pages
#[derive(Debug, Clone, Copy)]
pub struct SiteTotals {
    /// Assessment points across all chapters
    pub question_count: usize,
    pub incidence_count: usize,
    /// Total value of stolen assets, in millions
    pub assets_lost_millions: f64,
    /// Total compromised accounts, in millions
    pub compromised_accounts_millions: f64,
}

impl SiteTotals {
    pub fn from_data(chapters: &[Chapter], incidences: &[Incidence]) -> Self {
        let assets_lost: f64 = incidences.iter().map(Incidence::assets_stolen_value).sum();
        let compromised: f64 = incidences
            .iter()
            .map(Incidence::compromised_users_value)
            .sum();
        Self {
            question_count: chapters.iter().map(|c| c.questions.len()).sum(),
            incidence_count: incidences.len(),
            assets_lost_millions: assets_lost / 1_000_000.0,
            compromised_accounts_millions: compromised / 1_000_000.0,
        }
    }
}

/// Render every site page into `site_dir`, creating directories as needed.
///
/// Returns the number of pages written.
pub fn render_site(
    tera: &Tera,
    site_dir: &Path,
    chapters: &[Chapter],
    incidences: &[Incidence],
    totals: &SiteTotals,
) -> Result<u32> {
    let mut pages = 0;

    // Front page
    let mut ctx = Context::new();
    ctx.insert("chapters", chapters);
    ctx.insert("incidence_count", &totals.incidence_count);
    ctx.insert(
        "security_assessment_point_count",
        &totals.question_count,
    );
    write_page(&site_dir.join("index.rst"), &tera.render("index.rst", &ctx)?)?;
    pages += 1;

    // Incidence index
    let mut ctx = Context::new();
    ctx.insert("incidences", incidences);
    ctx.insert("assets_lost", &totals.assets_lost_millions);
    ctx.insert(
        "compromised_accounts",
        &totals.compromised_accounts_millions,
    );
    write_page(
        &site_dir.join("incidences").join("index.rst"),
        &tera.render("incidences.rst", &ctx)?,
    )?;
    pages += 1;

    // Individual incidence pages
    for incidence in incidences {
        let mut ctx = Context::new();
        ctx.insert("incidence_id", &incidence.id);
        ctx.insert("incidence", incidence);
        write_page(
            &site_dir
                .join("incidences")
                .join(format!("{}.rst", incidence.id)),
            &tera.render("incidence.rst", &ctx)?,
        )?;
        pages += 1;
    }

    // Chapter pages and their question pages
    for chapter in chapters {
        info!(chapter = %chapter.id, "rendering chapter");

        let mut ctx = Context::new();
        ctx.insert("chapter_id", &chapter.id);
        ctx.insert("meta", &chapter.meta);
        ctx.insert("questions", &chapter.questions);
        ctx.insert("answers", &*ANSWERS);
        ctx.insert("applies", &*APPLIES);
        write_page(
            &site_dir.join(&chapter.id).join("index.rst"),
            &tera.render("chapter.rst", &ctx)?,
        )?;
        pages += 1;

        for question in &chapter.questions {
            let mut ctx = Context::new();
            ctx.insert("question_title", &question.id);
            ctx.insert("question", question);
            ctx.insert("answers", &*ANSWERS);
            ctx.insert("applies", &*APPLIES);
            write_page(
                &site_dir
                    .join(&chapter.id)
                    .join(format!("{}.rst", slug(&question.id))),
                &tera.render("question.rst", &ctx)?,
            )?;
            pages += 1;
        }
    }

    Ok(pages)
}

fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
