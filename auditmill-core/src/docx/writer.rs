//! Build the per-chapter and incidence `.docx` documents

use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{
    BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};
use tracing::info;

use crate::data::models::{Chapter, Incidence};
use crate::{Error, Result};

const BODY_FONT: &str = "Courier New";
// Run sizes are half-points: 24 is 12pt
const BODY_SIZE: usize = 24;

/// Write one document per chapter plus the incidence document.
///
/// Returns the number of documents written.
pub fn export_documents(
    chapters: &[Chapter],
    incidences: &[Incidence],
    docx_dir: &Path,
) -> Result<u32> {
    std::fs::create_dir_all(docx_dir)?;

    let mut written = 0;
    for chapter in chapters {
        export_chapter(chapter, docx_dir)?;
        written += 1;
    }
    export_incidences(incidences, docx_dir)?;
    written += 1;

    Ok(written)
}

/// Write `<chapter id>.docx`: chapter front matter, then one table per
/// question (id / text / rationale) with a page break after each.
pub fn export_chapter(chapter: &Chapter, docx_dir: &Path) -> Result<PathBuf> {
    let mut doc = base_document()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(format!("Chapter: {}", chapter.id)))
                .style("Heading1"),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(chapter.meta.description.as_str()))
                .style("Subtitle"),
        )
        .add_paragraph(Paragraph::new().add_run(body_run(&chapter.meta.background)))
        .add_paragraph(page_break());

    for question in &chapter.questions {
        let rationale = question.rationale.as_deref().ok_or_else(|| {
            Error::Document(format!("question missing rationale: {}", question.id))
        })?;

        doc = doc
            .add_table(Table::new(vec![
                text_row(&question.id),
                text_row(&question.question),
                body_row(rationale),
            ]))
            .add_paragraph(page_break());
    }

    let path = docx_dir.join(format!("{}.docx", chapter.id));
    info!(path = %path.display(), "building chapter document");
    save(doc, &path)?;
    Ok(path)
}

/// Write `incidences.docx`: one table per incidence (id / title /
/// description) with a page break after each.
pub fn export_incidences(incidences: &[Incidence], docx_dir: &Path) -> Result<PathBuf> {
    let mut doc = base_document()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Incidences"))
                .style("Title"),
        )
        .add_paragraph(page_break());

    for incidence in incidences {
        doc = doc
            .add_table(Table::new(vec![
                text_row(&incidence.id),
                text_row(&incidence.title),
                body_row(&incidence.description),
            ]))
            .add_paragraph(page_break());
    }

    let path = docx_dir.join("incidences.docx");
    info!(path = %path.display(), "building incidence document");
    save(doc, &path)?;
    Ok(path)
}

fn base_document() -> Docx {
    Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new("Subtitle", StyleType::Paragraph)
                .name("Subtitle")
                .size(28)
                .italic(),
        )
}

/// Body text run in the proof-reading font
fn body_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .size(BODY_SIZE)
        .fonts(RunFonts::new().ascii(BODY_FONT))
}

fn text_row(text: &str) -> TableRow {
    TableRow::new(vec![TableCell::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))])
}

fn body_row(text: &str) -> TableRow {
    TableRow::new(vec![
        TableCell::new().add_paragraph(Paragraph::new().add_run(body_run(text)))
    ])
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn save(doc: Docx, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    doc.build()
        .pack(file)
        .map_err(|e| Error::Document(e.to_string()))?;
    Ok(())
}
