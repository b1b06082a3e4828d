//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "auditmill")]
#[command(author, version, about = "Audit questionnaire site and report generator")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the YAML data documents
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Directory holding the page templates
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Output directory for the rendered site pages
    #[arg(long)]
    pub site_out: Option<PathBuf>,

    /// Output directory for the Word documents
    #[arg(long)]
    pub docx_out: Option<PathBuf>,

    /// Export Word documents for proof reading
    #[arg(long)]
    pub docx: bool,

    /// Write a JSON build summary to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}
