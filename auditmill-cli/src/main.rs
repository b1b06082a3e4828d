use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;

use args::Args;
use auditmill_core::builder;
use auditmill_core::config::BuildConfig;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let summary = builder::run_build(&config)?;

    println!(
        "auditmill v{}: wrote {} pages and {} documents ({} chapters, {} assessment points, {} incidences)",
        env!("CARGO_PKG_VERSION"),
        summary.pages_written,
        summary.documents_written,
        summary.chapter_count,
        summary.question_count,
        summary.incidence_count,
    );
    Ok(())
}

/// Config file (explicit path or default cascade) with CLI flag overrides
fn resolve_config(args: &Args) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::from_file(path)?,
        None => BuildConfig::load_default(),
    };

    if let Some(data) = &args.data {
        config.paths.data_dir = data.clone();
    }
    if let Some(templates) = &args.templates {
        config.paths.template_dir = templates.clone();
    }
    if let Some(site_out) = &args.site_out {
        config.output.site_dir = site_out.clone();
    }
    if let Some(docx_out) = &args.docx_out {
        config.output.docx_dir = docx_out.clone();
    }
    if args.docx {
        config.output.export_docx = true;
    }
    if let Some(manifest) = &args.manifest {
        config.output.manifest = Some(manifest.clone());
    }

    Ok(config)
}
