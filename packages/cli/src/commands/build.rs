use super::parse_sources;
use crate::config::Config;
use crate::input::read_inputs;
use anyhow::{anyhow, Result};
use bestpaper_compiler_html::compile_to_html;
use bestpaper_ranking::rank_institutions;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Listing files or directories (reads stdin when empty or `-`)
    pub inputs: Vec<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Minimum institution score shown in the ranking (overrides config)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Emit the page without indentation or newlines
    #[arg(long)]
    pub compact: bool,

    /// Date shown at the bottom of the page (overrides config)
    #[arg(long)]
    pub last_updated: Option<String>,
}

pub fn build(args: BuildArgs, cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(cwd, config_path)?;
    let sources = read_inputs(&args.inputs, &config.input_extension)?;
    let document = parse_sources(&sources)?;

    let ranking = rank_institutions(&document.conferences, config.rank_options(args.min_score));

    let mut options = config.compile_options();
    if args.compact {
        options.pretty = false;
    }
    if args.last_updated.is_some() {
        options.last_updated = args.last_updated.clone();
    }

    let html = compile_to_html(&document, &ranking, options).map_err(|e| anyhow!(e))?;
    info!(
        conferences = document.conferences.len(),
        papers = document.paper_count(),
        institutions = ranking.len(),
        "built page"
    );

    match args.out {
        Some(out) => {
            let out = cwd.join(out);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, &html)?;

            eprintln!(
                "{} {} conferences, {} papers, {} ranked institutions → {}",
                "✓".green(),
                document.conferences.len(),
                document.paper_count(),
                ranking.len(),
                out.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
