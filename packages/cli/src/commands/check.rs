use super::parse_sources;
use crate::config::Config;
use crate::input::read_inputs;
use anyhow::Result;
use bestpaper_parser::ast::Document;
use bestpaper_parser::serialize;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Listing files or directories (reads stdin when empty or `-`)
    pub inputs: Vec<PathBuf>,

    /// Print the listing re-serialized in sorted order
    #[arg(long)]
    pub normalize: bool,

    /// Print a JSON summary instead of text
    #[arg(long, conflicts_with = "normalize")]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct ConferenceSummary<'a> {
    key: &'a str,
    name: &'a str,
    papers: usize,
    authors: usize,
}

#[derive(Debug, Serialize, PartialEq)]
struct Summary<'a> {
    files: usize,
    papers: usize,
    authors: usize,
    conferences: Vec<ConferenceSummary<'a>>,
}

impl<'a> Summary<'a> {
    fn new(document: &'a Document, files: usize) -> Self {
        Self {
            files,
            papers: document.paper_count(),
            authors: document.author_count(),
            conferences: document
                .conferences
                .iter()
                .map(|conference| ConferenceSummary {
                    key: &conference.key,
                    name: &conference.name,
                    papers: conference.papers.len(),
                    authors: conference.author_count(),
                })
                .collect(),
        }
    }
}

pub fn check(args: CheckArgs, cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(cwd, config_path)?;
    let sources = read_inputs(&args.inputs, &config.input_extension)?;
    let document = parse_sources(&sources)?;

    if args.normalize {
        print!("{}", serialize(&document));
        return Ok(());
    }

    let summary = Summary::new(&document, sources.names().count());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for conference in &summary.conferences {
        println!(
            "  {} {:<10} {:>4} papers {:>5} authors",
            "✓".green(),
            conference.key,
            conference.papers,
            conference.authors
        );
    }
    println!();
    println!(
        "{} {} conferences, {} papers, {} authors in {} file(s)",
        "✅".green(),
        summary.conferences.len(),
        summary.papers,
        summary.authors,
        summary.files
    );

    Ok(())
}
