use super::parse_sources;
use crate::config::Config;
use crate::input::read_inputs;
use anyhow::Result;
use bestpaper_ranking::{rank_institutions, Ranking};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Listing files or directories (reads stdin when empty or `-`)
    pub inputs: Vec<PathBuf>,

    /// Minimum institution score to list (overrides config)
    #[arg(long)]
    pub min_score: Option<f64>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: RankFormat,
}

pub fn rank(args: RankArgs, cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(cwd, config_path)?;
    let sources = read_inputs(&args.inputs, &config.input_extension)?;
    let document = parse_sources(&sources)?;

    let ranking = rank_institutions(&document.conferences, config.rank_options(args.min_score));

    match args.format {
        RankFormat::Text => print!("{}", format_text(&ranking)),
        RankFormat::Json => println!("{}", serde_json::to_string_pretty(&ranking)?),
    }

    Ok(())
}

/// One numbered line per entry, scores right-aligned
fn format_text(ranking: &Ranking) -> String {
    ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>3}. {:>5.1}  {}\n", i + 1, entry.score, entry.institution))
        .collect()
}
