use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Date shown at the bottom of generated pages
    #[arg(long)]
    pub last_updated: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let config_path = Config::path(cwd, config_path);

    // Check if config already exists
    if config_path.exists() && !args.force {
        eprintln!(
            "{} {} already exists",
            "⚠️".yellow(),
            config_path.display().to_string().bright_white()
        );
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        last_updated: args.last_updated,
        ..Config::default()
    };

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json + "\n")?;

    eprintln!("  {} Created {}", "✓".green(), config_path.display());
    eprintln!();
    eprintln!("Next steps:");
    eprintln!("  1. Edit the page text in {}", config_path.display());
    eprintln!("  2. Run: bestpaper build awards/ --out index.html");

    Ok(())
}
