mod commands;
mod config;
mod input;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, check, init, rank, BuildArgs, CheckArgs, InitArgs, RankArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Best paper awards page generator
#[derive(Parser, Debug)]
#[command(name = "bestpaper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log parser and compiler progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to bestpaper.config.json in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default config file
    Init(InitArgs),

    /// Generate the awards page from listing files
    Build(BuildArgs),

    /// Print the institution ranking
    Rank(RankArgs),

    /// Parse listing files and report what they contain
    Check(CheckArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = cli.config.as_deref();

    match cli.command {
        Command::Init(args) => init(args, &cwd, config),
        Command::Build(args) => build(args, &cwd, config),
        Command::Rank(args) => rank(args, &cwd, config),
        Command::Check(args) => check(args, &cwd, config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
