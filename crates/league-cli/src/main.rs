mod args;
mod commands;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use league_manager::{FileRepository, LeagueManager};
use log::debug;

use crate::args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("using data directory {}", args.data_dir.display());

    let repository = FileRepository::new(&args.data_dir);
    let mut league = LeagueManager::open(repository)
        .with_context(|| format!("failed to open league data in {}", args.data_dir.display()))?;

    let stdout = io::stdout();
    commands::run(&mut league, args.command, &mut stdout.lock())
}
