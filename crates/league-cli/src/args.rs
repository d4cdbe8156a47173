use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use league_manager::{Division, BACKUP_FILE_NAME};

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage teams, fixtures and standings across seven divisions", long_about = None)]
pub struct Args {
    /// Directory holding the persisted league state
    #[arg(
        long,
        value_name = "DIR",
        env = "LEAGUE_DATA_DIR",
        default_value = "league-data"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct DivisionArg {
    /// "Division 3" or just 3
    #[arg(short, long, default_value = "Division 1", value_parser = parse_division)]
    pub division: Division,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List, add or remove teams
    #[command(subcommand)]
    Teams(TeamsCommand),

    /// Generate or list fixtures
    #[command(subcommand)]
    Fixtures(FixturesCommand),

    /// Enter a result for a fixture
    Score {
        #[command(flatten)]
        division: DivisionArg,
        /// Fixture number as shown by `fixtures list`
        index: usize,
        #[arg(allow_hyphen_values = true)]
        home: String,
        #[arg(allow_hyphen_values = true)]
        away: String,
    },

    /// Take back an entered result
    Undo {
        #[command(flatten)]
        division: DivisionArg,
        index: usize,
    },

    /// Show ranked standings (all divisions unless one is given)
    Standings {
        #[arg(short, long, value_parser = parse_division)]
        division: Option<Division>,
    },

    /// Export or import a JSON backup of everything
    #[command(subcommand)]
    Backup(BackupCommand),
}

#[derive(Subcommand, Debug)]
pub enum TeamsCommand {
    List {
        #[command(flatten)]
        division: DivisionArg,
    },
    Add {
        #[command(flatten)]
        division: DivisionArg,
        name: String,
    },
    Remove {
        #[command(flatten)]
        division: DivisionArg,
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FixturesCommand {
    /// Replace the division's fixtures with a fresh home-and-away round-robin
    Generate {
        #[command(flatten)]
        division: DivisionArg,
    },
    List {
        #[command(flatten)]
        division: DivisionArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum BackupCommand {
    Export {
        #[arg(default_value = BACKUP_FILE_NAME)]
        path: PathBuf,
    },
    Import { path: PathBuf },
}

fn parse_division(s: &str) -> Result<Division, String> {
    s.parse().map_err(|e: league_manager::LeagueError| e.to_string())
}
