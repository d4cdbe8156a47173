use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use league_manager::{Decimal, Division, LeagueManager, Repository, StandingsRow};
use log::info;

use crate::args::{BackupCommand, Command, FixturesCommand, TeamsCommand};

pub fn run<R: Repository>(
    league: &mut LeagueManager<R>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Teams(TeamsCommand::List { division }) => {
            let division = division.division;
            writeln!(out, "{division}")?;
            let teams = league.teams(division);
            if teams.is_empty() {
                writeln!(out, "  no teams")?;
            }
            for team in teams {
                writeln!(out, "  {team}")?;
            }
        }
        Command::Teams(TeamsCommand::Add { division, name }) => {
            let name = league.add_team(division.division, &name)?;
            writeln!(out, "added {name} to {}", division.division)?;
        }
        Command::Teams(TeamsCommand::Remove { division, name }) => {
            let removed = league.remove_team(division.division, &name)?;
            writeln!(out, "removed {removed} team(s) named {name} from {}", division.division)?;
        }
        Command::Fixtures(FixturesCommand::Generate { division }) => {
            let count = league.generate_fixtures(division.division)?;
            writeln!(out, "generated {count} fixtures for {}", division.division)?;
        }
        Command::Fixtures(FixturesCommand::List { division }) => {
            write_fixtures(league, division.division, out)?;
        }
        Command::Score { division, index, home, away } => {
            let division = division.division;
            league.set_scores(division, index, &home, &away)?;
            let score = league.record_result(division, index)?;
            let fixture = &league.fixtures(division)[index];
            writeln!(
                out,
                "{division}: {} {} - {} {}",
                fixture.home, score.home, score.away, fixture.away
            )?;
        }
        Command::Undo { division, index } => {
            let division = division.division;
            league.undo_result(division, index)?;
            let fixture = &league.fixtures(division)[index];
            writeln!(out, "{division}: cleared {} vs {}", fixture.home, fixture.away)?;
        }
        Command::Standings { division: Some(division) } => {
            write_standings(out, division, &league.standings(division))?;
        }
        Command::Standings { division: None } => {
            for (division, rows) in league.all_standings() {
                write_standings(out, division, &rows)?;
                writeln!(out)?;
            }
        }
        Command::Backup(BackupCommand::Export { path }) => {
            let json = league.export_backup()?;
            fs::write(&path, json)
                .with_context(|| format!("failed to write backup to {}", path.display()))?;
            info!("backup written to {}", path.display());
            writeln!(out, "backup written to {}", path.display())?;
        }
        Command::Backup(BackupCommand::Import { path }) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read backup {}", path.display()))?;
            league
                .import_backup(&json)
                .with_context(|| format!("could not load {}", path.display()))?;
            writeln!(out, "backup loaded from {}", path.display())?;
        }
    }
    Ok(())
}

fn write_fixtures<R: Repository>(
    league: &LeagueManager<R>,
    division: Division,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{division}")?;
    let fixtures = league.fixtures(division);
    if fixtures.is_empty() {
        writeln!(out, "  no fixtures")?;
    }
    for (index, fixture) in fixtures.iter().enumerate() {
        let result = if fixture.is_entered() {
            format!("{} - {}", fixture.home_score(), fixture.away_score())
        } else {
            "-".to_string()
        };
        writeln!(out, "  #{index:<4} {} vs {}  {result}", fixture.home, fixture.away)?;
    }
    Ok(())
}

fn write_standings(out: &mut impl Write, division: Division, rows: &[StandingsRow]) -> Result<()> {
    writeln!(out, "{division}")?;
    if rows.is_empty() {
        writeln!(out, "  no teams in this division")?;
        return Ok(());
    }
    writeln!(
        out,
        "  {:<24} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "Team", "H", "A", "Game", "Match", "Total"
    )?;
    let number = |value: Decimal| value.normalize().to_string();
    for row in rows {
        let e = &row.entry;
        writeln!(
            out,
            "  {:<24} {:>6} {:>6} {:>6} {:>6} {:>6}",
            row.team,
            number(e.home),
            number(e.away),
            number(e.game),
            number(e.match_points),
            number(e.total())
        )?;
    }
    Ok(())
}
