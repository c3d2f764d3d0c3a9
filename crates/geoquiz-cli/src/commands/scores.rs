//! The `geoquiz scores` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use geoquiz_core::config::load_config_from;
use geoquiz_core::score::{ScoreRecord, TIMESTAMP_FORMAT};
use geoquiz_core::store::ScoreStore;

pub fn execute(config_path: Option<PathBuf>, score_file: Option<PathBuf>, json: bool) -> Result<()> {
    let path = match score_file {
        Some(p) => p,
        None => load_config_from(config_path.as_deref())?.score_file,
    };

    let store = ScoreStore::new(&path);
    let records = store
        .read_all()
        .with_context(|| format!("failed to read scores from {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No score records found in {}", path.display());
        return Ok(());
    }

    print_table(&records);

    let total_games: u64 = records.iter().map(|r| u64::from(r.games_played())).sum();
    if let Some(best) = records.iter().max_by_key(|r| r.score()) {
        println!(
            "\nBest score: {} points ({})",
            best.score(),
            best.timestamp().format(TIMESTAMP_FORMAT)
        );
    }
    println!("Total games played: {total_games}");

    Ok(())
}

fn print_table(records: &[ScoreRecord]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Date and Time",
        "Games",
        "First Try",
        "Second Try",
        "Incorrect",
        "Score",
    ]);

    for r in records {
        table.add_row(vec![
            Cell::new(r.timestamp().format(TIMESTAMP_FORMAT)),
            Cell::new(r.games_played()),
            Cell::new(r.correct_first()),
            Cell::new(r.correct_second()),
            Cell::new(r.incorrect()),
            Cell::new(r.score()),
        ]);
    }

    println!("{table}");
}
