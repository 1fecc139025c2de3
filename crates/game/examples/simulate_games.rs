//! Example: Play many games with random dice
//!
//! Run with: cargo run --package game --example simulate_games
//!
//! This example shows how to:
//! 1. Drive a GameSession through both selection phases
//! 2. Roll until a winner is found
//! 3. Check that every board position wins about equally often

use catalog::Movie;
use game::{GameSession, RandomDice};
use std::time::Instant;

const GAMES: usize = 60_000;

fn movie(id: u32) -> Movie {
    serde_json::from_value(serde_json::json!({ "id": id, "title": format!("Movie #{id}") }))
        .expect("static movie JSON is valid")
}

fn main() -> anyhow::Result<()> {
    // Warnings only: the session logs every phase change at info
    tracing_subscriber::fmt().with_env_filter("warn").init();

    println!("=== Movie Dice Simulation ({GAMES} games) ===\n");

    let mut dice = RandomDice::seeded(2024);
    let mut wins_by_position = [0usize; 6];
    let mut total_rolls = 0usize;
    let start = Instant::now();

    let mut session = GameSession::new();
    for _ in 0..GAMES {
        session.reset();
        session.start()?;
        for id in 1..=3 {
            session.toggle_movie(&movie(id))?;
        }
        session.confirm_selection()?;
        for id in 4..=6 {
            session.toggle_movie(&movie(id))?;
        }
        session.confirm_selection()?;

        let winner = loop {
            if let Some(winner) = session.roll(&mut dice)?.winner {
                break winner;
            }
        };
        wins_by_position[winner.number as usize - 1] += 1;
        total_rolls += session.rolls().len();
    }

    println!("Simulated in {:?}", start.elapsed());
    println!("Average rolls per game: {:.2}\n", total_rolls as f64 / GAMES as f64);
    for (idx, wins) in wins_by_position.iter().enumerate() {
        let share = *wins as f64 / GAMES as f64 * 100.0;
        println!("  Position {}: {:>6} wins ({:.1}%)", idx + 1, wins, share);
    }

    Ok(())
}
