//! Terminal output helpers.

use catalog::images::{provider_logo_url, LogoSize};
use catalog::{Genre, Movie, WatchProvider};
use colored::Colorize;
use discovery::{ProviderLookup, StreamingProvider};
use game::{GameSession, Player, RollOutcome, Winner, MOVIES_PER_PLAYER};

/// Overview text is cut to this many characters in lists
const OVERVIEW_WIDTH: usize = 90;

pub fn header(text: &str) {
    println!("\n{}", text.bold().blue());
}

pub fn player_label(player: Player) -> colored::ColoredString {
    match player {
        Player::One => player.to_string().magenta().bold(),
        Player::Two => player.to_string().cyan().bold(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

pub fn provider_names(providers: &[WatchProvider]) -> String {
    providers
        .iter()
        .map(|p| p.provider_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per movie, with picks marked by who made them
pub fn movie_list(movies: &[Movie], session: Option<&GameSession>, lookup: &ProviderLookup) {
    if movies.is_empty() {
        println!("  {}", "No movies. Try another decade or a search.".yellow());
        return;
    }

    for (i, movie) in movies.iter().enumerate() {
        let marker = session
            .and_then(|s| {
                [Player::One, Player::Two]
                    .into_iter()
                    .find(|&p| s.selection(p).contains(movie.id))
            })
            .map(|p| format!("[P{}]", p.number()))
            .unwrap_or_else(|| "    ".to_string());

        println!(
            "{:>3}. {} {} {}",
            (i + 1).to_string().green(),
            marker.bold(),
            movie.to_string().bold(),
            format!("{:.1}★", movie.star_rating()).yellow()
        );
        if !movie.overview.is_empty() {
            println!("        {}", truncate(&movie.overview, OVERVIEW_WIDTH).dimmed());
        }
        let providers = lookup.get(movie.id);
        if !providers.is_empty() {
            println!("        {} {}", "Streaming on:".cyan(), provider_names(providers));
        }
    }
}

/// Both players' picks with their board positions
pub fn board(session: &GameSession) {
    header("The board");
    for player in [Player::One, Player::Two] {
        println!("  {}", player_label(player));
        for (slot, movie) in session.selection(player).movies().iter().enumerate() {
            println!(
                "    {} {}",
                format!("{}.", player.first_position() + slot).green().bold(),
                movie
            );
        }
        let missing = MOVIES_PER_PLAYER.saturating_sub(session.selection(player).len());
        for _ in 0..missing {
            println!("    {}", "-".dimmed());
        }
    }
}

pub fn roll(outcome: &RollOutcome, history: &[u8]) {
    let rolls = history
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "  {} rolled {}   {}",
        player_label(outcome.rolled_by),
        outcome.value.to_string().bold().yellow(),
        format!("[{rolls}]").dimmed()
    );
}

pub fn winner(winner: &Winner, providers: &[WatchProvider]) {
    println!();
    println!(
        "{} {} came up twice!",
        "🎲".bold(),
        winner.number.to_string().bold().yellow()
    );
    println!(
        "{} {} {}",
        "Tonight you're watching".bold().green(),
        winner.movie.to_string().bold(),
        format!("({}'s pick)", winner.owner).dimmed()
    );
    if !winner.movie.overview.is_empty() {
        println!("  {}", winner.movie.overview);
    }
    if !providers.is_empty() {
        println!("  {} {}", "Streaming on:".cyan(), provider_names(providers));
    }
}

pub fn streaming_providers(providers: &[StreamingProvider], selected: &[u32]) {
    for provider in providers {
        let mark = if selected.contains(&provider.id) {
            "✓".green().to_string()
        } else {
            " ".to_string()
        };
        let logo = provider_logo_url(Some(provider.logo_path), LogoSize::default()).unwrap_or_default();
        println!(
            "  {} {:>4}  {:<14} {}",
            mark,
            provider.id.to_string().green(),
            provider.name.bold(),
            logo.dimmed()
        );
    }
}

pub fn watch_providers(providers: &[WatchProvider]) {
    for provider in providers {
        println!(
            "  {:>5}  {}",
            provider.provider_id.to_string().green(),
            provider.provider_name
        );
    }
}

pub fn genres(genres: &[Genre]) {
    for genre in genres {
        println!("  {:>6}  {}", genre.id.to_string().green(), genre.name);
    }
}
