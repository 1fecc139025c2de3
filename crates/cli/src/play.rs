//! The interactive two-player game.
//!
//! Both players share one terminal. Each picks three movies from a
//! discovered list (or from searches), then they take turns pressing Enter
//! to roll until a number comes up twice.

use crate::display::{self, player_label};
use anyhow::Result;
use catalog::{Movie, ProviderId, TmdbClient};
use colored::Colorize;
use discovery::{resolve_provider, Decade, DiscoveryEngine, DiscoveryQuery, ProviderLookup};
use game::{DiceRoller, GamePhase, GameSession, RandomDice, SelectionChange};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const HELP: &str = "\
  <n>             pick or un-pick movie n
  s <title>       search (movies from the current decade first)
  d               discover a fresh batch
  shuffle         reshuffle the current list
  decade <d>      switch decade: 2020s .. 1970s, or all
  p <provider>    toggle a streaming filter (netflix, hulu, 337, ...)
  clear           drop all of your picks
  done            lock in your three picks
  q               quit";

/// A line of player input during selection
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Toggle(usize),
    Search(String),
    Discover,
    Shuffle,
    Decade(Decade),
    Provider(ProviderId),
    Clear,
    Done,
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    if let Ok(n) = word.parse::<usize>() {
        return if n == 0 {
            Command::Invalid("Movies are numbered from 1".to_string())
        } else {
            Command::Toggle(n)
        };
    }

    match word.to_ascii_lowercase().as_str() {
        "s" | "search" if !rest.is_empty() => Command::Search(rest.to_string()),
        "s" | "search" => Command::Invalid("Usage: s <title>".to_string()),
        "d" | "discover" | "more" => Command::Discover,
        "shuffle" => Command::Shuffle,
        "decade" => match rest.parse::<Decade>() {
            Ok(decade) => Command::Decade(decade),
            Err(e) => Command::Invalid(e.to_string()),
        },
        "p" | "provider" => match resolve_provider(rest) {
            Ok(id) => Command::Provider(id),
            Err(e) => Command::Invalid(e.to_string()),
        },
        "clear" => Command::Clear,
        "done" | "ok" => Command::Done,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Invalid(format!("Unknown command '{line}' (type help)")),
    }
}

/// Line-based prompt over async stdin
struct Input {
    lines: Lines<BufReader<Stdin>>,
}

impl Input {
    fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// `None` on end of input
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}

/// Everything one game night needs
struct Table<'a> {
    engine: &'a DiscoveryEngine<TmdbClient>,
    query: DiscoveryQuery,
    movies: Vec<Movie>,
    lookup: ProviderLookup,
    session: GameSession,
    input: Input,
}

/// Play games until the players quit
pub async fn run(
    engine: &DiscoveryEngine<TmdbClient>,
    query: DiscoveryQuery,
    seed: Option<u64>,
) -> Result<()> {
    let mut dice = match seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::new(),
    };
    let mut table = Table {
        engine,
        query,
        movies: Vec::new(),
        lookup: ProviderLookup::new(),
        session: GameSession::new(),
        input: Input::stdin(),
    };

    display::header("🎬 What To Watch");
    println!("Each player picks three movies, then roll until a number repeats.");
    println!("Type {} at any prompt for commands.", "help".bold());

    loop {
        table.session.start()?;
        table.refresh().await;

        if !table.select_movies().await? {
            break;
        }
        display::board(&table.session);
        if !table.roll_for_winner(&mut dice).await? {
            break;
        }

        match table.input.ask("\nPlay again? [y/N] ").await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => table.session.reset(),
            _ => break,
        }
    }

    println!("Enjoy the movie! 🍿");
    Ok(())
}

impl Table<'_> {
    /// Fetch a fresh discovered list; failures leave an empty list
    async fn refresh(&mut self) {
        println!(
            "Finding {} movies{}...",
            self.query.decade.to_string().bold(),
            if self.query.has_streaming_filter() {
                " on your streaming services"
            } else {
                ""
            }
        );
        match self.engine.discover(&self.query).await {
            Ok(result) => {
                if result.is_fallback() {
                    println!("{}", "Discovery is unavailable, showing search results instead.".yellow());
                }
                self.movies = result.movies;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discovery failed");
                println!("{} {}", "Couldn't load movies:".red(), e);
                self.movies.clear();
            }
        }
        self.enrich().await;
    }

    async fn enrich(&mut self) {
        self.engine.enrich_providers(&self.movies, &mut self.lookup).await;
    }

    /// Returns `false` if the players quit
    async fn select_movies(&mut self) -> Result<bool> {
        let mut show_list = true;

        while let Some(player) = self.session.selecting_player() {
            if show_list {
                display::header(&format!(
                    "{} - {} movies, {} filter(s)",
                    self.query.decade,
                    self.movies.len(),
                    self.query.providers.ids().len()
                ));
                display::movie_list(&self.movies, Some(&self.session), &self.lookup);
                show_list = false;
            }

            let remaining = self.session.selection(player).remaining();
            let prompt = format!("{} ({} to pick) > ", player_label(player), remaining);
            let Some(line) = self.input.ask(&prompt).await? else {
                return Ok(false);
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Command::Toggle(n) => match self.movies.get(n - 1) {
                    Some(movie) => match self.session.toggle_movie(movie) {
                        Ok(SelectionChange::Added(slot)) => println!(
                            "  {} {} as #{}",
                            "Picked".green(),
                            movie,
                            player.first_position() + slot
                        ),
                        Ok(SelectionChange::Removed) => println!("  {} {}", "Dropped".yellow(), movie),
                        Ok(SelectionChange::Rejected) => {}
                        Err(e) => println!("  {}", e.to_string().red()),
                    },
                    None => println!("  {}", format!("There is no movie #{n}").red()),
                },
                Command::Search(text) => match self.engine.search(&text, self.query.decade).await {
                    Ok(movies) => {
                        self.movies = movies;
                        self.enrich().await;
                        show_list = true;
                    }
                    Err(e) => println!("  {} {}", "Search failed:".red(), e),
                },
                Command::Discover => {
                    self.refresh().await;
                    show_list = true;
                }
                Command::Shuffle => {
                    self.engine.shuffle(&mut self.movies);
                    show_list = true;
                }
                Command::Decade(decade) => {
                    self.query.decade = decade;
                    self.refresh().await;
                    show_list = true;
                }
                Command::Provider(id) => {
                    let on = self.query.providers.toggle(id);
                    let name = discovery::find_provider(id).map_or_else(|| id.to_string(), |p| p.name.to_string());
                    println!("  {} {}", if on { "Filtering by" } else { "No longer filtering by" }, name.bold());
                    self.refresh().await;
                    show_list = true;
                }
                Command::Clear => {
                    self.session.clear_selection()?;
                    show_list = true;
                }
                Command::Done => match self.session.confirm_selection() {
                    Ok(GamePhase::Player2Selecting) => {
                        println!("\n{} locked in. Pass the keyboard to {}!", player_label(player), player_label(player.other()));
                        show_list = true;
                    }
                    Ok(_) => {}
                    Err(e) => println!("  {}", e.to_string().red()),
                },
                Command::Help => println!("{HELP}"),
                Command::Quit => return Ok(false),
                Command::Invalid(message) => println!("  {}", message.red()),
            }
        }
        Ok(true)
    }

    /// Returns `false` if the players quit before a winner
    async fn roll_for_winner(&mut self, dice: &mut impl DiceRoller) -> Result<bool> {
        display::header("Roll the die! First number to come up twice wins.");
        loop {
            let prompt = format!(
                "{} - press Enter to roll (q to quit) ",
                player_label(self.session.current_player())
            );
            match self.input.ask(&prompt).await? {
                None => return Ok(false),
                Some(line) if line.trim().eq_ignore_ascii_case("q") => return Ok(false),
                Some(_) => {}
            }

            let outcome = self.session.roll(dice)?;
            display::roll(&outcome, self.session.rolls());

            if let Some(winner) = &outcome.winner {
                self.engine
                    .enrich_providers(std::slice::from_ref(&winner.movie), &mut self.lookup)
                    .await;
                display::winner(winner, self.lookup.get(winner.movie.id));
                return Ok(true);
            }
        }
    }
}
