mod display;
mod play;

use anyhow::{Context, Result};
use catalog::config::DEFAULT_BASE_URL;
use catalog::{ClientConfig, ProviderId, TmdbClient};
use clap::{Parser, Subcommand};
use colored::Colorize;
use discovery::{
    resolve_provider, Decade, DiscoveryConfig, DiscoveryEngine, DiscoveryQuery, ProviderLookup,
    POPULAR_STREAMING_PROVIDERS,
};
use game::{roll_until_win, Player, RandomDice, MOVIES_PER_PLAYER};

/// What To Watch - roll dice to settle movie night
#[derive(Parser)]
#[command(name = "what-to-watch")]
#[command(about = "Two players pick three movies each, the dice pick the winner", long_about = None)]
struct Cli {
    /// TMDB API read access token
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Catalog API base URL
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Watch region for streaming providers
    #[arg(long, default_value = "US", global = true)]
    region: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in this terminal
    Play {
        /// Decade to browse: 2020s, 2010s, 2000s, 1990s, 1980s, 1970s or all
        #[arg(long, default_value = "1990s")]
        decade: Decade,

        /// Only show movies on this service (name or TMDB id, repeatable)
        #[arg(long = "provider", value_parser = resolve_provider)]
        providers: Vec<ProviderId>,

        /// Seed for the dice and the discovery shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a random sample of discovered movies
    Discover {
        #[arg(long, default_value = "1990s")]
        decade: Decade,

        #[arg(long = "provider", value_parser = resolve_provider)]
        providers: Vec<ProviderId>,

        /// Number of movies to print
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Look up where each movie is streaming
        #[arg(long)]
        with_providers: bool,
    },

    /// Search by title, movies from the decade first
    Search {
        query: String,

        #[arg(long, default_value = "all")]
        decade: Decade,
    },

    /// List streaming providers
    Providers {
        /// Every provider the catalog knows for the region, not just the curated ones
        #[arg(long)]
        all: bool,
    },

    /// List movie genres
    Genres,

    /// Roll until a number repeats (no network needed)
    Roll {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing, quieter during interactive play
    let default_filter = match cli.command {
        Commands::Play { .. } => "warn",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Play {
            decade,
            providers,
            seed,
        } => {
            let mut engine = build_engine(&cli)?;
            if let Some(seed) = seed {
                engine = engine.with_seed(*seed);
            }
            let query = DiscoveryQuery::new(*decade).with_providers(providers.iter().copied());
            play::run(&engine, query, *seed).await?
        }
        Commands::Discover {
            decade,
            providers,
            limit,
            with_providers,
        } => {
            let query = DiscoveryQuery::new(*decade).with_providers(providers.iter().copied());
            handle_discover(&cli, query, *limit, *with_providers).await?
        }
        Commands::Search { query, decade } => handle_search(&cli, query, *decade).await?,
        Commands::Providers { all } => handle_providers(&cli, *all).await?,
        Commands::Genres => handle_genres(&cli).await?,
        Commands::Roll { seed } => handle_roll(*seed),
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<TmdbClient> {
    let config = ClientConfig::new(cli.api_key.clone().unwrap_or_default()).with_base_url(&cli.base_url);
    TmdbClient::new(config).context("Failed to create catalog client")
}

fn build_engine(cli: &Cli) -> Result<DiscoveryEngine<TmdbClient>> {
    let config = DiscoveryConfig::default().with_region(&cli.region);
    Ok(DiscoveryEngine::new(build_client(cli)?).with_config(config))
}

/// Handle the 'discover' command
async fn handle_discover(
    cli: &Cli,
    query: DiscoveryQuery,
    limit: usize,
    with_providers: bool,
) -> Result<()> {
    let engine = build_engine(cli)?;
    let result = engine
        .discover(&query)
        .await
        .context("Failed to discover movies")?;

    let mut movies = result.movies;
    movies.truncate(limit);

    let mut lookup = ProviderLookup::new();
    if with_providers {
        engine.enrich_providers(&movies, &mut lookup).await;
    }

    let title = if result.source == discovery::ResultSource::FallbackSearch {
        format!("{} movies (search fallback):", query.decade)
    } else {
        format!("{} movies:", query.decade)
    };
    display::header(&title);
    display::movie_list(&movies, None, &lookup);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(cli: &Cli, text: &str, decade: Decade) -> Result<()> {
    let engine = build_engine(cli)?;
    let movies = engine
        .search(text, decade)
        .await
        .with_context(|| format!("Search for '{text}' failed"))?;

    display::header(&format!("Search results for '{text}':"));
    display::movie_list(&movies, None, &ProviderLookup::new());
    Ok(())
}

/// Handle the 'providers' command
async fn handle_providers(cli: &Cli, all: bool) -> Result<()> {
    if !all {
        display::header("Streaming providers:");
        display::streaming_providers(&POPULAR_STREAMING_PROVIDERS, &[]);
        return Ok(());
    }

    let client = build_client(cli)?;
    let mut response = client
        .all_watch_providers(&cli.region)
        .await
        .with_context(|| format!("Failed to list providers for {}", cli.region))?;
    response.results.sort_by_key(|p| p.display_priority);

    display::header(&format!("Providers in {}:", cli.region));
    display::watch_providers(&response.results);
    Ok(())
}

/// Handle the 'genres' command
async fn handle_genres(cli: &Cli) -> Result<()> {
    let client = build_client(cli)?;
    let response = client.genres().await.context("Failed to list genres")?;

    display::header("Genres:");
    display::genres(&response.genres);
    Ok(())
}

/// Handle the 'roll' command
fn handle_roll(seed: Option<u64>) {
    let mut dice = match seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::new(),
    };
    let (rolls, winner) = roll_until_win(&mut dice);

    let sequence = rolls
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Rolls: {}", sequence.bold());

    let position = winner as usize;
    let (owner, pick) = if position <= MOVIES_PER_PLAYER {
        (Player::One, position)
    } else {
        (Player::Two, position - MOVIES_PER_PLAYER)
    };
    println!(
        "{} wins after {} rolls: {}'s pick #{}",
        position.to_string().bold().green(),
        rolls.len(),
        owner,
        pick
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "what-to-watch",
            "play",
            "--decade",
            "80s",
            "--provider",
            "netflix",
            "--provider",
            "15",
            "--seed",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Play {
                decade,
                providers,
                seed,
            } => {
                assert_eq!(decade, Decade::Eighties);
                assert_eq!(providers, vec![8, 15]);
                assert_eq!(seed, Some(3));
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_rejects_unknown_decade() {
        assert!(Cli::try_parse_from(["what-to-watch", "discover", "--decade", "1920s"]).is_err());
    }

    #[test]
    fn test_global_region() {
        let cli = Cli::try_parse_from(["what-to-watch", "providers", "--all", "--region", "GB"]).unwrap();
        assert_eq!(cli.region, "GB");
        assert!(matches!(cli.command, Commands::Providers { all: true }));
    }
}
