use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};

use chaff::config::Config;
use chaff::models::ScoredAccount;
use chaff::output::terminal;
use chaff::query::{self, CategoryFilter, QueryState};
use chaff::scoring;
use chaff::signals::SignalFeatures;
use chaff::summary;

/// Chaff: suspicious follower scoring.
///
/// Scores accounts from per-account signal features, classifies them as
/// Genuine, Suspicious or Fake, and lists, filters and explains the results.
#[derive(Parser)]
#[command(name = "chaff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single feature vector (each value 0-100)
    Score {
        #[arg(long)]
        follower_ratio: f64,

        #[arg(long)]
        engagement_rate: f64,

        #[arg(long)]
        posting_frequency: f64,

        #[arg(long)]
        username_pattern: f64,

        #[arg(long, default_value = "0")]
        profile_completeness: f64,
    },

    /// List scored accounts with search, category filter and pagination
    Accounts {
        /// JSON dataset of raw account records (default: built-in sample)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Case-insensitive username search
        #[arg(long, default_value = "")]
        search: String,

        /// all | genuine | suspicious | fake
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Page number (1-based, clamped to the last page)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Results per page (default: CHAFF_PAGE_SIZE or 4)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show category counts, flagged accounts and the score distribution
    Summary {
        /// JSON dataset of raw account records (default: built-in sample)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Explain how one account's score was built
    Explain {
        /// The username to explain
        username: String,

        /// JSON dataset of raw account records (default: built-in sample)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Show the active feature weights
    Weights,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chaff=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Score {
            follower_ratio,
            engagement_rate,
            posting_frequency,
            username_pattern,
            profile_completeness,
        } => {
            config.require_valid_weights()?;
            let features = SignalFeatures::new(
                follower_ratio,
                engagement_rate,
                posting_frequency,
                username_pattern,
                profile_completeness,
            );
            let explanation = scoring::explain(&features, &config.weights)?;
            terminal::display_explanation("feature vector", &explanation);
        }

        Commands::Accounts {
            input,
            search,
            category,
            page,
            page_size,
        } => {
            let accounts = load_scored(&config, input)?;
            let state = QueryState::new(page_size.unwrap_or(config.page_size))?
                .with_search(search)
                .with_category(category)
                .with_page(page);
            let result = query::query(&accounts, &state);
            debug!(
                matches = result.total_matches,
                page = result.page_number,
                total_pages = result.total_pages,
                "Query served"
            );
            terminal::display_page(&result);
        }

        Commands::Summary { input } => {
            let accounts = load_scored(&config, input)?;
            let counts = summary::CategoryCounts::from_accounts(&accounts);
            let flagged = summary::flagged_accounts(&accounts);
            let bins = summary::score_histogram(&accounts);
            terminal::display_summary(&counts, &flagged, &bins);
        }

        Commands::Explain { username, input } => {
            config.require_valid_weights()?;
            let features = load_features(&config, input)?;
            let account_features = chaff::dataset::find_features(&features, &username)
                .with_context(|| format!("No account named `{username}` in the dataset"))?;
            let explanation = scoring::explain(account_features, &config.weights)?;
            terminal::display_explanation(username.trim(), &explanation);
        }

        Commands::Weights => match config.weights.normalized() {
            Ok(shares) => terminal::display_weights(&config.weights, &shares),
            Err(e) => {
                println!("{} {}", "Configuration error:".red().bold(), e);
                println!("Scoring is disabled until CHAFF_WEIGHTS is fixed.");
            }
        },
    }

    Ok(())
}

/// Load (username, features) pairs from --input, CHAFF_DATASET, or the built-in sample.
fn load_features(config: &Config, input: Option<PathBuf>) -> Result<Vec<(String, SignalFeatures)>> {
    match input.or_else(|| config.dataset.clone()) {
        Some(path) => {
            let records = chaff::dataset::load_records(&path)?;
            let policy = config.normalizer.build();
            Ok(chaff::dataset::normalize_records(&records, policy.as_ref()))
        }
        None => {
            info!("No dataset given, using the built-in sample");
            Ok(chaff::sample::sample_accounts())
        }
    }
}

/// Load and score a dataset in one pass.
fn load_scored(config: &Config, input: Option<PathBuf>) -> Result<Vec<ScoredAccount>> {
    config.require_valid_weights()?;
    let features = load_features(config, input)?;
    let accounts = scoring::score_all(
        features.iter().map(|(name, f)| (name.as_str(), f)),
        &config.weights,
    )?;
    Ok(accounts)
}
