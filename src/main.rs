use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use keysieve::config::Config;
use keysieve::graph::RankParams;
use keysieve::{StopwordSet, VectorTable};

/// Keysieve: rank the keywords of a document by word-embedding centrality.
///
/// Words are linked by the cosine similarity of their vectors and ranked
/// with PageRank. The terms most similar to the rest of the document win.
#[derive(Parser)]
#[command(name = "keysieve", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the keywords of a document (reads stdin if no file is given)
    Rank {
        /// Document to analyze
        file: Option<PathBuf>,

        /// How many keywords to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,

        /// Print the full ranking as JSON instead of a chart
        #[arg(long)]
        json: bool,

        /// Word-vector file (overrides KEYSIEVE_VECTORS)
        #[arg(long)]
        vectors: Option<PathBuf>,

        /// Stopword language, or "none" (overrides KEYSIEVE_STOPWORDS)
        #[arg(long)]
        stopwords: Option<String>,

        /// Extra stopword; repeat for more
        #[arg(long = "stop")]
        extra_stopwords: Vec<String>,

        /// PageRank damping factor (overrides KEYSIEVE_DAMPING)
        #[arg(long)]
        damping: Option<f64>,
    },

    /// Load a word-vector file and show its vocabulary size and dimension
    Vectors {
        /// Word-vector file (defaults to KEYSIEVE_VECTORS)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keysieve=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            file,
            top,
            json,
            vectors,
            stopwords,
            extra_stopwords,
            damping,
        } => {
            let mut config = Config::load()?;
            if let Some(path) = vectors {
                config.vectors_path = path;
            }
            if let Some(language) = stopwords {
                config.stopword_language = language;
            }
            if let Some(damping) = damping {
                config.rank_params = RankParams {
                    damping,
                    ..config.rank_params
                };
            }

            let text = read_document(file.as_deref())?;
            let mut stops = config.stopwords()?;
            stops.extend(&extra_stopwords)?;

            if config.require_vectors().is_err() {
                // No embeddings available: fall back to co-occurrence ranking
                warn!(
                    path = %config.vectors_path.display(),
                    "Vector file missing, falling back to co-occurrence TextRank"
                );
                rank_without_vectors(&text, &stops, top, json)?;
                return Ok(());
            }

            let table = VectorTable::load(&config.vectors_path)?;
            let sieve = keysieve::Sieve::with_stopword_set(Box::new(table), stops)
                .with_params(config.rank_params)?;
            let keywords = sieve.sift(&text)?;
            info!(keywords = keywords.len(), "Ranked document");

            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                keysieve::output::terminal::display_keywords(&keywords, top);
            }
        }

        Commands::Vectors { file } => {
            let config = Config::load()?;
            let path = file.unwrap_or(config.vectors_path);
            let table = VectorTable::load(&path)?;
            keysieve::output::terminal::display_vector_stats(&path, &table);
        }
    }

    Ok(())
}

/// Read the whole document from a file, or from stdin when no path is given.
fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            Ok(text)
        }
    }
}

/// Degraded ranking used when no vector file is configured.
fn rank_without_vectors(text: &str, stops: &StopwordSet, top: usize, json: bool) -> Result<()> {
    let stop_list = stops.to_vec();
    let ranked = keysieve::baseline::cooccurrence_keywords(text, &stop_list, top)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!(
            "{}",
            "No vector file found; showing co-occurrence keywords instead.".yellow()
        );
        keysieve::output::terminal::display_baseline(&ranked);
        println!(
            "{}",
            "Tip: set KEYSIEVE_VECTORS to a GloVe/word2vec text file for embedding ranking."
                .dimmed()
        );
    }
    Ok(())
}
