//! Arkora CLI
//!
//! Command-line interface for previewing and scripting board name
//! resolution: the same decisions the board picker makes, from a terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::fs;
use std::path::PathBuf;

use arkora::resolver::Resolution;
use arkora::{BoardResolver, Config, distance, slug};

#[derive(Parser)]
#[command(name = "arkora")]
#[command(
    author,
    version,
    about = "Resolve free-text topic names to canonical Arkora board slugs"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a topic name against a set of existing boards
    Resolve {
        /// Free-text topic input
        input: String,

        /// Existing board slugs (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        boards: Option<Vec<String>>,

        /// File with existing board slugs, one per line
        #[arg(long)]
        boards_file: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a topic name into a slug without resolving it
    Normalize {
        /// Free-text topic input
        input: String,
    },

    /// Show the display label for a board slug
    Label {
        /// Board slug
        slug: String,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compute the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },

    /// List the effective synonym table
    Synonyms {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            input,
            boards,
            boards_file,
            config,
            json,
        } => {
            let resolver = load_resolver(config)?;
            let existing = collect_boards(boards, boards_file)?;
            let resolved = resolver.resolve_detailed(&input, &existing);

            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
                return Ok(());
            }

            let how = match &resolved.resolution {
                Resolution::Synonym => "synonym redirect".to_string(),
                Resolution::Exact => "existing board".to_string(),
                Resolution::Fuzzy { distance } => {
                    format!("typo match, distance {distance}")
                }
                Resolution::New => "new board".to_string(),
            };

            println!(
                "{} {}",
                resolved.slug.green().bold(),
                format!("({how})").dimmed()
            );
            println!("  label: {}", resolver.label(&resolved.slug).cyan());
        }

        Commands::Normalize { input } => {
            println!("{}", slug::normalize(&input));
        }

        Commands::Label { slug, config } => {
            let resolver = load_resolver(config)?;
            println!("{}", resolver.label(&slug));
        }

        Commands::Distance { a, b } => {
            println!("{}", distance::levenshtein(&a, &b));
        }

        Commands::Synonyms { config } => {
            let resolver = load_resolver(config)?;
            println!("{}", "➤ Synonym table".cyan().bold());
            for (alias, canonical) in resolver.synonym_entries() {
                println!("  {} -> {}", alias.dimmed(), canonical.green());
            }
        }
    }

    Ok(())
}

/// Build a resolver from an explicit config path, a discovered `arkora.toml`,
/// or the built-in tables when neither exists.
fn load_resolver(config: Option<PathBuf>) -> Result<BoardResolver> {
    let config_path = match config {
        Some(p) => Some(p),
        None => {
            let cwd = env::current_dir().context("Failed to determine current directory")?;
            Config::find_config(&cwd).ok()
        }
    };

    match config_path {
        Some(path) => {
            let config = Config::load(&path)?;
            Ok(BoardResolver::with_config(&config))
        }
        None => Ok(BoardResolver::new()),
    }
}

/// Merge `--boards` and `--boards-file` into one existing-slug snapshot.
fn collect_boards(
    boards: Option<Vec<String>>,
    boards_file: Option<PathBuf>,
) -> Result<Vec<String>> {
    let mut existing = boards.unwrap_or_default();

    if let Some(path) = boards_file {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read boards file: {}", path.display()))?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            existing.push(line.to_string());
        }
    }

    Ok(existing)
}
