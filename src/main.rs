//! triehard CLI - prefix matching over a word list from the command line
//!
//! Loads a newline-separated word list, builds the trie in parallel and
//! answers prefix queries. Output is JSON by default so the binary can be
//! driven by other tools.

use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use triehard::{
    wordlist, Alphabet, BuildConfig, LiveQuery, MergeStrategy, ParallelBuilder, QueryEngine, Trie,
};

#[derive(Parser)]
#[command(name = "triehard")]
#[command(about = "Parallel trie-based prefix matching over word lists")]
#[command(version)]
struct Cli {
    /// Path to the word list (one word per line)
    #[arg(short, long)]
    words: PathBuf,

    /// Number of build workers (defaults to available parallelism)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// How partial tries are merged: sequential or tree
    #[arg(short, long)]
    merge: Option<MergeStrategy>,

    /// Characters accepted in words: unrestricted, ascii_alphabetic or ascii_lowercase
    #[arg(short, long)]
    alphabet: Option<Alphabet>,

    /// JSON config file (defaults to the user config directory if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// List every word starting with each prefix
    Query {
        /// Prefixes to search for
        #[arg(required = true)]
        prefixes: Vec<String>,
        /// Maximum number of matches to print per prefix
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Count the words starting with a prefix
    Count {
        /// The prefix
        prefix: String,
    },

    /// Read prefixes from stdin, one per line, narrowing as they extend
    Live {
        /// Maximum number of matches to print per prefix
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show build statistics
    Stats,

    /// Time a serial build against the parallel build
    Bench {
        /// Number of timed rounds per variant
        #[arg(short, long, default_value = "3")]
        rounds: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let words = wordlist::load(&cli.words)?;
    let builder = ParallelBuilder::new(config)?;

    match cli.command {
        Commands::Query { prefixes, limit } => {
            let trie = builder.build(&words)?;
            let engine = QueryEngine::new(&trie);
            let results: Vec<_> = prefixes
                .iter()
                .map(|prefix| {
                    let matches = engine.query(prefix);
                    serde_json::json!({
                        "prefix": prefix,
                        "count": matches.len(),
                        "matches": truncated(matches, limit)
                    })
                })
                .collect();
            output(&cli.format, &serde_json::json!({ "results": results }));
        }

        Commands::Count { prefix } => {
            let trie = builder.build(&words)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "prefix": prefix,
                    "count": trie.count_with_prefix(&prefix)
                }),
            );
        }

        Commands::Live { limit } => {
            let trie = builder.build(&words)?;
            let mut live = LiveQuery::new(QueryEngine::new(&trie));
            for line in std::io::stdin().lock().lines() {
                let prefix = line?;
                let matches = live.update(&prefix).to_vec();
                output(
                    &cli.format,
                    &serde_json::json!({
                        "prefix": prefix,
                        "count": matches.len(),
                        "matches": truncated(matches, Some(limit))
                    }),
                );
            }
        }

        Commands::Stats => {
            let (trie, report) = builder.build_with_report(&words)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "words_file": cli.words.display().to_string(),
                    "input_words": report.input_words,
                    "distinct_words": trie.len(),
                    "partitions": report.partitions,
                    "parallel": report.parallel,
                    "merge": report.merge,
                    "alphabet": trie.alphabet(),
                    "elapsed_ms": report.elapsed.as_secs_f64() * 1000.0
                }),
            );
        }

        Commands::Bench { rounds } => {
            let rounds = rounds.max(1);
            let alphabet = builder.config().alphabet;

            let mut serial_ms = Vec::with_capacity(rounds);
            let mut parallel_ms = Vec::with_capacity(rounds);
            for _ in 0..rounds {
                let start = Instant::now();
                let serial = Trie::from_words(&words, alphabet)?;
                serial_ms.push(start.elapsed().as_secs_f64() * 1000.0);

                let start = Instant::now();
                let parallel = builder.build(&words)?;
                parallel_ms.push(start.elapsed().as_secs_f64() * 1000.0);

                anyhow::ensure!(
                    serial == parallel,
                    "parallel build disagrees with serial build"
                );
            }
            output(
                &cli.format,
                &serde_json::json!({
                    "rounds": rounds,
                    "workers": builder.config().effective_workers()?,
                    "serial_ms": serial_ms,
                    "parallel_ms": parallel_ms,
                    "serial_best_ms": best(&serial_ms),
                    "parallel_best_ms": best(&parallel_ms)
                }),
            );
        }
    }

    Ok(())
}

/// Defaults, then config file, then environment, then flags
fn resolve_config(cli: &Cli) -> anyhow::Result<BuildConfig> {
    let mut config = BuildConfig::load_or_default(cli.config.as_deref())?.apply_env()?;
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }
    if let Some(merge) = cli.merge {
        config = config.with_merge(merge);
    }
    if let Some(alphabet) = cli.alphabet {
        config = config.with_alphabet(alphabet);
    }
    config.validate()?;
    tracing::debug!(?config, words = %cli.words.display(), "resolved configuration");
    Ok(config)
}

fn truncated(mut matches: Vec<String>, limit: Option<usize>) -> Vec<String> {
    if let Some(limit) = limit {
        matches.truncate(limit);
    }
    matches
}

fn best(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(f64::INFINITY, f64::min)
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", value);
        }
        OutputFormat::Text => {
            println!("{:#}", value);
        }
    }
}
