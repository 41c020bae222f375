//! Word Tower - CLI
//!
//! Play the word tower puzzle in a TUI or plain text, or use the rule engine
//! directly: check pairs, score towers, ask for hints and search for the
//! tallest towers in the word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_tower::{
    commands::{check_pair, climb, hint_for, run_simple, run_survey, score_words},
    config::{EngineConfig, OracleConfig},
    engine::TowerEngine,
    lexicon::Lexicon,
    oracle,
    output::{print_check_result, print_climb, print_hint, print_score, print_survey},
};

#[derive(Parser)]
#[command(
    name = "word_tower",
    about = "Stack anagram-plus-one-letter words as high as you can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Ask the Datamuse API about words missing from the word list
    #[arg(long, global = true)]
    oracle: bool,

    /// Timeout for each oracle request
    #[arg(long, global = true, default_value = "2000")]
    oracle_timeout_ms: u64,

    /// Seed for starting words and hints (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Starting word (random if omitted)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Simple CLI mode (line-by-line game without the TUI)
    Simple {
        /// Starting word (random if omitted)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Check whether one word can be stacked on another
    Check {
        /// The word below
        base: String,
        /// The word to stack on it
        candidate: String,
    },

    /// Score a tower, bottom word first
    Score {
        #[arg(required = true)]
        words: Vec<String>,

        /// Seconds taken to build it (enables the speed bonus)
        #[arg(long)]
        seconds: Option<u64>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a hint for the next word of a tower
    Hint {
        #[arg(required = true)]
        words: Vec<String>,

        /// Hint style: starts_with, pattern, length, contains, definition, smart
        #[arg(short, long, default_value = "smart")]
        style: String,
    },

    /// Find the tallest tower reachable from a word
    Climb {
        word: String,
    },

    /// Tallest-tower heights for every starting word of a length
    Survey {
        /// Limit number of starting words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Starting word length
        #[arg(short, long, default_value = "3")]
        length: usize,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list selected by -w
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    match wordlist {
        "embedded" => Ok(Lexicon::embedded()),
        path => Lexicon::load_from_file(path)
            .with_context(|| format!("Could not load word list '{path}'")),
    }
}

fn engine_config(cli: &Cli) -> EngineConfig {
    EngineConfig {
        seed: cli.seed,
        oracle: OracleConfig {
            enabled: cli.oracle,
            timeout: Duration::from_millis(cli.oracle_timeout_ms),
            ..OracleConfig::default()
        },
        ..EngineConfig::default()
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let lexicon = Arc::new(load_lexicon(&cli.wordlist)?);
    let config = engine_config(&cli);
    let word_oracle = oracle::from_config(&config.oracle)?;
    info!(words = lexicon.len(), oracle = word_oracle.is_some(), "Word list ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { start: None });

    match command {
        Commands::Play { start } => {
            let engine = TowerEngine::new(lexicon, config).with_oracle(word_oracle);
            run_play_command(&engine, start.as_deref())
        }
        Commands::Simple { start } => {
            let engine = TowerEngine::new(lexicon, config).with_oracle(word_oracle);
            run_simple(&engine, start.as_deref())
        }
        Commands::Check { base, candidate } => {
            print_check_result(&check_pair(&base, &candidate)?);
            Ok(())
        }
        Commands::Score {
            words,
            seconds,
            json,
        } => run_score_command(&words, seconds, json, &config),
        Commands::Hint { words, style } => {
            let outcome = hint_for(
                &lexicon,
                word_oracle.as_deref(),
                &words,
                &style,
                cli.seed,
            )?;
            print_hint(&outcome);
            Ok(())
        }
        Commands::Climb { word } => {
            print_climb(&climb(&lexicon, &word, &config.scoring)?);
            Ok(())
        }
        Commands::Survey { limit, length } => {
            println!(
                "Surveying tallest towers from {length}-letter words in a {}-word list...",
                lexicon.len()
            );
            print_survey(&run_survey(&lexicon, length, limit, true)?);
            Ok(())
        }
    }
}

fn run_score_command(
    words: &[String],
    seconds: Option<u64>,
    json: bool,
    config: &EngineConfig,
) -> Result<()> {
    let score = score_words(words, seconds, &config.scoring)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        print_score(&score);
    }
    Ok(())
}

fn run_play_command(engine: &TowerEngine, start: Option<&str>) -> Result<()> {
    use word_tower::interactive::{App, run_tui};

    let app = App::new(engine, start)?;
    run_tui(app)
}
