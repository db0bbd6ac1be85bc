//! Command-line interface for the Swedish flash-card builder.
//!
//! Reads a word list, looks each headword up on the Swedish Wiktionary,
//! and writes the extracted inflection forms as flash-card lines.

use clap::{CommandFactory, Parser};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, debug, error, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use svocab_rs::progress::{ProgressCallback, ProgressUpdate};
use svocab_rs::{build_deck, error::Result, parse_word_list, write_deck};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swedish Wiktionary flash-card builder", long_about = None)]
struct Cli {
    /// Path to the word list to look up
    #[arg(short = 'w', long = "words")]
    words: Option<PathBuf>,

    /// Where the generated flash cards are written
    #[arg(short, long, default_value = "data/flash-cards.csv")]
    out: PathBuf,

    /// Set verbosity level (use -v, -vv, or -vvv for increasing verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Sets up logging based on verbosity level.
fn setup_logging(verbose: u8) {
    let log_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter(None, log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Creates a progress callback driving the lookup progress bar.
fn create_progress_callback(bar: ProgressBar) -> ProgressCallback {
    Box::new(move |update: ProgressUpdate| {
        bar.set_position(update.current_item);
        match update.message {
            Some(message) => bar.set_message(message),
            None => bar.finish_and_clear(),
        }
    })
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let Some(words_path) = cli.words else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let raw = match fs::read_to_string(&words_path) {
        Ok(raw) => raw,
        Err(e) => {
            error!("There was a problem reading {}: {}", words_path.display(), e);
            eprintln!(
                "{}",
                format!("Error reading {}: {}", words_path.display(), e).red()
            );
            std::process::exit(1);
        }
    };

    let entries = match parse_word_list(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Invalid word list {}: {}", words_path.display(), e);
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };

    info!("Looking up {} entries...", entries.len());
    let start = Instant::now();

    let bar = ProgressBar::new(entries.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:>12.cyan.bold} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    bar.set_prefix("Looking up");
    let callback = create_progress_callback(bar.clone());

    let client = reqwest::Client::new();
    let deck = match build_deck(&client, &entries, Some(callback)).await {
        Ok(deck) => deck,
        Err(e) => {
            bar.abandon();
            error!("Lookup failed: {}", e);
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };
    debug!(
        "Looked up {} entries in {:?}",
        entries.len(),
        start.elapsed()
    );

    if let Err(e) = write_deck(&cli.out, &deck) {
        error!("Error opening {}: {}", cli.out.display(), e);
        eprintln!(
            "{}",
            format!("Error writing {}: {}", cli.out.display(), e).red()
        );
        std::process::exit(1);
    }

    println!(
        "{}",
        format!(
            "Wrote {} flash-card blocks to {}",
            deck.len(),
            cli.out.display()
        )
        .green()
    );
    Ok(())
}
