use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tst_rs::{Config, TelPadCollection, WordCollection};

/// Word lookup and prefix completion over a ternary search tree
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Directory of rank/word dictionary files, overrides the config
    #[clap(short, long)]
    dict: Option<PathBuf>,

    /// Plain word list, one word per line
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// Return only the N best ranked completions
    #[clap(long)]
    cutoff: Option<usize>,

    /// Treat words and queries as telephone-pad encoded
    #[clap(long)]
    telpad: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List words starting with a prefix
    Complete { prefix: String },
    /// Check whether a word is stored
    Contains { word: String },
    /// List words matching a pattern, '?' matches any character
    Pattern { pattern: String },
    /// Print collection statistics
    Stats,
}

enum Index {
    Plain(WordCollection),
    TelPad(TelPadCollection),
}

fn load(args: &Args, config: &Config) -> anyhow::Result<Index> {
    let dict = args.dict.as_ref().or(config.dictionary_dir.as_ref());
    if args.telpad || config.telpad {
        let mut telpad = TelPadCollection::new();
        if let Some(dir) = dict {
            telpad
                .load_dir(dir)
                .with_context(|| format!("loading dictionary {}", dir.display()))?;
        }
        if let Some(path) = &args.words {
            telpad
                .load_word_list(path)
                .with_context(|| format!("reading word list {}", path.display()))?;
        }
        return Ok(Index::TelPad(telpad));
    }

    let mut collection = WordCollection::new();
    if let Some(dir) = dict {
        collection
            .load_dir(dir)
            .with_context(|| format!("loading dictionary {}", dir.display()))?;
    }
    if let Some(path) = &args.words {
        collection
            .load_word_list(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
    }
    Ok(Index::Plain(collection))
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    //logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let cutoff = args.cutoff.or(config.cutoff);
    let index = load(&args, &config)?;

    let lines = match (&args.command, &index) {
        (Command::Complete { prefix }, Index::Plain(words)) => words.prefix_search(prefix, cutoff)?,
        (Command::Complete { prefix }, Index::TelPad(telpad)) => {
            telpad.prefix_search(prefix, cutoff)?
        }
        (Command::Contains { word }, Index::Plain(words)) => vec![words.contains(word)?.to_string()],
        (Command::Contains { word }, Index::TelPad(telpad)) => {
            vec![telpad.contains(word)?.to_string()]
        }
        (Command::Pattern { pattern }, Index::Plain(words)) => words.pattern_match(pattern)?,
        (Command::Pattern { pattern }, Index::TelPad(telpad)) => {
            telpad.encoded().pattern_match(pattern)?
        }
        (Command::Stats, Index::Plain(words)) => vec![
            format!("words: {}", words.len()),
            format!("inserts: {}", words.tree().size()),
            format!("nodes: {}", words.tree().node_count()),
            format!("files: {}", words.files_ingested()),
        ],
        (Command::Stats, Index::TelPad(telpad)) => vec![
            format!("words: {}", telpad.len()),
            format!("encoded words: {}", telpad.encoded().len()),
            format!("nodes: {}", telpad.encoded().tree().node_count()),
        ],
    };

    info!(results = lines.len(), "query finished");
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
