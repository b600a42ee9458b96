//! CLI command definitions and handlers

mod analyze;
mod force;
mod io;

use anyhow::Result;
use caesar::cipher::{caesar_shift, Shift};
use caesar::config::UserConfig;
use clap::{Parser, Subcommand};
use console::style;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Parse and validate the classifier threshold (0.0-1.0)
fn parse_threshold(s: &str) -> Result<f64, String> {
    let n: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=1.0).contains(&n) {
        Err("threshold must be between 0.0 and 1.0".to_string())
    } else {
        Ok(n)
    }
}

/// Caesar - encrypt, decrypt or brute force a printable-ASCII Caesar cipher
#[derive(Parser, Debug)]
#[command(name = "caesar")]
#[command(
    version,
    about = "Encrypt, decrypt or brute force text using a simple Caesar cipher.",
    long_about = "Shifts every printable ASCII character (space through '~') by a fixed \
amount, wrapping around the 95-character alphabet. Other characters such as newlines \
pass through unchanged.\n\n\
`force` recovers plaintext without the shift by trying likely shifts in order of \
character frequency and checking each result against an English word list.",
    after_help = "\
Examples:
  echo 'a b c' | caesar encrypt -s 14        Encrypt stdin with shift 14
  caesar decrypt -s 14 -i secret.txt          Decrypt a file
  caesar force -i secret.txt -o plain.txt     Recover plaintext without the shift
  caesar analyze -i secret.txt --top 5        Show the most frequent characters"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input text
    Encrypt {
        /// Caesar shift value (-94 to 94), defaults to a random number between 1 and 93
        #[arg(long, short = 's', allow_hyphen_values = true)]
        shift: Option<Shift>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Decrypt input text that was encrypted with SHIFT
    Decrypt {
        /// Caesar shift value used for encryption (-94 to 94)
        #[arg(long, short = 's', allow_hyphen_values = true)]
        shift: Shift,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Brute force input text without knowing the shift
    #[command(after_help = "\
Examples:
  caesar force -i secret.txt                 Print the most likely plaintext
  caesar force -i secret.txt --json          JSON with the recovered shift
  caesar force --wordlist /usr/share/dict/words -i secret.txt")]
    Force {
        #[command(flatten)]
        io: IoArgs,

        /// Word list file, one word per line. The built-in list holds about
        /// 1800 common words; a full dictionary such as /usr/share/dict/words
        /// recognises text with rarer vocabulary
        #[arg(long, env = "CAESAR_WORDLIST")]
        wordlist: Option<PathBuf>,

        /// Share of dictionary words needed to accept a candidate (0.0-1.0)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Evaluate candidate shifts on all cores
        #[arg(long)]
        parallel: bool,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show character frequencies of the input
    Analyze {
        /// Input file, defaults to stdin
        #[arg(long, short = 'i')]
        input_file: Option<PathBuf>,

        /// Only show the N most frequent characters
        #[arg(long)]
        top: Option<usize>,
    },

    /// Manage configuration (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct IoArgs {
    /// Input file, defaults to stdin
    #[arg(long, short = 'i')]
    pub input_file: Option<PathBuf>,

    /// Output file, defaults to stdout
    #[arg(long, short = 'o')]
    pub output_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize config file with example settings
    Init,
    /// Show current config and paths
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encrypt { shift, io } => {
            let shift = match shift {
                Some(shift) => shift,
                None => {
                    let shift = random_shift()?;
                    eprintln!("{} {}", style("Shift:").bold(), shift);
                    shift
                }
            };
            info!("Encrypting with shift {}", shift);
            transform(&io, shift)
        }

        Commands::Decrypt { shift, io } => {
            info!("Decrypting with shift {}", shift);
            transform(&io, shift.inverse())
        }

        Commands::Force {
            io,
            wordlist,
            threshold,
            parallel,
            json,
        } => {
            let mut config = UserConfig::load();
            if wordlist.is_some() {
                config.classifier.wordlist = wordlist;
            }
            if threshold.is_some() {
                config.classifier.threshold = threshold;
            }
            if parallel {
                config.search.parallel = Some(true);
            }
            force::run(&config, &io, json)
        }

        Commands::Analyze { input_file, top } => {
            let text = io::read_input(input_file.as_deref())?;
            analyze::run(&text, top)
        }

        Commands::Config { action } => run_config_action(action),
    }
}

/// Random shift in 1..=93, as the original tool picked
fn random_shift() -> Result<Shift> {
    let n: i64 = rand::rng().random_range(1..=93);
    Ok(Shift::try_from(n)?)
}

fn transform(args: &IoArgs, shift: Shift) -> Result<()> {
    let input = io::read_input(args.input_file.as_deref())?;
    let output = caesar_shift(&input, shift);
    io::write_output(args.output_file.as_deref(), &output)
}

fn run_config_action(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = UserConfig::init_user_config()?;
            println!("✅ Config initialized at: {}", path.display());
            Ok(())
        }
        ConfigAction::Show => show_config(),
    }
}

fn show_config() -> Result<()> {
    let config = UserConfig::load();
    println!("📁 Config path:");
    if let Some(user_path) = UserConfig::user_config_path() {
        println!("  User: {} {}", user_path.display(), exists_marker(&user_path));
    }
    println!();
    println!("🔎 Classifier:");
    println!("  Word list: {}", config.wordlist_source());
    println!("  Threshold: {}", config.threshold());
    println!("  Parallel:  {}", config.parallel());
    Ok(())
}

fn exists_marker(path: &Path) -> &'static str {
    if path.exists() {
        "✓"
    } else {
        "(not found)"
    }
}
