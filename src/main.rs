//! Jivaro - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs one command against a
//! block trie built from a dictionary file.

use clap::{Parser, Subcommand};
use jivaro_lib::alphabet::Alphabet;
use jivaro_lib::config::{ConfigLoader, JivaroConfig, LogConfig, ENV_PREFIX};
use jivaro_lib::data_structures::BlockTrie;
use jivaro_lib::dictionary::{self, Dictionary};
use jivaro_lib::error::{
    ErrorContext, ErrorReporter, JivaroError, JivaroResult, TracingErrorReporter,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Jivaro.
#[derive(Parser, Debug)]
#[clap(name = "jivaro", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a dictionary and print trie statistics as JSON
    Build {
        /// Path to the dictionary file
        #[clap(short, long, value_parser)]
        dictionary: PathBuf,

        /// Store keys last byte first
        #[clap(short, long)]
        reverse: bool,
    },

    /// Load a dictionary and look up keys in it
    Lookup {
        /// Path to the dictionary file
        #[clap(short, long, value_parser)]
        dictionary: PathBuf,

        /// Store and look up keys last byte first
        #[clap(short, long)]
        reverse: bool,

        /// Keys to look up
        #[clap(required = true)]
        keys: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays machine readable.
fn init_logging(log: &LogConfig) -> JivaroResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| JivaroError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configured alphabet and loads a dictionary into it.
fn load(config: &JivaroConfig, path: &Path, reverse: bool) -> JivaroResult<(BlockTrie, Alphabet)> {
    let (mut trie, alphabet) = jivaro_lib::build_trie(config)?;
    let entries = Dictionary::open(path)?;
    dictionary::load_into(&mut trie, &alphabet, entries, reverse)?;
    Ok((trie, alphabet))
}

fn run(command: Command, config: &JivaroConfig) -> JivaroResult<()> {
    match command {
        Command::Build {
            dictionary,
            reverse,
        } => {
            info!("Building trie from {:?}", dictionary);
            let (trie, _) = load(config, &dictionary, reverse)?;

            println!("{}", serde_json::to_string_pretty(&trie.stats())?);
            trie.destroy();
            Ok(())
        }
        Command::Lookup {
            dictionary,
            reverse,
            keys,
        } => {
            let (trie, alphabet) = load(config, &dictionary, reverse)?;

            for key in keys {
                let value = match alphabet.encode(key.as_bytes()) {
                    Ok(symbols) if reverse => trie.defined_reverse(&symbols),
                    Ok(symbols) => trie.defined(&symbols),
                    Err(e) => {
                        warn!(key = %key, "Key cannot be in the trie: {}", e);
                        None
                    }
                };

                match value {
                    Some(value) => println!("{key}\t{value}"),
                    None => println!("{key}\t-"),
                }
            }

            trie.destroy();
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = JivaroConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| JivaroError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> JivaroResult<()> {
    let args = <Args as clap::Parser>::parse();
    let reporter = TracingErrorReporter;

    let config = match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            reporter.report(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    let component = match &args.command {
        Command::Build { .. } => "build",
        Command::Lookup { .. } => "lookup",
        Command::Validate => "validate",
        Command::GenConfig { .. } => "gen-config",
    };

    if let Err(e) = run(args.command, &config) {
        reporter.report(&ErrorContext::new(e, component));
        process::exit(1);
    }

    Ok(())
}
