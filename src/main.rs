//! Word Ladder - CLI
//!
//! Word ladder game with TUI and CLI modes, plus puzzle tooling.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use word_ladder::{
    commands::{find_ladder, generate_puzzles, run_benchmark, run_simple},
    core::{Dictionary, WORD_LENGTH, Word},
    ladder::GeneratorConfig,
    ladder::generator::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE},
    output::{print_benchmark_result, print_path_result, print_puzzles},
    wordlists::{
        GUESSES, SEEDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder game: change one letter at a time to reach the target word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Seed list file used to pick puzzles (default: embedded list)
    #[arg(long, global = true)]
    seeds: Option<PathBuf>,

    /// RNG seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Minimum shortest-ladder length for generated puzzles
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_DISTANCE)]
    min_steps: usize,

    /// Maximum shortest-ladder length for generated puzzles
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DISTANCE)]
    max_steps: usize,

    /// Start words tried before falling back to a fixed puzzle
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Find a shortest ladder between two words
    Path {
        /// Start word
        from: String,

        /// Target word
        to: String,
    },

    /// Generate puzzles with a reference solution
    Generate {
        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Benchmark puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would tear the TUI's alternate screen
    let default_filter = if matches!(command, Commands::Play) { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = generator_config(cli.min_steps, cli.max_steps, cli.attempts)?;
    let dictionary = load_dictionary(cli.guesses.as_ref(), cli.seeds.as_ref())?;
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play => run_play_command(&dictionary, config, rng),
        Commands::Simple => {
            run_simple(&dictionary, &config, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Path { from, to } => run_path_command(&dictionary, &from, &to),
        Commands::Generate { count } => {
            let puzzles = generate_puzzles(&dictionary, &config, count, &mut rng);
            print_puzzles(&puzzles);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Generating {count} puzzles...");
            let result = run_benchmark(&dictionary, &config, count, rng.random());
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn generator_config(min_steps: usize, max_steps: usize, attempts: usize) -> Result<GeneratorConfig> {
    if min_steps == 0 || min_steps > max_steps {
        bail!("Invalid step range {min_steps}..={max_steps}");
    }
    if attempts == 0 {
        bail!("--attempts must be at least 1");
    }

    Ok(GeneratorConfig {
        min_distance: min_steps,
        max_distance: max_steps,
        max_attempts: attempts,
    })
}

/// Load the guess and seed lists from files, or the embedded lists
fn load_dictionary(guesses: Option<&PathBuf>, seeds: Option<&PathBuf>) -> Result<Dictionary> {
    let guess_words = read_words(guesses, GUESSES)?;
    let seed_words = read_words(seeds, SEEDS)?;

    let dictionary = Dictionary::new(guess_words, seed_words).context("Invalid word lists")?;
    info!(
        "Loaded {} guesses and {} seeds",
        dictionary.len(),
        dictionary.seeds().len()
    );
    Ok(dictionary)
}

fn read_words(path: Option<&PathBuf>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path, WORD_LENGTH)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(words_from_slice(embedded)),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

fn run_path_command(dictionary: &Dictionary, from: &str, to: &str) -> Result<()> {
    let result = find_ladder(dictionary, from, to).map_err(|e| anyhow::anyhow!(e))?;
    print_path_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, config: GeneratorConfig, rng: StdRng) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let app = App::new(dictionary, config, rng);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_config_accepts_valid_flags() {
        let config = generator_config(3, 5, 10).unwrap();
        assert_eq!(config.min_distance, 3);
        assert_eq!(config.max_distance, 5);
        assert_eq!(config.max_attempts, 10);
    }

    #[test]
    fn generator_config_rejects_zero_attempts() {
        let err = generator_config(3, 5, 0).unwrap_err();
        assert!(err.to_string().contains("--attempts"));
    }

    #[test]
    fn generator_config_rejects_bad_step_range() {
        assert!(generator_config(0, 5, 10).is_err());
        assert!(generator_config(6, 5, 10).is_err());
    }
}
