//! Descrambler - CLI
//!
//! One-shot, interactive, batch and benchmark modes over the embedded or a
//! user-supplied dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use descrambler::{
    commands::{
        BatchConfig, DescrambleConfig, MAX_INPUT_LEN, descramble_word, run_batch_file,
        run_benchmark, run_simple, sample_words,
    },
    output::{print_batch_result, print_benchmark_result, print_descramble_result},
    solver::{Descrambler, GeneratorType},
    wordlists::{WordBank, loader::load_from_dir},
};
use env_logger::Builder;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "descrambler",
    about = "Find every dictionary word hidden in a jumble of letters",
    version,
    author,
    disable_help_subcommand = true
)]
struct Cli {
    /// Letters to descramble; omit to start the interactive prompt.
    /// Put `--` first to descramble a subcommand name, e.g. `-- batch`
    word: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding 3-letter.txt through 7-letter.txt (default: embedded lists)
    #[arg(short, long, global = true, env = "DESCRAMBLER_WORDS")]
    words: Option<PathBuf>,

    /// Generator: positional (default) or multiset
    #[arg(short, long, global = true, default_value = "positional")]
    generator: String,

    /// Longest input attempted; longer inputs are refused
    #[arg(short = 'm', long, global = true, default_value_t = MAX_INPUT_LEN)]
    max_len: usize,

    /// Print one summary line per input instead of the full listing
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Descramble every line of a file in parallel
    Batch {
        /// File with one input per line
        file: PathBuf,
    },

    /// Scramble random dictionary words and check they are recovered
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible word selection and shuffling
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbosity: u8, quiet: bool) {
    let log_level = match (quiet, verbosity) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Load a word bank directory given with -w
///
/// A directory missing any of the five files is fatal.
fn load_bank(dir: &Path) -> Result<WordBank> {
    let bank = load_from_dir(dir)
        .with_context(|| format!("Failed to load word banks from {}", dir.display()))?;
    info!("Loaded {} words from {}", bank.len(), dir.display());
    Ok(bank)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let custom;
    let bank = match &cli.words {
        Some(dir) => {
            custom = load_bank(dir)?;
            &custom
        }
        None => WordBank::embedded(),
    };

    let generator = GeneratorType::from_name(&cli.generator);
    let descrambler = Descrambler::new(generator, bank);
    let verbose = !cli.quiet;
    let max_len = cli.max_len;

    match (cli.command, cli.word) {
        (Some(Commands::Batch { file }), _) => {
            run_batch_command(file, max_len, verbose, &descrambler)
        }
        (Some(Commands::Benchmark { count, seed }), _) => {
            run_benchmark_command(count, seed, verbose, &descrambler);
            Ok(())
        }
        (None, Some(word)) => run_descramble_command(word, max_len, verbose, &descrambler),
        (None, None) => run_simple(&descrambler, max_len, verbose),
    }
}

fn run_descramble_command(
    word: String,
    max_len: usize,
    verbose: bool,
    descrambler: &Descrambler<GeneratorType>,
) -> Result<()> {
    let mut config = DescrambleConfig::new(word);
    config.max_input_len = max_len;

    let result = descramble_word(config, descrambler)?;
    print_descramble_result(&result, verbose)?;
    Ok(())
}

fn run_batch_command(
    file: PathBuf,
    max_len: usize,
    verbose: bool,
    descrambler: &Descrambler<GeneratorType>,
) -> Result<()> {
    let mut config = BatchConfig::new(file);
    config.max_input_len = max_len;
    config.show_progress = verbose;

    let result = run_batch_file(&config, descrambler)?;
    print_batch_result(&result, verbose)?;
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    verbose: bool,
    descrambler: &Descrambler<GeneratorType>,
) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let targets = sample_words(descrambler, count, &mut rng);
    println!(
        "Running benchmark on {} scrambled words ({} generator)...",
        targets.len(),
        descrambler.generator().name()
    );

    let result = run_benchmark(descrambler, &targets, &mut rng, verbose);
    print_benchmark_result(&result);
}
