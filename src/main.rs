use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordsplit::config::{Config, DEFAULT_INPUT};

/// Split text into words and punctuation, one token per line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file path; `.pdf` and `.epub` are decoded as documents, anything
    /// else is read as UTF-8 text
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file path, appended to (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable test mode
    #[arg(long)]
    test: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output.into(),
            test_mode: cli.test,
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr; stdout may be carrying the token stream.
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = wordsplit::run(&Config::from(cli)) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
