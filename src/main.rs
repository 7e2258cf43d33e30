//! runstate CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use runstate::commands::{run_clear, run_doc, run_get, run_incr, run_list, run_path};
use runstate::{CacheConfig, Cli, Commands, StateStore};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> runstate::Result<String> {
    let config = match &cli.cache_dir {
        Some(dir) => CacheConfig::new(dir),
        None => CacheConfig::from_env(),
    };
    let store = StateStore::new(&config);

    match &cli.command {
        Commands::Path(args) => run_path(args, &store),
        Commands::Get(args) => run_get(args, &store),
        Commands::Incr(args) => run_incr(args, &store),
        Commands::Doc(args) => run_doc(args, &store),
        Commands::Clear(args) => run_clear(args, &store),
        Commands::List => run_list(&store),
    }
}

/// Initialize logging to stderr. `RUST_LOG` wins when set; otherwise
/// `--verbose` raises the crate's level to debug.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "runstate=debug"
    } else {
        "runstate=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
