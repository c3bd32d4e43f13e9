mod cli;
mod commands;
mod format;
mod output;

use clap::Parser;
use commands::AppContext;
use linkcollection::{config, error::Result, LinkStore};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; RUST_LOG still wins when set
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| cfg.resolve_data_dir());
    log::debug!("Using data directory {:?}", data_dir);

    let store = LinkStore::open(data_dir);
    let ctx = AppContext {
        store: &store,
        config: &cfg,
    };

    cli::handle_args(args, &ctx)?;

    Ok(())
}
