//! # ollama-models
//!
//! Command-line front end: resolves the server address, fetches the model
//! list once, and prints it as label/value pairs.

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

use cli::{Args, Commands, ListArgs};
use ollama_models::core;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        run::run_completions(shell);
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(args.base_url.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match &args.command {
        Some(Commands::Config) => run::run_config(&config),
        Some(Commands::List(list)) => list_or_exit(&config, list).await,
        Some(Commands::Completions { .. }) => {}
        None => list_or_exit(&config, &ListArgs::default()).await,
    }
    Ok(())
}

async fn list_or_exit(config: &core::config::Config, list: &ListArgs) {
    if let Err(e) = run::run_list(config, list).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
