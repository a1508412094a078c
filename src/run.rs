//! Application run modes: logger init, model listing, config display.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use ollama_models::core::app;
use ollama_models::core::config::Config;
use ollama_models::core::models::{self, DisplayPair, LogReporter, OllamaClient};

use crate::cli::{self, Args, ListArgs};

/// Initialize env_logger on stderr so stdout stays machine-readable.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

fn build_client(config: &Config) -> Result<OllamaClient, reqwest::Error> {
    let http = reqwest::Client::builder()
        .user_agent(app::user_agent())
        .build()?;
    Ok(OllamaClient::with_http(http, &config.base_url))
}

/// Fetch and print the model list.
///
/// Without `--strict` a failed fetch is logged and prints nothing, exit 0.
pub async fn run_list(config: &Config, list: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client(config)?;
    let pairs = if list.strict {
        client.list_models().await?
    } else {
        models::list_models_or_empty(&client, &LogReporter).await
    };

    let shown = models::filter_pairs(&pairs, list.query.as_deref().unwrap_or(""));
    if shown.is_empty() && !list.json {
        eprintln!("No models found.");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    render(&shown, list.json, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn render<W: Write>(pairs: &[&DisplayPair], json: bool, out: &mut W) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, pairs).map_err(io::Error::from)?;
        writeln!(out)
    } else {
        for pair in pairs {
            let (label, value) = pair.as_tuple();
            writeln!(out, "{}\t{}", label, value)?;
        }
        Ok(())
    }
}

/// Print the resolved base URL, its source, and the tags endpoint.
pub fn run_config(config: &Config) {
    let normalized = models::normalize_base_url(&config.base_url);
    println!("Base URL:  {} (from {})", config.base_url, config.source);
    if normalized != config.base_url {
        println!("Server:    {}", normalized);
    }
    println!("Endpoint:  {}/api/tags", normalized);
}

/// Write a completion script for `shell` to stdout.
pub fn run_completions(shell: Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
}
