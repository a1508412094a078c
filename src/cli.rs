//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  ollama-models                                  List installed models
  ollama-models list --query llama               Only models matching 'llama'
  ollama-models list --json                      Print pairs as JSON
  ollama-models --base-url http://gpu:11434/v1   Query another server
  ollama-models config                           Show the resolved base URL
  ollama-models completions bash                 Generate bash completions

ENVIRONMENT:
  OLLAMA_BASE_URL   Server root (default http://localhost:11434); read from .env too
  RUST_LOG          Log filter, overrides -v/-q
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "List models installed on an Ollama server",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ollama server root; a trailing /v1 path is ignored
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed models as "label<TAB>value" lines (default)
    List(ListArgs),
    /// Show the base URL that would be queried and where it came from
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(clap::Args, Default)]
pub struct ListArgs {
    /// Filter models by label or name
    #[arg(long)]
    pub query: Option<String>,

    /// Print a JSON array of {label, value} objects
    #[arg(long)]
    pub json: bool,

    /// Exit with an error instead of printing an empty list when the fetch fails
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ollama-models").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn no_subcommand_means_list() {
        let args = parse(&[]);
        assert!(args.command.is_none());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn list_flags_parse() {
        let args = parse(&["list", "--query", "llama", "--json", "--strict"]);
        match args.command {
            Some(Commands::List(list)) => {
                assert_eq!(list.query.as_deref(), Some("llama"));
                assert!(list.json);
                assert!(list.strict);
            }
            _ => panic!("expected list subcommand"),
        }
    }

    #[test]
    fn base_url_is_global() {
        let args = parse(&["config", "--base-url", "http://gpu:11434"]);
        assert_eq!(args.base_url.as_deref(), Some("http://gpu:11434"));
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(parse(&["-v"]).log_level(), "info");
        assert_eq!(parse(&["-vv"]).log_level(), "debug");
        assert_eq!(parse(&["-q", "-vv"]).log_level(), "error");
    }
}
