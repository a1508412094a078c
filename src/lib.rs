//! # ollama-models
//!
//! Lists the models installed on an Ollama server as `(label, value)` pairs
//! for selection widgets: `("llama3 (3.7 GB)", "llama3")`.
//!
//! ```no_run
//! # async fn demo() {
//! use ollama_models::core::models::{self, LogReporter, OllamaClient};
//!
//! let client = OllamaClient::new("http://localhost:11434/v1");
//! for pair in models::list_models_or_empty(&client, &LogReporter).await {
//!     println!("{} -> {}", pair.label, pair.value);
//! }
//! # }
//! ```

pub mod core;
