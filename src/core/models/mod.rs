//! Model discovery and display formatting.

mod error;
mod fetch;
mod info;
mod report;

pub use error::ListError;
pub use fetch::{OllamaClient, filter_pairs, list_models, list_models_or_empty, normalize_base_url};
pub use info::{DisplayPair, ModelEntry, TagsResponse};
pub use report::{ErrorReporter, LogReporter};
