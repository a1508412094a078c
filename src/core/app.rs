//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every request, e.g. `ollama-models/0.1.0`.
pub fn user_agent() -> String {
    format!("{}/{}", NAME, VERSION)
}
