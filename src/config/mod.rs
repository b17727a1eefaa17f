// Configuration module entry point
// Validates the process environment once at startup and exposes the
// resulting immutable configuration.

pub mod env;
pub mod port;

use std::collections::HashMap;

// Re-export public types
pub use env::{required_non_empty_string, EnvVarError};
pub use port::{resolve_port, PortError, DEFAULT_PORT};

/// Required database path variable
const OPENCODE_DB_PATH: &str = "OPENCODE_DB_PATH";

/// Runtime configuration, constructed once at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub opencode_db_path: String,
}

impl Config {
    /// Load configuration from the real process environment.
    ///
    /// The process environment is bound here, at the outermost boundary
    /// only, so everything below stays testable with injected mappings.
    pub fn load() -> Result<Self, EnvVarError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(&env)
    }

    /// Load configuration from an explicit environment mapping.
    ///
    /// Fails fast on the first invalid field; there is no recovery path
    /// for configuration errors, the caller is expected to exit.
    pub fn load_from(env: &HashMap<String, String>) -> Result<Self, EnvVarError> {
        let opencode_db_path = required_non_empty_string(env, OPENCODE_DB_PATH)?;

        Ok(Self { opencode_db_path })
    }
}
