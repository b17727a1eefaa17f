//! Environment variable validation module
//!
//! Reads a named key from an environment mapping and returns either a
//! trimmed non-empty string or a structured error describing what was
//! wrong with the lookup.

use std::collections::HashMap;
use std::fmt;

/// Structured failure for a single environment variable lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvVarError {
    /// The key is absent from the environment mapping
    Missing { key: String },
    /// The key is present but trims to an empty string
    Empty { key: String },
}

impl fmt::Display for EnvVarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "Missing required env var: {key}"),
            Self::Empty { key } => {
                write!(f, "Invalid env var: {key} must be a non-empty string")
            }
        }
    }
}

impl std::error::Error for EnvVarError {}

/// Look up `key` in `env` and require a non-empty value.
///
/// Leading and trailing whitespace is stripped; internal whitespace is
/// preserved. Pure with respect to its `env` argument.
pub fn required_non_empty_string(
    env: &HashMap<String, String>,
    key: &str,
) -> Result<String, EnvVarError> {
    let Some(raw) = env.get(key) else {
        return Err(EnvVarError::Missing {
            key: key.to_string(),
        });
    };

    let value = raw.trim();
    if value.is_empty() {
        return Err(EnvVarError::Empty {
            key: key.to_string(),
        });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(key: &str, value: &str) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert(key.to_string(), value.to_string());
        env
    }

    #[test]
    fn test_missing_key() {
        let env = HashMap::new();
        let result = required_non_empty_string(&env, "DB_PATH");
        assert_eq!(
            result,
            Err(EnvVarError::Missing {
                key: "DB_PATH".to_string()
            })
        );
    }

    #[test]
    fn test_empty_value() {
        let env = env_with("DB_PATH", "");
        let result = required_non_empty_string(&env, "DB_PATH");
        assert_eq!(
            result,
            Err(EnvVarError::Empty {
                key: "DB_PATH".to_string()
            })
        );
    }

    #[test]
    fn test_whitespace_only_value() {
        let env = env_with("DB_PATH", "   \t ");
        let result = required_non_empty_string(&env, "DB_PATH");
        assert_eq!(
            result,
            Err(EnvVarError::Empty {
                key: "DB_PATH".to_string()
            })
        );
    }

    #[test]
    fn test_value_is_trimmed() {
        let env = env_with("DB_PATH", "  /var/db/opencode.db  ");
        let result = required_non_empty_string(&env, "DB_PATH");
        assert_eq!(result, Ok("/var/db/opencode.db".to_string()));
    }

    #[test]
    fn test_internal_whitespace_preserved() {
        let env = env_with("DB_PATH", "  /var/my db/opencode.db ");
        let result = required_non_empty_string(&env, "DB_PATH");
        assert_eq!(result, Ok("/var/my db/opencode.db".to_string()));
    }

    #[test]
    fn test_error_messages() {
        let missing = EnvVarError::Missing {
            key: "OPENCODE_DB_PATH".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "Missing required env var: OPENCODE_DB_PATH"
        );

        let empty = EnvVarError::Empty {
            key: "OPENCODE_DB_PATH".to_string(),
        };
        assert_eq!(
            empty.to_string(),
            "Invalid env var: OPENCODE_DB_PATH must be a non-empty string"
        );
    }
}
