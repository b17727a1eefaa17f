//! Listening port resolution module
//!
//! Resolves the listening port from the optional `PORT` environment
//! variable, applying the default and range validation.

use std::collections::HashMap;
use std::fmt;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// `PORT` was set but does not parse to an integer in [1, 65535]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortError {
    raw: String,
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid PORT: \"{}\". Must be a number between 1 and 65535.",
            self.raw
        )
    }
}

impl std::error::Error for PortError {}

/// Resolve the listening port from the environment mapping.
///
/// Unset → 3000. Set → base-10 integer in [1, 65535]. Surrounding
/// whitespace is tolerated, but trailing non-numeric characters
/// (e.g. `"8080abc"`) reject the whole value.
pub fn resolve_port(env: &HashMap<String, String>) -> Result<u16, PortError> {
    let Some(raw) = env.get("PORT") else {
        return Ok(DEFAULT_PORT);
    };

    let port = raw
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|p| (1..=65535).contains(p))
        .ok_or_else(|| PortError { raw: raw.clone() })?;

    // Range check above guarantees the cast cannot truncate
    Ok(u16::try_from(port).unwrap_or(u16::MAX))
}
