//! Listener port resolution.
//!
//! The port is read from the `PORT` environment variable on every call and
//! falls back to [`DEFAULT_PORT`] when the variable is unset or empty. The
//! value is handed back as an opaque string: parsing and binding belong to the
//! caller.

#[cfg(feature = "cli")]
pub mod cli;

use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;

/// Environment variable consulted for the listener port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when [`PORT_ENV_VAR`] is unset or empty.
pub const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSource {
    Environment,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPort {
    pub port: String,
    pub source: PortSource,
}

/// Returns the port the service should bind to.
///
/// A non-empty `PORT` is returned verbatim, without trimming or validation.
pub fn resolve_port() -> String {
    resolve_port_with(|key| env::var_os(key))
}

/// Same as [`resolve_port`], reading the variable through `lookup` instead of
/// the process environment.
pub fn resolve_port_with<F>(lookup: F) -> String
where
    F: FnOnce(&str) -> Option<OsString>,
{
    resolve_from(lookup).port
}

/// Resolves the port and reports whether it came from the environment.
pub fn resolve_port_detailed() -> ResolvedPort {
    resolve_from(|key| env::var_os(key))
}

fn resolve_from<F>(lookup: F) -> ResolvedPort
where
    F: FnOnce(&str) -> Option<OsString>,
{
    // Unset and empty both take the default.
    match lookup(PORT_ENV_VAR) {
        Some(value) if !value.is_empty() => ResolvedPort {
            port: value.to_string_lossy().into_owned(),
            source: PortSource::Environment,
        },
        _ => ResolvedPort {
            port: DEFAULT_PORT.to_string(),
            source: PortSource::Default,
        },
    }
}
