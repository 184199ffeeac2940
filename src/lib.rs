pub mod config;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use config::{
    resolve_port, resolve_port_detailed, resolve_port_with, PortSource, ResolvedPort,
    DEFAULT_PORT, PORT_ENV_VAR,
};
#[cfg(feature = "cli")]
pub use utils::error::{AppError, Result};
