#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod logger;
