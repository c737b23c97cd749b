pub mod content;

#[cfg(feature = "server")]
pub mod config;
