//! Shared types, error model, and configuration for refbuilder.
//!
//! This crate is the foundation depended on by the other refbuilder crates.
//! It provides:
//! - [`RefBuilderError`], the unified error type
//! - Domain types ([`Challenge`], [`Reference`]) and the challenge format constants
//! - Configuration ([`AppConfig`], [`ResolveConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, MatchingConfig, ResolveConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{RefBuilderError, Result};
pub use types::{ALL_SECTIONS, ANSWER_SEPARATOR, Challenge, REFERENCES_SEPARATOR, Reference};
