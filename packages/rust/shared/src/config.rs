//! Application configuration for refbuilder.
//!
//! User config lives at `~/.refbuilder/refbuilder.toml`.
//! Values omitted from the file fall back to the serde defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RefBuilderError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "refbuilder.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".refbuilder";

// ---------------------------------------------------------------------------
// Config structs (matching refbuilder.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reference resolution defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Section heading matching behavior.
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory prefix used when resolving reference filenames.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Extension appended to reference filenames.
    #[serde(default = "default_doc_extension")]
    pub doc_extension: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            doc_extension: default_doc_extension(),
        }
    }
}

fn default_docs_dir() -> String {
    "docs".into()
}
fn default_doc_extension() -> String {
    ".md".into()
}

/// `[matching]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Require section headings to equal the constructed heading exactly
    /// instead of matching by containment. Stricter than the historical
    /// behavior: a title that is a substring of another heading no longer
    /// matches the wrong section.
    #[serde(default)]
    pub strict_headings: bool,
}

// ---------------------------------------------------------------------------
// Resolve config (runtime, merged from config file)
// ---------------------------------------------------------------------------

/// Runtime resolution settings, merged from the config file.
///
/// The `Default` value reproduces the historical reference addressing
/// exactly: `docs\<filename>.md` with a literal backslash.
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Directory prefix for resolved reference paths.
    pub docs_dir: String,
    /// Extension appended to reference filenames.
    pub doc_extension: String,
    /// Whether section headings must match exactly.
    pub strict_headings: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            doc_extension: default_doc_extension(),
            strict_headings: false,
        }
    }
}

impl From<&AppConfig> for ResolveConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            docs_dir: config.defaults.docs_dir.clone(),
            doc_extension: config.defaults.doc_extension.clone(),
            strict_headings: config.matching.strict_headings,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.refbuilder/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RefBuilderError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.refbuilder/refbuilder.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RefBuilderError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| RefBuilderError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| RefBuilderError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RefBuilderError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RefBuilderError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
