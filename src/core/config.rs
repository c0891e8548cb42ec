//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vonixdocs/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::topics::ROOT_ROUTE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DocsConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory containing `docs/*.md`.
    pub docs_dir: Option<String>,
    /// Base URL serving `/docs/*.md`.
    pub docs_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub line_numbers: Option<bool>,
    pub sidebar_breakpoint: Option<u16>,
    pub start_route: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClipboardConfig {
    pub enabled: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Terminals narrower than this hide the docked sidebar.
pub const DEFAULT_SIDEBAR_BREAKPOINT: u16 = 100;

pub const ENV_DOCS_DIR: &str = "VONIXDOCS_DOCS_DIR";
pub const ENV_DOCS_URL: &str = "VONIXDOCS_DOCS_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where documentation text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRoot {
    Bundled,
    Directory(PathBuf),
    Url(String),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub content_root: ContentRoot,
    pub line_numbers: bool,
    pub sidebar_breakpoint: u16,
    pub start_route: String,
    pub clipboard_enabled: bool,
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub route: Option<String>,
    pub docs_dir: Option<PathBuf>,
    pub docs_url: Option<String>,
    pub line_numbers: bool,
    pub no_clipboard: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vonixdocs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vonixdocs").join("config.toml"))
}

/// Load config from `~/.vonixdocs/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DocsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DocsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DocsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DocsConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DocsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DocsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# vonixdocs Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [content]
# docs_dir = "/srv/vonixcore-docs/public"   # Reads <docs_dir>/docs/*.md (or VONIXDOCS_DOCS_DIR)
# docs_url = "https://docs.vonix.network"   # Fetches <docs_url>/docs/*.md (or VONIXDOCS_DOCS_URL)

# [display]
# line_numbers = false
# sidebar_breakpoint = 100                  # Columns below which the sidebar becomes an overlay
# start_route = "/"

# [clipboard]
# enabled = true                            # Copy code blocks via OSC 52
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DocsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &DocsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Content root: CLI → env → config → bundled. A directory wins over a URL
    // at the same level.
    let content_root = cli
        .docs_dir
        .clone()
        .map(ContentRoot::Directory)
        .or_else(|| cli.docs_url.clone().map(ContentRoot::Url))
        .or_else(|| env(ENV_DOCS_DIR).map(|d| ContentRoot::Directory(d.into())))
        .or_else(|| env(ENV_DOCS_URL).map(ContentRoot::Url))
        .or_else(|| {
            config
                .content
                .docs_dir
                .clone()
                .map(|d| ContentRoot::Directory(d.into()))
        })
        .or_else(|| config.content.docs_url.clone().map(ContentRoot::Url))
        .unwrap_or(ContentRoot::Bundled);

    let start_route = cli
        .route
        .clone()
        .or_else(|| config.display.start_route.clone())
        .unwrap_or_else(|| ROOT_ROUTE.to_string());

    ResolvedConfig {
        content_root,
        line_numbers: cli.line_numbers || config.display.line_numbers.unwrap_or(false),
        sidebar_breakpoint: config
            .display
            .sidebar_breakpoint
            .unwrap_or(DEFAULT_SIDEBAR_BREAKPOINT),
        start_route,
        clipboard_enabled: !cli.no_clipboard && config.clipboard.enabled.unwrap_or(true),
    }
}
