//! Configuration module for tally.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tally_core::{DEFAULT_TIME_FORMAT, FilterMode, TimeFormat};

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, ViewType};

/// Top-level configuration for tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How tasks are displayed.
    pub display: DisplayConfig,
    /// TUI configuration.
    pub tui: TuiConfig,
}

/// Display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `time` format description for the creation-time column.
    pub time_format: String,
    /// Filter selected at startup.
    pub default_filter: FilterMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_owned(),
            default_filter: FilterMode::All,
        }
    }
}

impl DisplayConfig {
    /// Parse the configured time format.
    pub fn time_format(&self) -> Result<TimeFormat> {
        TimeFormat::parse(&self.time_format).context("display.time_format is invalid")
    }
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

impl Config {
    /// Check every value that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.display.time_format()?;
        keybindings::validate_keybindings_config(&self.tui.keybindings)
    }
}

/// Returns the default configuration file path.
///
/// On Linux: `~/.config/tally/config.toml`
/// On macOS: `~/Library/Application Support/tally/config.toml`
/// On Windows: `%APPDATA%\tally\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
}

fn resolve_config_path(path: Option<&Path>) -> Option<PathBuf> {
    path.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load configuration from a TOML file.
///
/// # Returns
/// - `Ok(Some(config))` if the file exists and was successfully parsed
/// - `Ok(None)` if the file does not exist
/// - `Err(_)` if there was an error reading or parsing the file
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let Some(config_path) = resolve_config_path(path) else {
        return Ok(None);
    };
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Load and validate configuration, falling back to defaults when no file exists.
pub fn load_validated(path: Option<&Path>) -> Result<Config> {
    let config = load_config(path)?.unwrap_or_default();
    config.validate()?;
    Ok(config)
}

/// Generate default configuration as TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let toml_str = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default configuration")?;

    let header = r#"# tally configuration
#
# [display]
# time_format uses the `time` crate format description syntax,
# e.g. "[hour]:[minute]" or "[hour repr:12]:[minute] [period]".
# default_filter is one of "all", "active", "completed".
#
# [tui.keybindings.*]
# Each action can have multiple key bindings. Omitted actions keep
# their defaults.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Tab", "BackTab", "Space", "Backspace", "Delete"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+d", "Alt+k"

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Write the default configuration file.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_config_path().ok_or_else(|| anyhow!("Could not determine config directory"))?,
    };

    if output_path.exists() && !force && !confirm_overwrite(&output_path)? {
        println!("Aborted.");
        return Ok(());
    }

    write_default_config(&output_path)?;
    println!("✓ Wrote configuration file: {}", output_path.display());
    Ok(())
}

fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = generate_default_config_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "configuration written");
    Ok(())
}

/// Load and validate a configuration file, reporting where it came from.
pub fn check_config(path: Option<&Path>) -> Result<()> {
    match load_config(path)? {
        Some(config) => {
            config.validate()?;
            let shown = resolve_config_path(path)
                .map_or_else(String::new, |p| p.display().to_string());
            println!("✓ {shown} is valid");
        }
        None => println!("No configuration file found; using defaults."),
    }
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("File already exists: {}\nOverwrite? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
