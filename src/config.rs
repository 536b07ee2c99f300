//! User configuration loading from `~/.fitsch/config.toml`.

use crate::app::state::DEFAULT_NARROW_BREAKPOINT;
use crate::ui::theme::ThemePalette;
use anyhow::{Context, Result, anyhow};
use ratatui::style::Color;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = ".fitsch";
const CONFIG_FILE: &str = "config.toml";

const DEFAULT_CONFIG_TOML: &str = r##"# fitsch configuration
# Colors accept `#RRGGBB` or named ANSI colors (e.g. "yellow", "dark_gray").

[header]
# Terminal width (columns) below which the header collapses the search box
# into its compact trigger.
breakpoint = 80

[theme]
border = "#3a7d44"
title = "#8fce5a"
dim = "dark_gray"
text = "#d2d2c8"
selected_fg = "black"
selected_bg = "#a3d977"
error = "red"
info = "cyan"
price = "#f5cd52"
store = "light_blue"
"##;

/// Application configuration loaded from disk.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemePalette,
    pub breakpoint: u16,
}

/// Returns the config file path, writing the commented defaults on first run.
pub fn ensure_config_file() -> Result<PathBuf> {
    let path = config_path()?;
    if !path.exists() {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow!("invalid config path: {}", path.display()))?;
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
    }
    Ok(path)
}

/// Loads `~/.fitsch/config.toml`, creating it with defaults if missing.
pub fn load_or_create() -> Result<AppConfig> {
    let path = ensure_config_file()?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let raw: RawConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse TOML in {}", path.display()))?;

    Ok(AppConfig {
        theme: raw.theme.into_theme()?,
        breakpoint: raw.header.breakpoint.unwrap_or(DEFAULT_NARROW_BREAKPOINT),
    })
}

fn config_path() -> Result<PathBuf> {
    let home =
        env::var_os("HOME").ok_or_else(|| anyhow!("HOME environment variable is not set"))?;
    Ok(PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    header: RawHeader,
    theme: RawTheme,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawHeader {
    breakpoint: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTheme {
    border: Option<String>,
    title: Option<String>,
    dim: Option<String>,
    text: Option<String>,
    selected_fg: Option<String>,
    selected_bg: Option<String>,
    error: Option<String>,
    info: Option<String>,
    price: Option<String>,
    store: Option<String>,
}

impl RawTheme {
    fn into_theme(self) -> Result<ThemePalette> {
        let base = ThemePalette::default();
        let resolve = |value: Option<String>, fallback: Color, field: &str| -> Result<Color> {
            match value {
                Some(raw) => parse_color(raw.trim())
                    .ok_or_else(|| anyhow!("invalid color value for `{field}`: {raw}")),
                None => Ok(fallback),
            }
        };

        Ok(ThemePalette {
            border: resolve(self.border, base.border, "theme.border")?,
            title: resolve(self.title, base.title, "theme.title")?,
            dim: resolve(self.dim, base.dim, "theme.dim")?,
            text: resolve(self.text, base.text, "theme.text")?,
            selected_fg: resolve(self.selected_fg, base.selected_fg, "theme.selected_fg")?,
            selected_bg: resolve(self.selected_bg, base.selected_bg, "theme.selected_bg")?,
            error: resolve(self.error, base.error, "theme.error")?,
            info: resolve(self.info, base.info, "theme.info")?,
            price: resolve(self.price, base.price, "theme.price")?,
            store: resolve(self.store, base.store, "theme.store")?,
        })
    }
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("reset", Color::Reset),
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("grey", Color::Gray),
    ("dark_gray", Color::DarkGray),
    ("dark_grey", Color::DarkGray),
    ("light_red", Color::LightRed),
    ("light_green", Color::LightGreen),
    ("light_yellow", Color::LightYellow),
    ("light_blue", Color::LightBlue),
    ("light_magenta", Color::LightMagenta),
    ("light_cyan", Color::LightCyan),
    ("white", Color::White),
];

fn parse_color(raw: &str) -> Option<Color> {
    if let Some(hex) = raw.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |range| u8::from_str_radix(hex.get(range)?, 16).ok();
        return Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }

    let normalized = raw.to_ascii_lowercase().replace(['-', ' '], "_");
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CONFIG_TOML, RawConfig, parse_color};
    use ratatui::style::Color;

    #[test]
    fn parse_color_supports_hex() {
        assert_eq!(parse_color("#112233"), Some(Color::Rgb(0x11, 0x22, 0x33)));
        assert_eq!(parse_color("#11223"), None);
        assert_eq!(parse_color("#11223g"), None);
    }

    #[test]
    fn parse_color_supports_named_values() {
        assert_eq!(parse_color("light_yellow"), Some(Color::LightYellow));
        assert_eq!(parse_color("dark-gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("mauve"), None);
    }

    #[test]
    fn default_config_parses() {
        let raw: RawConfig = toml::from_str(DEFAULT_CONFIG_TOML).expect("default config parses");
        assert_eq!(raw.header.breakpoint, Some(80));
        raw.theme.into_theme().expect("default theme resolves");
    }
}
