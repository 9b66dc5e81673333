use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub dim: String,
    pub header_fg: String,
    pub cursor_row_bg: String,
    pub focused_row_bg: String,
    pub active_cell_bg: String,
    pub active_cell_fg: String,
    pub border: String,
    pub accent: String,
    pub error: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes shadow bundled ones
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("yay")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(e) => warn!("Ignoring theme {}: {e}", user_theme_path.display()),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    /// Load `name`, falling back to the default theme when it is unknown.
    pub fn load_or_default(name: &str) -> Self {
        Self::load(name).unwrap_or_else(|| {
            warn!(
                "Unknown theme {name:?}, using default (available: {})",
                Self::available_themes().join(", ")
            );
            Self::default()
        })
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("midnight").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#0b1622".to_string(),
            fg: "#ffffff".to_string(),
            dim: "#b6b8ba".to_string(),
            header_fg: "#ffffff".to_string(),
            cursor_row_bg: "#1a3a5c".to_string(),
            focused_row_bg: "#0f3460".to_string(),
            active_cell_bg: "#00b4d8".to_string(),
            active_cell_fg: "#ffffff".to_string(),
            border: "#1a3a5c".to_string(),
            accent: "#00b4d8".to_string(),
            error: "#ff6b6b".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn dim(&self) -> Color { Self::parse_color(&self.dim) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn cursor_row_bg(&self) -> Color { Self::parse_color(&self.cursor_row_bg) }
    pub fn focused_row_bg(&self) -> Color { Self::parse_color(&self.focused_row_bg) }
    pub fn active_cell_bg(&self) -> Color { Self::parse_color(&self.active_cell_bg) }
    pub fn active_cell_fg(&self) -> Color { Self::parse_color(&self.active_cell_fg) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
}
