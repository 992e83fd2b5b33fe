//! Theme system for the dashboard
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/pulseboard/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[BuiltinTheme {
    id: "dark",
    yaml: DARK_YAML,
}];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
///
/// Searches in order:
/// 1. `~/.config/pulseboard/themes/{id}.yaml`
/// 2. Embedded builtin themes
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::get_user_themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Scale the alpha channel by `factor` (0.0..=1.0)
    pub fn scale_alpha(&self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub panel: PanelThemeData,
    pub calendar: CalendarThemeData,
    pub buttons: ButtonThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    pub border: String,
    pub title: String,
    pub text: String,
    pub text_dim: String,
    pub revenue: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarThemeData {
    pub background: String,
    pub cell_fill: String,
    pub cell_border: String,
    pub today_border: String,
    pub meeting_indicator: String,
    pub lead_indicator: String,
    pub deal_accent: String,
    pub axis_line: String,
    pub axis_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonThemeData {
    pub background: String,
    pub active_background: String,
    pub border: String,
    pub text: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub window: WindowTheme,
    pub panel: PanelTheme,
    pub calendar: CalendarTheme,
    pub buttons: ButtonTheme,
}

/// Window colors (resolved)
#[derive(Debug, Clone)]
pub struct WindowTheme {
    pub background: Color,
}

/// Panel chrome colors (resolved)
#[derive(Debug, Clone)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub text_dim: Color,
    pub revenue: Color,
}

/// Calendar canvas colors (resolved)
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    pub background: Color,
    /// Fill for populated day cells; semi-transparent
    pub cell_fill: Color,
    pub cell_border: Color,
    /// Border highlight for today's cell
    pub today_border: Color,
    /// Green meeting dot
    pub meeting_indicator: Color,
    /// Blue lead dot, with glow scaled by the day's lead count
    pub lead_indicator: Color,
    /// Red accent on the active deals button
    pub deal_accent: Color,
    pub axis_line: Color,
    pub axis_label: Color,
}

/// Metric button colors (resolved)
#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub background: Color,
    pub active_background: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_yaml(DARK_YAML).unwrap_or_else(|_| Theme::fallback_dark())
    }
}

impl Theme {
    /// Parse a theme from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    /// Load a builtin theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let hex = Color::from_hex;
        Ok(Theme {
            name: data.name,
            window: WindowTheme {
                background: hex(&data.ui.window.background)?,
            },
            panel: PanelTheme {
                background: hex(&data.ui.panel.background)?,
                border: hex(&data.ui.panel.border)?,
                title: hex(&data.ui.panel.title)?,
                text: hex(&data.ui.panel.text)?,
                text_dim: hex(&data.ui.panel.text_dim)?,
                revenue: hex(&data.ui.panel.revenue)?,
            },
            calendar: CalendarTheme {
                background: hex(&data.ui.calendar.background)?,
                cell_fill: hex(&data.ui.calendar.cell_fill)?,
                cell_border: hex(&data.ui.calendar.cell_border)?,
                today_border: hex(&data.ui.calendar.today_border)?,
                meeting_indicator: hex(&data.ui.calendar.meeting_indicator)?,
                lead_indicator: hex(&data.ui.calendar.lead_indicator)?,
                deal_accent: hex(&data.ui.calendar.deal_accent)?,
                axis_line: hex(&data.ui.calendar.axis_line)?,
                axis_label: hex(&data.ui.calendar.axis_label)?,
            },
            buttons: ButtonTheme {
                background: hex(&data.ui.buttons.background)?,
                active_background: hex(&data.ui.buttons.active_background)?,
                border: hex(&data.ui.buttons.border)?,
                text: hex(&data.ui.buttons.text)?,
            },
        })
    }

    /// Hardcoded dark theme, used if the embedded YAML ever fails to parse
    fn fallback_dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            window: WindowTheme {
                background: Color::rgb(0x0a, 0x0a, 0x12),
            },
            panel: PanelTheme {
                background: Color::rgb(0x14, 0x14, 0x1f),
                border: Color::rgb(0x2a, 0x2a, 0x3a),
                title: Color::rgb(0xff, 0xff, 0xff),
                text: Color::rgb(0xe8, 0xe8, 0xf0),
                text_dim: Color::rgb(0x88, 0x88, 0xa0),
                revenue: Color::rgb(0x44, 0xff, 0x88),
            },
            calendar: CalendarTheme {
                background: Color::rgb(0x0e, 0x0e, 0x18),
                cell_fill: Color::rgba(0x44, 0x88, 0xff, 0x0d),
                cell_border: Color::rgb(0x2a, 0x2a, 0x3a),
                today_border: Color::rgb(0x44, 0xff, 0x88),
                meeting_indicator: Color::rgb(0x44, 0xff, 0x88),
                lead_indicator: Color::rgb(0x44, 0x88, 0xff),
                deal_accent: Color::rgb(0xff, 0x44, 0x44),
                axis_line: Color::rgb(0x2a, 0x2a, 0x3a),
                axis_label: Color::rgb(0x88, 0x88, 0xa0),
            },
            buttons: ButtonTheme {
                background: Color::rgb(0x1c, 0x1c, 0x2a),
                active_background: Color::rgb(0x2a, 0x3a, 0x55),
                border: Color::rgb(0x2a, 0x2a, 0x3a),
                text: Color::rgb(0xe8, 0xe8, 0xf0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#44ff88").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x44, 0xff, 0x88, 0xff));

        let c = Color::from_hex("#4488ff0d").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x44, 0x88, 0xff, 0x0d));

        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn test_color_to_argb() {
        let c = Color::rgb(0x44, 0xff, 0x88);
        assert_eq!(c.to_argb_u32(), 0xff44ff88);
    }

    #[test]
    fn test_scale_alpha() {
        let c = Color::rgb(0x44, 0x88, 0xff).scale_alpha(0.5);
        assert_eq!(c.a, 128);
        let c = Color::rgb(0x44, 0x88, 0xff).scale_alpha(2.0);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_embedded_dark_theme_parses() {
        let theme = Theme::from_yaml(DARK_YAML).unwrap();
        assert_eq!(theme.name, "Dark");
        assert_eq!(theme.calendar.meeting_indicator, Color::rgb(0x44, 0xff, 0x88));
        assert_eq!(theme.calendar.lead_indicator, Color::rgb(0x44, 0x88, 0xff));
        assert_eq!(theme.calendar.cell_fill.a, 0x0d);
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(Theme::from_builtin("dark").is_ok());
        assert!(Theme::from_builtin("nope").is_err());
    }

    #[test]
    fn test_default_matches_embedded() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Dark");
    }
}
