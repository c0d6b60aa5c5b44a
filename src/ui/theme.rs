//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are Catppuccin variants compiled into the plugin; custom
//! themes are TOML files selected with the `theme_file` option.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f5c2e7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! loading_fg = "#fab387"
//! error_fg = "#f38ba8"
//! link_fg = "#74c7ec"
//! overlay_border = "#cba6f7"
//! ```

use crate::domain::{BookFinderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row foreground.
    pub selection_fg: String,
    /// Cursor row background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, placeholders, disabled controls.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// "Loading..." indicator.
    pub loading_fg: String,
    /// Fetch failure message.
    pub error_fg: String,
    /// Cover image links.
    pub link_fg: String,

    /// Frame of the detail overlay.
    pub overlay_border: String,
    /// Fill behind the detail overlay text; transparent when unset.
    #[serde(default)]
    pub overlay_bg: Option<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Errors
    ///
    /// [`BookFinderError::Theme`] if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use book_finder::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte")?;
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_err());
    /// # Ok::<(), book_finder::BookFinderError>(())
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return Err(BookFinderError::Theme(format!("unknown theme '{name}'"))),
        };

        Self::parse(toml_str)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`BookFinderError::Io`] if the file cannot be read,
    /// [`BookFinderError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| BookFinderError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Plain palette used if the built-in default cannot be loaded.
    fn monochrome() -> Self {
        let white = "#ffffff".to_string();
        let black = "#000000".to_string();
        let grey = "#808080".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                selection_fg: black.clone(),
                selection_bg: white.clone(),
                text_normal: white.clone(),
                text_dim: grey.clone(),
                border: grey.clone(),
                search_bar_border: white.clone(),
                match_highlight_fg: black,
                match_highlight_bg: grey.clone(),
                empty_state_fg: white.clone(),
                loading_fg: white.clone(),
                error_fg: white.clone(),
                link_fg: white.clone(),
                overlay_border: white,
                overlay_bg: None,
            },
        }
    }

    /// Converts a hex color to an RGB tuple; white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    ///
    /// ```rust
    /// use book_finder::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling (colors, bold, dim, underline).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|e| {
            tracing::error!(error = %e, "built-in theme failed to load");
            Self::monochrome()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_is_mocha() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn unknown_name_is_theme_error() {
        assert!(matches!(
            Theme::from_name("gruvbox"),
            Err(BookFinderError::Theme(_))
        ));
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        custom.colors.error_fg = "#ff0000".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Theme::from_file(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(BookFinderError::Io(_))));
    }

    #[test]
    fn incomplete_theme_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(BookFinderError::Theme(_))
        ));
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
    }
}
