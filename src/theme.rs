//! Color themes
//!
//! Themes are YAML files embedded at compile time, overridable by
//! user-defined themes in the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/ax-editor/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config_paths;
use crate::syntax::TokenType;

pub const VSCODE_DARK_YAML: &str = include_str!("../themes/vscode-dark.yaml");
pub const AX_DARK_YAML: &str = include_str!("../themes/ax-dark.yaml");

/// Id of the theme used when nothing else is configured
pub const DEFAULT_THEME_ID: &str = "vscode-dark";

/// Color for token kinds a theme does not map
pub const DEFAULT_TOKEN_COLOR: Color = Color::rgb(250, 141, 87);

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "vscode-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "vscode-dark",
        yaml: VSCODE_DARK_YAML,
    },
    BuiltinTheme {
        id: "ax-dark",
        yaml: AX_DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// 24-bit terminal color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB"
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeData {
    pub name: String,
    pub background_color: String,
    pub text_color: String,
    #[serde(default)]
    pub highlights: HashMap<TokenType, String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub background_color: Color,
    pub text_color: Color,
    pub highlights: HashMap<TokenType, Color>,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let highlights = data
            .highlights
            .iter()
            .map(|(kind, hex)| Ok((*kind, Color::from_hex(hex)?)))
            .collect::<Result<HashMap<_, _>, String>>()?;

        Ok(Theme {
            name: data.name,
            background_color: Color::from_hex(&data.background_color)?,
            text_color: Color::from_hex(&data.text_color)?,
            highlights,
        })
    }

    /// Highlight color for a token kind
    pub fn color_for(&self, kind: TokenType) -> Color {
        self.highlights
            .get(&kind)
            .copied()
            .unwrap_or(DEFAULT_TOKEN_COLOR)
    }

    /// VS Code-like dark theme (YAML-backed with Rust fallback)
    pub fn vscode_dark() -> Self {
        match Theme::from_yaml(VSCODE_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "VS Code Dark".to_string(),
                background_color: Color::rgb(40, 44, 52),
                text_color: Color::rgb(171, 178, 191),
                highlights: HashMap::new(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::vscode_dark()
    }
}
