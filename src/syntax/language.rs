//! Language definitions: keywords plus ordered regex rules
//!
//! Loading priority for a file extension:
//! 1. User config: `~/.config/ax-editor/languages/*.yaml`
//! 2. Embedded: built-in languages compiled into the binary

use std::path::Path;

use serde::Deserialize;

use super::token::TokenType;
use crate::config_paths;

pub const SWIFT_YAML: &str = include_str!("../../languages/swift.yaml");
pub const RUST_YAML: &str = include_str!("../../languages/rust.yaml");
pub const PYTHON_YAML: &str = include_str!("../../languages/python.yaml");

/// A built-in language entry
pub struct BuiltinLanguage {
    pub id: &'static str,
    pub yaml: &'static str,
}

pub const BUILTIN_LANGUAGES: &[BuiltinLanguage] = &[
    BuiltinLanguage {
        id: "swift",
        yaml: SWIFT_YAML,
    },
    BuiltinLanguage {
        id: "rust",
        yaml: RUST_YAML,
    },
    BuiltinLanguage {
        id: "python",
        yaml: PYTHON_YAML,
    },
];

/// Rule category as written in language files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Comments,
    Strings,
    Numbers,
    Types,
    Functions,
    Operators,
    Attributes,
    DotAccess,
    Properties,
    Headers,
    Macros,
    Symbols,
}

impl Category {
    pub fn token_type(self) -> TokenType {
        match self {
            Category::Comments => TokenType::Comment,
            Category::Strings => TokenType::String,
            Category::Numbers => TokenType::Number,
            Category::Types => TokenType::Type,
            Category::Functions => TokenType::MethodCall,
            Category::Operators | Category::Symbols => TokenType::Operator,
            Category::Attributes => TokenType::Attribute,
            Category::DotAccess => TokenType::DotAccess,
            Category::Properties => TokenType::Property,
            Category::Headers | Category::Macros => TokenType::Preprocessing,
        }
    }
}

/// One `(category, regex)` rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    pub category: Category,
    pub regex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Applied in declaration order
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Language {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read language file {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_LANGUAGES
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| format!("Unknown language id: {}", id))?;
        Self::from_yaml(entry.yaml)
    }

    /// No keywords and no rules: nothing gets highlighted
    pub fn plain_text() -> Self {
        Self {
            name: "Plain Text".to_string(),
            icon: String::new(),
            extensions: Vec::new(),
            keywords: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// All known languages, user definitions ahead of built-ins
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    /// Embedded languages only
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.add_builtins();
        registry
    }

    /// User languages from the config dir, then built-ins
    pub fn load() -> Self {
        match config_paths::languages_dir() {
            Some(dir) => Self::with_user_dir(&dir),
            None => Self::builtin(),
        }
    }

    /// Languages from `dir` (higher priority), then built-ins
    pub fn with_user_dir(dir: &Path) -> Self {
        let mut registry = Self::default();
        for path in config_paths::yaml_files_in(dir) {
            match Language::from_file(&path) {
                Ok(language) => {
                    tracing::info!("Loaded user language {} from {}", language.name, path.display());
                    registry.languages.push(language);
                }
                Err(e) => tracing::warn!("Skipping language file: {}", e),
            }
        }
        registry.add_builtins();
        registry
    }

    fn add_builtins(&mut self) {
        for builtin in BUILTIN_LANGUAGES {
            match Language::from_yaml(builtin.yaml) {
                Ok(language) => self.languages.push(language),
                Err(e) => tracing::error!("Built-in language {} is invalid: {}", builtin.id, e),
            }
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn for_extension(&self, ext: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.handles_extension(ext))
    }

    /// Language for a file path, plain text when unknown
    pub fn for_path(&self, path: &Path) -> Language {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.for_extension(ext))
            .cloned()
            .unwrap_or_else(Language::plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_parse() {
        for builtin in BUILTIN_LANGUAGES {
            let language = Language::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("{}: {}", builtin.id, e));
            assert!(!language.keywords.is_empty(), "{} has no keywords", builtin.id);
            assert!(!language.definitions.is_empty());
        }
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(Category::Functions.token_type(), TokenType::MethodCall);
        assert_eq!(Category::Symbols.token_type(), TokenType::Operator);
        assert_eq!(Category::Headers.token_type(), TokenType::Preprocessing);
        assert_eq!(Category::Macros.token_type(), TokenType::Preprocessing);
    }

    #[test]
    fn test_registry_by_extension() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.for_extension("swift").map(|l| l.name.as_str()), Some("Swift"));
        assert_eq!(registry.for_extension("RS").map(|l| l.name.as_str()), Some("Rust"));
        assert_eq!(registry.for_path(Path::new("main.py")).name, "Python");
        assert_eq!(registry.for_path(Path::new("notes.txt")).name, "Plain Text");
        assert_eq!(registry.for_path(Path::new("Makefile")).name, "Plain Text");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let yaml = "name: X\ndefinitions:\n  - category: sparkles\n    regex: 'a'\n";
        assert!(Language::from_yaml(yaml).is_err());
    }
}
