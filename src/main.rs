use anyhow::{Context, Result};
use clap::Parser;

use ax::app::App;
use ax::cli::CliArgs;
use ax::config::EditorConfig;
use ax::model::{AppModel, Document};
use ax::syntax::{Highlighter, Language, LanguageRegistry};
use ax::terminal;
use ax::theme::{self, Theme};

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    if let Err(e) = ax::tracing::init() {
        eprintln!("Warning: Could not initialize file logging: {}", e);
    }

    let config = EditorConfig::load();

    let theme_id = startup.theme.as_deref().unwrap_or(&config.theme);
    let theme = theme::load_theme(theme_id).unwrap_or_else(|e| {
        tracing::warn!("Falling back to default theme: {}", e);
        Theme::default()
    });

    let document = match startup.path {
        Some(path) => Document::open(path.clone())
            .with_context(|| format!("failed to open {}", path.display()))?,
        None => Document::default(),
    }
    .with_undo_limit(config.undo_limit);

    let language = match &document.file_path {
        Some(path) => LanguageRegistry::load().for_path(path),
        None => Language::plain_text(),
    };
    tracing::info!("Using language {} with theme {}", language.name, theme.name);
    let highlighter = Highlighter::new(&language, theme);

    let window_size = terminal::window_size().unwrap_or_default();
    let model = AppModel::new(document, highlighter, config, window_size);

    App::new(model)?.run()
}
