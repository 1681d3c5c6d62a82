//! Runtime loop: read → decode → update → render

use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::input::{EventReader, InputError, StdinSource};
use crate::model::AppModel;
use crate::terminal::{ResizeSignal, Terminal};
use crate::update::update;
use crate::view;

pub struct App {
    model: AppModel,
    terminal: Terminal,
    reader: EventReader<StdinSource>,
    resize: ResizeSignal,
    needs_redraw: bool,
}

impl App {
    /// Take over the terminal. It is handed back when the `App` is dropped.
    pub fn new(model: AppModel) -> Result<Self> {
        let terminal = Terminal::open().context("failed to put the terminal in raw mode")?;
        let resize = ResizeSignal::register().context("failed to watch for window resizes")?;
        // Pick up the real size before the first frame
        resize.raise();

        Ok(Self {
            model,
            terminal,
            reader: EventReader::new(StdinSource),
            resize,
            needs_redraw: true,
        })
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!("editor started on {}", self.model.document.display_name());
        loop {
            if self.resize.take() {
                self.refresh_window_size();
            }
            if self.needs_redraw {
                self.draw()?;
            }

            match self.reader.poll(self.model.config.poll_timeout()) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!("input poll failed: {}", e);
                    continue;
                }
            }

            let key = match self.reader.read_event() {
                Ok(key) => key,
                Err(InputError::Closed) => {
                    tracing::info!("input closed, exiting");
                    break;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    continue;
                }
            };

            self.needs_redraw = true;
            match update(&mut self.model, key) {
                Some(Cmd::Quit) => break,
                Some(Cmd::SaveFile { path }) => self.save(&path),
                None => {}
            }
        }
        tracing::info!("editor exiting");
        Ok(())
    }

    fn refresh_window_size(&mut self) {
        match self.terminal.size() {
            Ok(size) => {
                self.model.set_window_size(size);
                self.needs_redraw = true;
            }
            Err(e) => tracing::warn!("could not read window size: {}", e),
        }
    }

    fn draw(&mut self) -> Result<()> {
        let frame = view::render(&self.model);
        self.terminal
            .write_str(&frame.to_output())
            .and_then(|()| self.terminal.flush())
            .context("failed to draw frame")?;
        self.needs_redraw = false;
        Ok(())
    }

    fn save(&mut self, path: &Path) {
        let lines = self.model.document.line_count();
        let result = self
            .model
            .document
            .save_to(path)
            .with_context(|| format!("failed to save {}", path.display()));

        self.model.message = Some(match result {
            Ok(()) => format!("Saved {} lines to {}", lines, path.display()),
            Err(e) => {
                tracing::error!("{:#}", e);
                format!("{:#}", e)
            }
        });
    }
}
