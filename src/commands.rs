//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Side effect requested by `update`, executed by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// End the session
    Quit,
    /// Write the document to `path`
    SaveFile { path: PathBuf },
}
