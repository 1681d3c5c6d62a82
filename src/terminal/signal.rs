//! SIGWINCH delivery as an atomic flag

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set by the signal handler, drained by the main loop
#[derive(Debug, Clone, Default)]
pub struct ResizeSignal {
    flag: Arc<AtomicBool>,
}

impl ResizeSignal {
    /// Register a SIGWINCH handler that raises the flag
    pub fn register() -> io::Result<Self> {
        let signal = Self::default();
        signal_hook::flag::register(signal_hook::consts::SIGWINCH, Arc::clone(&signal.flag))?;
        Ok(signal)
    }

    /// True if a resize arrived since the last call
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::Relaxed)
    }

    /// Raise the flag by hand (initial layout, tests)
    pub fn raise(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}
