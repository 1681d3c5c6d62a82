//! Terminal control: raw mode, window size and screen output

pub mod ansi;
pub mod signal;

use std::fmt;
use std::io::{self, Write};
use std::mem;

pub use ansi::AnsiCommand;
pub use signal::ResizeSignal;

/// Terminal dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Query the window size of the terminal on stdout
pub fn window_size() -> io::Result<WindowSize> {
    // SAFETY: winsize is plain old data; zeroed is a valid value.
    let mut size: libc::winsize = unsafe { mem::zeroed() };
    // SAFETY: TIOCGWINSZ writes a winsize through the pointer we pass.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    if size.ws_row == 0 || size.ws_col == 0 {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "terminal reported a zero-sized window",
        ));
    }
    Ok(WindowSize::new(size.ws_row, size.ws_col))
}

/// Puts stdin in raw mode; the original attributes come back on drop
pub struct RawModeGuard {
    original: libc::termios,
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        // SAFETY: termios is plain old data; tcgetattr fills it in.
        let mut original: libc::termios = unsafe { mem::zeroed() };
        // SAFETY: valid fd and pointer to an initialized termios.
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &mut original) } != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut raw = original;
        // SAFETY: `raw` is a valid termios copied from the terminal.
        unsafe { libc::cfmakeraw(&mut raw) };
        // Return from read() as soon as any byte is available
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;

        // SAFETY: valid fd and pointer to an initialized termios.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        tracing::debug!("raw mode enabled");
        Ok(Self { original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // SAFETY: restores the attributes captured in `enable`.
        let rc = unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &self.original) };
        if rc != 0 {
            tracing::warn!(
                "failed to restore terminal attributes: {}",
                io::Error::last_os_error()
            );
        }
    }
}

/// The controlling terminal for the session.
///
/// Owns raw mode and the alternate screen; both are undone on drop.
pub struct Terminal {
    _raw: RawModeGuard,
    out: io::BufWriter<io::Stdout>,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        let raw = RawModeGuard::enable()?;
        let mut terminal = Self {
            _raw: raw,
            out: io::BufWriter::new(io::stdout()),
        };
        terminal.command(AnsiCommand::EnterAlternateScreen)?;
        terminal.command(AnsiCommand::ClearScreen)?;
        terminal.flush()?;
        Ok(terminal)
    }

    pub fn size(&self) -> io::Result<WindowSize> {
        window_size()
    }

    pub fn command(&mut self, command: AnsiCommand) -> io::Result<()> {
        write!(self.out, "{}", command)
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let restore = [
            AnsiCommand::ResetStyle,
            AnsiCommand::ShowCursor,
            AnsiCommand::LeaveAlternateScreen,
        ];
        let result = restore
            .iter()
            .try_for_each(|command| self.command(*command))
            .and_then(|()| self.flush());
        if let Err(e) = result {
            tracing::warn!("failed to restore screen: {}", e);
        }
    }
}
