//! Buffered key-event reader over a raw byte source

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use thiserror::Error;

use super::parser::EventParser;
use super::types::KeyEvent;

/// Bytes requested from the source per read
pub const READ_CHUNK_SIZE: usize = 256;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read terminal input: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed")]
    Closed,
}

/// A readable, pollable byte stream (stdin in the editor, memory in tests)
pub trait InputSource {
    /// Wait up to `timeout` for input; `Ok(true)` if a read would not block
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read available bytes into `buf`; `Ok(0)` means end of input
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Raw-mode stdin through `poll(2)` / `read(2)` on fd 0
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        let mut fds = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;
        // SAFETY: `fds` is a valid pollfd for the duration of the call.
        let ready = unsafe { libc::poll(&mut fds, 1, millis) };
        if ready < 0 {
            let err = io::Error::last_os_error();
            // SIGWINCH interrupts poll; report "nothing ready" and let the loop redraw
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(err);
        }
        Ok(ready > 0)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
            let n = unsafe {
                libc::read(
                    libc::STDIN_FILENO,
                    buf.as_mut_ptr().cast::<libc::c_void>(),
                    buf.len(),
                )
            };
            if n >= 0 {
                return Ok(n as usize);
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(err);
            }
        }
    }
}

/// Owns the pending byte buffer and turns it into key events
#[derive(Debug)]
pub struct EventReader<S> {
    source: S,
    parser: EventParser,
    buffer: VecDeque<u8>,
}

impl<S: InputSource> EventReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: EventParser::new(),
            buffer: VecDeque::with_capacity(READ_CHUNK_SIZE),
        }
    }

    /// True if an event can be read without blocking.
    ///
    /// Bytes left over from a previous read count as ready input.
    pub fn poll(&mut self, timeout: Duration) -> Result<bool, InputError> {
        if !self.buffer.is_empty() {
            return Ok(true);
        }
        Ok(self.source.poll(timeout)?)
    }

    /// Decode the next key event, reading from the source only when no
    /// buffered bytes remain
    pub fn read_event(&mut self) -> Result<KeyEvent, InputError> {
        if self.buffer.is_empty() {
            self.fill()?;
        }
        self.parser.parse(&mut self.buffer).ok_or(InputError::Closed)
    }

    /// Bytes read but not yet decoded
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    fn fill(&mut self) -> Result<(), InputError> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        let n = self.source.read(&mut chunk)?;
        if n == 0 {
            return Err(InputError::Closed);
        }
        tracing::trace!(bytes = n, "read input chunk");
        self.buffer.extend(&chunk[..n]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyModifier};

    /// Serves pre-recorded chunks, one per read
    struct ScriptedSource {
        chunks: VecDeque<Vec<u8>>,
        reads: usize,
    }

    impl ScriptedSource {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
                reads: 0,
            }
        }
    }

    impl InputSource for ScriptedSource {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.chunks.is_empty())
        }

        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            let Some(chunk) = self.chunks.pop_front() else {
                return Ok(0);
            };
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            Ok(n)
        }
    }

    #[test]
    fn test_buffered_bytes_decode_before_next_read() {
        let mut reader = EventReader::new(ScriptedSource::new(&[b"ab", b"c"]));

        assert_eq!(reader.read_event().unwrap().code, KeyCode::Char('a'));
        assert_eq!(reader.source.reads, 1);
        assert!(reader.poll(Duration::ZERO).unwrap());
        assert_eq!(reader.read_event().unwrap().code, KeyCode::Char('b'));
        assert_eq!(reader.source.reads, 1);
        assert_eq!(reader.read_event().unwrap().code, KeyCode::Char('c'));
        assert_eq!(reader.source.reads, 2);
    }

    #[test]
    fn test_end_of_input_is_closed() {
        let mut reader = EventReader::new(ScriptedSource::new(&[]));
        assert!(!reader.poll(Duration::ZERO).unwrap());
        assert!(matches!(reader.read_event(), Err(InputError::Closed)));
    }

    #[test]
    fn test_escape_sequence_in_one_chunk() {
        let mut reader = EventReader::new(ScriptedSource::new(&[b"\x1b[1;5Cx"]));
        assert_eq!(
            reader.read_event().unwrap(),
            KeyEvent::with_modifier(KeyCode::Right, KeyModifier::Control)
        );
        assert_eq!(reader.pending(), 1);
        assert_eq!(reader.read_event().unwrap().code, KeyCode::Char('x'));
    }

    #[test]
    fn test_io_error_is_wrapped() {
        struct Broken;
        impl InputSource for Broken {
            fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
                Ok(true)
            }
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }

        let mut reader = EventReader::new(Broken);
        assert!(matches!(reader.read_event(), Err(InputError::Io(_))));
    }
}
