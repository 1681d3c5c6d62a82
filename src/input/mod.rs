//! Terminal input: byte decoding and buffered reading

pub mod parser;
pub mod reader;
pub mod types;

pub use parser::EventParser;
pub use reader::{EventReader, InputError, InputSource, StdinSource, READ_CHUNK_SIZE};
pub use types::{KeyCode, KeyEvent, KeyModifier};
