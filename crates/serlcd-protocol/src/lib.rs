//! Command encoding for SerLCD-class serial character displays.
//!
//! This is the pure protocol layer: it maps typed display operations to the
//! device's two-byte command framing and does nothing else. Commands are a
//! prefix byte (`0xFE` for cursor commands, `0x7C` for display commands)
//! followed by a base opcode plus an optional modifier; text is sent as raw
//! payload bytes with no prefix at all.
//!
//! No I/O, no state. Pacing and transmission live in the `serlcd` crate.

pub mod codec;
pub mod command;
pub mod error;
pub mod operation;

pub use codec::{brightness_modifier, encode, row_offset, Frame};
pub use command::{CursorCommand, DisplayCommand, CURSOR_PREFIX, DISPLAY_PREFIX, RESET};
pub use error::{ProtocolError, Result};
pub use operation::{Brightness, CursorType, Operation, Position};
