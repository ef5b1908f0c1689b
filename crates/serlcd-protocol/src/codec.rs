use bytes::Bytes;

use crate::command::{CursorCommand, DisplayCommand, CURSOR_PREFIX, DISPLAY_PREFIX, RESET};
use crate::error::{ProtocolError, Result};
use crate::operation::{CursorType, Operation};

/// One on-wire unit: either a two-byte command or raw text bytes.
///
/// Frames are produced by [`encode`] and consumed exactly once by whoever
/// transmits them; they carry no framing of their own beyond the command
/// prefix already baked into the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Bytes,
}

impl Frame {
    /// A cursor command frame: prefix `0xFE`, then `base + modifier`.
    ///
    /// The sum is truncated to a byte, matching the device's datasheet
    /// arithmetic (and the overflow behavior real firmware relies on).
    pub fn cursor_command(command: CursorCommand, modifier: i32) -> Self {
        Self::from_bytes(vec![
            CURSOR_PREFIX,
            (i32::from(command.base()) + modifier) as u8,
        ])
    }

    /// A display command frame: prefix `0x7C`, then `base + modifier`.
    pub fn display_command(command: DisplayCommand, modifier: i32) -> Self {
        Self::from_bytes(vec![
            DISPLAY_PREFIX,
            (i32::from(command.base()) + modifier) as u8,
        ])
    }

    /// A raw text frame: UTF-8 payload bytes with no prefix.
    pub fn text(message: &str) -> Self {
        Self::from_bytes(message.as_bytes().to_vec())
    }

    /// The bare reset byte.
    pub fn reset() -> Self {
        Self::from_bytes(vec![RESET])
    }

    fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The wire bytes of this frame.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The wire size of this frame.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the frame carries no bytes (an empty text write).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Look up the device address offset for a display row.
///
/// The device addresses rows out of order: row 2 sits at a lower offset than
/// row 1. See the SerLCD v2.5 datasheet. Rows outside 0-3 are rejected, never
/// clamped.
pub fn row_offset(y: i32) -> Result<i32> {
    match y {
        0 => Ok(0x00),
        1 => Ok(0x40),
        2 => Ok(0x10),
        3 => Ok(0x30),
        _ => Err(ProtocolError::RowOutOfRange { y }),
    }
}

/// Convert a backlight percentage (0-100) to the device's modifier value.
///
/// The device expects a value between 0 and 29; the conversion rounds up, so
/// any non-zero percentage produces a visible backlight.
pub fn brightness_modifier(percent: i32) -> Result<i32> {
    if !(0..=100).contains(&percent) {
        return Err(ProtocolError::PercentOutOfRange { percent });
    }
    // ceil(29 * percent / 100) in integer arithmetic.
    Ok((29 * percent + 99) / 100)
}

fn cursor_position_frame(x: i32, y: i32) -> Result<Frame> {
    if x < 0 {
        return Err(ProtocolError::ColumnOutOfRange { x });
    }
    let offset = row_offset(y)?;
    Ok(Frame::cursor_command(
        CursorCommand::SetCursorPosition,
        offset + x,
    ))
}

/// Encode an operation into its on-wire frames.
///
/// Most operations produce exactly one frame; [`Operation::WriteAt`] produces
/// the cursor frame followed by the text frame. Validation happens here, so a
/// rejected operation produces no frames at all.
pub fn encode(operation: &Operation) -> Result<Vec<Frame>> {
    let frames = match operation {
        Operation::Clear => vec![Frame::cursor_command(CursorCommand::ClearDisplay, 0)],
        Operation::Reset => vec![Frame::reset()],
        Operation::ScrollLeft => vec![Frame::cursor_command(CursorCommand::ScrollLeft, 0)],
        Operation::ScrollRight => vec![Frame::cursor_command(CursorCommand::ScrollRight, 0)],
        Operation::SetSplashScreen => {
            return Err(ProtocolError::Unsupported("set as splash screen"))
        }
        Operation::SetBacklightLevel(level) => vec![Frame::display_command(
            DisplayCommand::SetBacklightBrightness,
            i32::from(level.modifier()),
        )],
        Operation::SetBacklightPercent(percent) => {
            let modifier = brightness_modifier(*percent)?;
            vec![Frame::display_command(
                DisplayCommand::SetBacklightBrightness,
                modifier,
            )]
        }
        Operation::SetCursorPosition { x, y } => vec![cursor_position_frame(*x, *y)?],
        Operation::SetCursorType(cursor) => {
            let command = match cursor {
                CursorType::None => CursorCommand::DisableCursor,
                CursorType::Underline => CursorCommand::EnableUnderlineCursor,
                CursorType::Box => CursorCommand::EnableBlinkingBoxCursor,
            };
            vec![Frame::cursor_command(command, 0)]
        }
        Operation::Write(text) => vec![Frame::text(text)],
        Operation::WriteAt { x, y, text } => {
            vec![cursor_position_frame(*x, *y)?, Frame::text(text)]
        }
    };
    Ok(frames)
}
