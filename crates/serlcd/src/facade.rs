use serlcd_protocol::{Brightness, CursorType, Position};

use crate::error::Result;

/// The operation surface of a serial LCD.
///
/// Implemented by the real driver ([`crate::SerLcd`]), the debug mock
/// ([`crate::MockSerialLcd`]), and any wrapper that decorates another
/// implementation ([`crate::MessageQueue`]).
///
/// Every method either rejects its arguments synchronously or queues the
/// operation and returns immediately; none of them block on device I/O. The
/// one exception is [`reset`](SerialLcd::reset), which writes its single byte
/// straight to the device.
pub trait SerialLcd {
    /// Clear the display.
    fn clear(&self) -> Result<()>;

    /// Reset the device to default settings.
    ///
    /// Sent synchronously, bypassing the paced queue. Only honored while the
    /// device is showing its splash screen; the device must be power cycled
    /// afterwards.
    fn reset(&self) -> Result<()>;

    /// Scroll the display left.
    fn scroll_left(&self) -> Result<()>;

    /// Scroll the display right.
    fn scroll_right(&self) -> Result<()>;

    /// Store the current output as the device's splash screen.
    ///
    /// The device family this driver targets does not implement the command;
    /// the call always fails with
    /// [`ProtocolError::Unsupported`](serlcd_protocol::ProtocolError).
    fn set_as_splash_screen(&self) -> Result<()>;

    /// Set the backlight to a percentage (0-100) of maximum brightness.
    fn set_backlight_percent(&self, percent: i32) -> Result<()>;

    /// Set the backlight to a predefined level.
    fn set_backlight_level(&self, level: Brightness) -> Result<()>;

    /// Move the cursor. The origin (0, 0) is the top left corner.
    fn set_cursor_position(&self, x: i32, y: i32) -> Result<()>;

    /// Select the cursor display style.
    fn set_cursor_type(&self, cursor: CursorType) -> Result<()>;

    /// Write a message at the current cursor position.
    fn write(&self, message: &str) -> Result<()>;

    /// Move the cursor to `position`.
    fn set_cursor(&self, position: Position) -> Result<()> {
        self.set_cursor_position(position.x, position.y)
    }

    /// Write a message at a specific position.
    ///
    /// Issued as two independent operations, a cursor move followed by the
    /// write; each is queued (and paced) on its own.
    fn write_at(&self, x: i32, y: i32, message: &str) -> Result<()> {
        self.set_cursor_position(x, y)?;
        self.write(message)
    }

    /// Write a message at a specific position.
    fn write_at_position(&self, position: Position, message: &str) -> Result<()> {
        self.write_at(position.x, position.y, message)
    }
}
