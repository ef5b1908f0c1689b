//! A no-device stand-in for development and tests.

use serlcd_protocol::{Brightness, CursorType};
use tracing::debug;

use crate::error::Result;
use crate::facade::SerialLcd;

/// A mock LCD that accepts every operation and reports writes to the log.
///
/// Useful when the real device is not attached: wiring code can keep the same
/// [`SerialLcd`] value and messages show up via `tracing` instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSerialLcd;

impl MockSerialLcd {
    /// Create a mock LCD.
    pub fn new() -> Self {
        Self
    }
}

impl SerialLcd for MockSerialLcd {
    fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }

    fn scroll_left(&self) -> Result<()> {
        Ok(())
    }

    fn scroll_right(&self) -> Result<()> {
        Ok(())
    }

    fn set_as_splash_screen(&self) -> Result<()> {
        Ok(())
    }

    fn set_backlight_percent(&self, _percent: i32) -> Result<()> {
        Ok(())
    }

    fn set_backlight_level(&self, _level: Brightness) -> Result<()> {
        Ok(())
    }

    fn set_cursor_position(&self, _x: i32, _y: i32) -> Result<()> {
        Ok(())
    }

    fn set_cursor_type(&self, _cursor: CursorType) -> Result<()> {
        Ok(())
    }

    fn write(&self, message: &str) -> Result<()> {
        debug!(message, "mock lcd write");
        Ok(())
    }
}
