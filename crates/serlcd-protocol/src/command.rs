//! Device opcode tables.
//!
//! These values are specified in the SerLCD v2.5 datasheet. A command on the
//! wire is a prefix byte followed by `base + modifier`; most commands use a
//! modifier of zero.

/// Prefix byte for cursor commands.
pub const CURSOR_PREFIX: u8 = 0xFE;

/// Prefix byte for display commands.
pub const DISPLAY_PREFIX: u8 = 0x7C;

/// Raw reset byte.
///
/// Only honored while the device is showing its splash screen, and the device
/// must be power cycled afterwards. Sent bare, without a command prefix.
pub const RESET: u8 = 0x12;

/// Commands controlling the cursor, sent after [`CURSOR_PREFIX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CursorCommand {
    /// Clear the display.
    ClearDisplay = 0x01,
    /// Hide the cursor.
    DisableCursor = 0x0C,
    /// Show the blinking box cursor.
    EnableBlinkingBoxCursor = 0x0D,
    /// Show the underline cursor.
    EnableUnderlineCursor = 0x0E,
    /// Move the cursor left one position.
    MoveCursorLeft = 0x10,
    /// Move the cursor right one position.
    MoveCursorRight = 0x14,
    /// Scroll the display left.
    ScrollLeft = 0x18,
    /// Scroll the display right.
    ScrollRight = 0x1C,
    /// Move the cursor to an absolute position.
    ///
    /// This value addresses the first column of the first row. Other cells are
    /// addressed by adding a row offset (see [`crate::codec::row_offset`])
    /// plus the column index.
    SetCursorPosition = 0x80,
}

impl CursorCommand {
    /// The base opcode byte.
    pub fn base(self) -> u8 {
        self as u8
    }
}

/// Commands controlling the display itself, sent after [`DISPLAY_PREFIX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayCommand {
    /// Turn the display off.
    DisableDisplay = 0x08,
    /// Toggle display of the splash screen at power-on.
    ToggleSplashScreen = 0x09,
    /// Store the current output as the splash screen.
    SetSplashScreen = 0x0A,
    /// Set the backlight brightness.
    ///
    /// This value alone is the lowest brightness (off). Other levels are
    /// selected by adding a modifier; the datasheet documents 0x01 through
    /// 0x1D (maximum).
    SetBacklightBrightness = 0x80,
}

impl DisplayCommand {
    /// The base opcode byte.
    pub fn base(self) -> u8 {
        self as u8
    }
}
