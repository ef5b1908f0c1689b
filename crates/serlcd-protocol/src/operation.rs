//! The typed operation surface.

/// A cursor position with the origin (0, 0) at the top left of the display.
///
/// Components are validated at encode time: `x` must not be negative and `y`
/// must name one of the device's four rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Column, counted from the left.
    pub x: i32,
    /// Row, counted from the top.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Predefined backlight brightness levels.
///
/// These are raw device modifier values, not percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Brightness {
    /// Backlight off.
    Off = 0x00,
    /// Low brightness.
    Low = 0x0C,
    /// Medium brightness.
    Medium = 0x16,
    /// Maximum brightness.
    High = 0x1D,
}

impl Brightness {
    /// The raw modifier value sent to the device.
    pub fn modifier(self) -> u8 {
        self as u8
    }
}

/// Cursor display styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorType {
    /// No visible cursor.
    None,
    /// Blinking underline.
    Underline,
    /// Blinking box.
    Box,
}

/// A display operation, dispatched to byte frames by [`crate::codec::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Clear the display.
    Clear,
    /// Reset the device to default settings.
    ///
    /// Encodes to the bare reset byte. The driver sends it synchronously,
    /// outside the paced queue; it is only honored while the splash screen is
    /// showing, and the device needs a power cycle afterwards.
    Reset,
    /// Scroll the display left.
    ScrollLeft,
    /// Scroll the display right.
    ScrollRight,
    /// Store the current output as the splash screen.
    ///
    /// Always rejected as unsupported.
    SetSplashScreen,
    /// Set the backlight to a predefined level.
    SetBacklightLevel(Brightness),
    /// Set the backlight to a percentage of maximum brightness (0-100).
    SetBacklightPercent(i32),
    /// Move the cursor to an absolute position.
    SetCursorPosition { x: i32, y: i32 },
    /// Select the cursor display style.
    SetCursorType(CursorType),
    /// Write text at the current cursor position.
    Write(String),
    /// Move the cursor, then write text.
    ///
    /// Encodes to the same two frames as a [`Operation::SetCursorPosition`]
    /// followed by a [`Operation::Write`]; the frames stay separate and are
    /// queued independently, never merged.
    WriteAt { x: i32, y: i32, text: String },
}
