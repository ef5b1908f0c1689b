//! Paced driver for SerLCD-class serial character displays.
//!
//! The device freezes if bytes arrive back to back, so nothing is written to
//! the serial link directly. Every operation is encoded into command frames
//! (see [`serlcd_protocol`]) and pushed onto an unbounded FIFO; a background
//! pacer thread drains at most one frame per fixed interval. Callers never
//! block on device I/O.
//!
//! The same queue-and-pace pattern exists at a second granularity:
//! [`MessageQueue`] wraps any [`SerialLcd`] implementation and re-paces whole
//! messages, so each one stays on screen for a while before the next replaces
//! it.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use serlcd::{Brightness, SerLcd, SerialLcd};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let port = serialport::new("/dev/ttyUSB0", 9600)
//!     .timeout(Duration::from_secs(1))
//!     .open()?;
//!
//! let lcd = SerLcd::new(port)?;
//! lcd.clear()?;
//! lcd.set_backlight_level(Brightness::Medium)?;
//! lcd.write("Hello, world!")?;
//! # Ok(()) }
//! ```

pub mod decorator;
pub mod driver;
pub mod error;
pub mod facade;
pub mod mock;
pub mod pacer;

pub use decorator::{MessageQueue, DEFAULT_DISPLAY_DURATION};
pub use driver::{SerLcd, DEFAULT_SEND_INTERVAL};
pub use error::{LcdError, Result};
pub use facade::SerialLcd;
pub use mock::MockSerialLcd;
pub use serlcd_protocol::{Brightness, CursorType, Position};
