//! Drive a real display attached to a serial port.
//!
//! ```text
//! cargo run --example hello -- /dev/ttyUSB0
//! ```

use std::time::Duration;

use serlcd::{Brightness, SerLcd, SerialLcd};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let port = serialport::new(path, 9600)
        .timeout(Duration::from_secs(1))
        .open()?;

    let lcd = SerLcd::new(port)?;
    lcd.clear()?;
    lcd.set_backlight_level(Brightness::Medium)?;
    lcd.write("Hello, world!")?;

    // The pacer transmits on its own schedule; give it time to drain before
    // the process exits.
    while lcd.pending_frames() > 0 {
        std::thread::sleep(Duration::from_millis(20));
    }
    std::thread::sleep(Duration::from_millis(100));

    Ok(())
}
