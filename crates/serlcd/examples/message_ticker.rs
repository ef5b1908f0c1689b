//! Show the message-granularity decorator over the mock LCD.
//!
//! Each line stays "on screen" (here: in the log) for two seconds before the
//! next replaces it.
//!
//! ```text
//! cargo run --example message-ticker
//! ```

use std::time::Duration;

use serlcd::{MessageQueue, MockSerialLcd, SerialLcd};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let ticker = MessageQueue::with_display_duration(MockSerialLcd::new(), Duration::from_secs(2))?;

    for line in ["service: ok", "queue depth: 3", "uptime: 14d"] {
        ticker.write(line)?;
    }

    while ticker.pending_messages() > 0 {
        std::thread::sleep(Duration::from_millis(100));
    }
    std::thread::sleep(Duration::from_secs(2));

    Ok(())
}
