//! Message-granularity re-pacing for any facade implementation.

use std::sync::Arc;
use std::time::Duration;

use serlcd_protocol::{Brightness, CursorType};

use crate::error::Result;
use crate::facade::SerialLcd;
use crate::pacer::Pacer;

/// How long each message stays visible before the next replaces it.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Wraps an LCD so that written messages are displayed one at a time, each
/// for a fixed duration, instead of overwriting each other immediately.
///
/// Only [`write`](SerialLcd::write) is re-paced; every other operation is
/// forwarded straight to the inner implementation. This is the same
/// queue-and-drain mechanism the frame-level driver uses, just tuned for a
/// human reader instead of the device's input buffer.
pub struct MessageQueue<L> {
    inner: Arc<L>,
    pacer: Pacer,
}

impl<L: SerialLcd + Send + Sync + 'static> MessageQueue<L> {
    /// Wrap `inner` with the default display duration.
    pub fn new(inner: L) -> Result<Self> {
        Self::with_display_duration(inner, DEFAULT_DISPLAY_DURATION)
    }

    /// Wrap `inner` with an explicit display duration.
    pub fn with_display_duration(inner: L, duration: Duration) -> Result<Self> {
        let pacer = Pacer::spawn("serlcd-messages", duration)?;
        Ok(Self {
            inner: Arc::new(inner),
            pacer,
        })
    }

    /// Number of messages waiting to be displayed.
    pub fn pending_messages(&self) -> usize {
        self.pacer.pending()
    }

    /// Borrow the wrapped implementation.
    pub fn get_ref(&self) -> &L {
        &self.inner
    }
}

impl<L: SerialLcd + Send + Sync + 'static> SerialLcd for MessageQueue<L> {
    fn clear(&self) -> Result<()> {
        self.inner.clear()
    }

    fn reset(&self) -> Result<()> {
        self.inner.reset()
    }

    fn scroll_left(&self) -> Result<()> {
        self.inner.scroll_left()
    }

    fn scroll_right(&self) -> Result<()> {
        self.inner.scroll_right()
    }

    fn set_as_splash_screen(&self) -> Result<()> {
        self.inner.set_as_splash_screen()
    }

    fn set_backlight_percent(&self, percent: i32) -> Result<()> {
        self.inner.set_backlight_percent(percent)
    }

    fn set_backlight_level(&self, level: Brightness) -> Result<()> {
        self.inner.set_backlight_level(level)
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> Result<()> {
        self.inner.set_cursor_position(x, y)
    }

    fn set_cursor_type(&self, cursor: CursorType) -> Result<()> {
        self.inner.set_cursor_type(cursor)
    }

    /// Queue the message; it is written to the inner LCD on the message
    /// pacer's schedule, after everything queued before it has had its turn
    /// on screen.
    fn write(&self, message: &str) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        let message = message.to_owned();
        self.pacer.enqueue(move || inner.write(&message));
        Ok(())
    }

    /// Positioned writes go straight through; only plain messages are
    /// time-boxed.
    fn write_at(&self, x: i32, y: i32, message: &str) -> Result<()> {
        self.inner.write_at(x, y, message)
    }
}

impl<L> std::fmt::Debug for MessageQueue<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageQueue")
            .field("pacer", &self.pacer)
            .finish_non_exhaustive()
    }
}
