//! The real driver: encode, queue, pace, transmit.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serlcd_protocol::{encode, Brightness, CursorType, Operation, RESET};
use tracing::debug;

use crate::error::Result;
use crate::facade::SerialLcd;
use crate::pacer::Pacer;

/// How long the pacer waits between frames.
///
/// The device needs a short gap between writes or it freezes; tens of
/// milliseconds is comfortably above its processing limit at 9600 baud.
pub const DEFAULT_SEND_INTERVAL: Duration = Duration::from_millis(10);

/// A serial LCD attached to any byte-oriented transport.
///
/// Operations are encoded into command frames and queued; a background pacer
/// transmits one frame per interval so the device is never overwhelmed. The
/// transport is typically a serial port, but anything `Write + Send` works —
/// the driver only ever writes.
pub struct SerLcd<T> {
    transport: Arc<Mutex<T>>,
    pacer: Pacer,
}

impl<T: Write + Send + 'static> SerLcd<T> {
    /// Create a driver with the default send interval.
    pub fn new(transport: T) -> Result<Self> {
        Self::with_send_interval(transport, DEFAULT_SEND_INTERVAL)
    }

    /// Create a driver with an explicit send interval.
    pub fn with_send_interval(transport: T, interval: Duration) -> Result<Self> {
        let pacer = Pacer::spawn("serlcd-send", interval)?;
        Ok(Self {
            transport: Arc::new(Mutex::new(transport)),
            pacer,
        })
    }

    /// Encode `operation` and queue one send action per frame.
    ///
    /// Rejections happen here, synchronously; nothing is queued unless the
    /// whole operation encoded cleanly.
    fn submit(&self, operation: Operation) -> Result<()> {
        for frame in encode(&operation)? {
            let transport = Arc::clone(&self.transport);
            self.pacer.enqueue(move || {
                debug!(len = frame.len(), "transmitting frame");
                let mut guard = transport.lock().unwrap_or_else(PoisonError::into_inner);
                guard.write_all(frame.as_bytes())?;
                guard.flush()?;
                Ok(())
            });
        }
        Ok(())
    }

    /// Number of frames waiting to be transmitted.
    pub fn pending_frames(&self) -> usize {
        self.pacer.pending()
    }
}

impl<T: Write + Send + 'static> SerialLcd for SerLcd<T> {
    fn clear(&self) -> Result<()> {
        self.submit(Operation::Clear)
    }

    /// Writes the reset byte directly, bypassing the queue.
    ///
    /// This is the one facade call that touches the transport synchronously;
    /// issued while paced frames are still in flight it can interleave with
    /// them, which is inherent to the device's out-of-band reset.
    fn reset(&self) -> Result<()> {
        debug!("resetting device");
        let mut guard = self.transport.lock().unwrap_or_else(PoisonError::into_inner);
        guard.write_all(&[RESET])?;
        guard.flush()?;
        Ok(())
    }

    fn scroll_left(&self) -> Result<()> {
        self.submit(Operation::ScrollLeft)
    }

    fn scroll_right(&self) -> Result<()> {
        self.submit(Operation::ScrollRight)
    }

    fn set_as_splash_screen(&self) -> Result<()> {
        self.submit(Operation::SetSplashScreen)
    }

    fn set_backlight_percent(&self, percent: i32) -> Result<()> {
        self.submit(Operation::SetBacklightPercent(percent))
    }

    fn set_backlight_level(&self, level: Brightness) -> Result<()> {
        self.submit(Operation::SetBacklightLevel(level))
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> Result<()> {
        self.submit(Operation::SetCursorPosition { x, y })
    }

    fn set_cursor_type(&self, cursor: CursorType) -> Result<()> {
        self.submit(Operation::SetCursorType(cursor))
    }

    fn write(&self, message: &str) -> Result<()> {
        self.submit(Operation::Write(message.to_owned()))
    }
}

impl<T> std::fmt::Debug for SerLcd<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerLcd")
            .field("pacer", &self.pacer)
            .finish_non_exhaustive()
    }
}
