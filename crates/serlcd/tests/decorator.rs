//! The message-granularity decorator: only `write` is re-paced, everything
//! else reaches the wrapped implementation immediately.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use serlcd::{Brightness, CursorType, MessageQueue, SerialLcd};

/// An LCD that records which facade calls reached it.
#[derive(Clone, Default)]
struct RecordingLcd {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingLcd {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> serlcd::Result<()> {
        self.calls.lock().unwrap().push(call.into());
        Ok(())
    }
}

impl SerialLcd for RecordingLcd {
    fn clear(&self) -> serlcd::Result<()> {
        self.record("clear")
    }

    fn reset(&self) -> serlcd::Result<()> {
        self.record("reset")
    }

    fn scroll_left(&self) -> serlcd::Result<()> {
        self.record("scroll_left")
    }

    fn scroll_right(&self) -> serlcd::Result<()> {
        self.record("scroll_right")
    }

    fn set_as_splash_screen(&self) -> serlcd::Result<()> {
        self.record("set_as_splash_screen")
    }

    fn set_backlight_percent(&self, percent: i32) -> serlcd::Result<()> {
        self.record(format!("set_backlight_percent({percent})"))
    }

    fn set_backlight_level(&self, _level: Brightness) -> serlcd::Result<()> {
        self.record("set_backlight_level")
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> serlcd::Result<()> {
        self.record(format!("set_cursor_position({x}, {y})"))
    }

    fn set_cursor_type(&self, _cursor: CursorType) -> serlcd::Result<()> {
        self.record("set_cursor_type")
    }

    fn write(&self, message: &str) -> serlcd::Result<()> {
        self.record(format!("write({message})"))
    }

    fn write_at(&self, x: i32, y: i32, message: &str) -> serlcd::Result<()> {
        self.record(format!("write_at({x}, {y}, {message})"))
    }
}

fn wait_for_calls(lcd: &RecordingLcd, count: usize) {
    let start = Instant::now();
    while lcd.calls().len() < count {
        assert!(
            start.elapsed() < Duration::from_secs(10),
            "timed out waiting for {count} calls, got {:?}",
            lcd.calls()
        );
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn messages_arrive_in_order_one_per_tick() {
    let inner = RecordingLcd::default();
    let interval = Duration::from_millis(25);
    let queue = MessageQueue::with_display_duration(inner.clone(), interval).unwrap();
    let start = Instant::now();

    queue.write("one").unwrap();
    queue.write("two").unwrap();
    queue.write("three").unwrap();

    wait_for_calls(&inner, 3);
    assert_eq!(inner.calls(), vec!["write(one)", "write(two)", "write(three)"]);
    // The third message waited at least two display durations for its turn.
    assert!(start.elapsed() >= interval * 2);
}

#[test]
fn non_write_operations_forward_immediately() {
    let inner = RecordingLcd::default();
    let queue = MessageQueue::with_display_duration(inner.clone(), Duration::from_secs(60)).unwrap();

    // Let the pacer get past its initial (empty) tick and into its sleep, so
    // the queued write below cannot be drained during the test.
    thread::sleep(Duration::from_millis(200));

    queue.write("queued for later").unwrap();
    queue.clear().unwrap();
    queue.scroll_left().unwrap();
    queue.set_backlight_level(Brightness::Low).unwrap();
    queue.set_cursor_position(3, 1).unwrap();

    // The queued write has not gone anywhere, but the forwarded calls have.
    assert_eq!(
        inner.calls(),
        vec![
            "clear",
            "scroll_left",
            "set_backlight_level",
            "set_cursor_position(3, 1)"
        ]
    );
    assert_eq!(queue.pending_messages(), 1);
}

#[test]
fn positioned_writes_are_not_repaced() {
    let inner = RecordingLcd::default();
    let queue = MessageQueue::with_display_duration(inner.clone(), Duration::from_secs(60)).unwrap();

    queue.write_at(2, 0, "status").unwrap();

    assert_eq!(inner.calls(), vec!["write_at(2, 0, status)"]);
    assert_eq!(queue.pending_messages(), 0);
}

#[test]
fn wrapping_does_not_alter_failures() {
    let inner = RecordingLcd::default();
    let queue = MessageQueue::with_display_duration(inner.clone(), Duration::from_secs(60)).unwrap();

    // The recording inner accepts everything, so the decorator does too.
    queue.set_as_splash_screen().unwrap();
    assert_eq!(inner.calls(), vec!["set_as_splash_screen"]);
}
