//! The transmit queue and its background drain loop.
//!
//! This is the throttling half of the driver: producers append deferred send
//! actions to an unbounded FIFO, and a dedicated thread pops at most one per
//! fixed interval and runs it. Strict insertion order, no reordering, no
//! merging, no backpressure. A failed action is logged and dropped, never
//! retried; the loop itself never terminates, so the thread lives until the
//! process exits.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;

/// A deferred, zero-argument send action.
///
/// Owned solely by the queue between enqueue and dequeue.
pub type Action = Box<dyn FnOnce() -> Result<()> + Send + 'static>;

/// An unbounded FIFO drained by a background thread, one action per tick.
pub struct Pacer {
    queue: Arc<Mutex<VecDeque<Action>>>,
}

impl Pacer {
    /// Spawn the drain thread and return the producer handle.
    ///
    /// `name` labels the thread so the frame-level and message-level pacers
    /// can be told apart in logs and backtraces.
    pub fn spawn(name: &str, interval: Duration) -> std::io::Result<Self> {
        let queue: Arc<Mutex<VecDeque<Action>>> = Arc::new(Mutex::new(VecDeque::new()));
        let worker = Arc::clone(&queue);

        thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                debug!(interval_ms = interval.as_millis() as u64, "pacer started");
                loop {
                    // Hold the lock only to pop; the action runs unlocked so
                    // producers are never blocked behind a slow transport.
                    let action = worker
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .pop_front();

                    if let Some(action) = action {
                        if let Err(err) = action() {
                            warn!(error = %err, "paced send failed, dropping action");
                        }
                    }

                    thread::sleep(interval);
                }
            })?;

        Ok(Self { queue })
    }

    /// Append an action to the tail of the queue.
    ///
    /// Never blocks beyond the queue mutex and never fails; the queue is
    /// unbounded. Safe to call from any thread.
    pub fn enqueue(&self, action: impl FnOnce() -> Result<()> + Send + 'static) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Box::new(action));
    }

    /// Number of actions waiting to be sent.
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use super::*;

    fn wait_until(deadline: Duration, mut done: impl FnMut() -> bool) {
        let start = Instant::now();
        while !done() {
            assert!(start.elapsed() < deadline, "timed out waiting for pacer");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn executes_enqueued_actions() {
        let pacer = Pacer::spawn("test-pacer", Duration::from_millis(1)).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let counter = Arc::clone(&counter);
            pacer.enqueue(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }

        wait_until(Duration::from_secs(2), || {
            counter.load(Ordering::SeqCst) == 3
        });
        assert_eq!(pacer.pending(), 0);
    }

    #[test]
    fn preserves_insertion_order() {
        let pacer = Pacer::spawn("test-pacer-order", Duration::from_millis(1)).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..10 {
            let seen = Arc::clone(&seen);
            pacer.enqueue(move || {
                seen.lock().unwrap().push(i);
                Ok(())
            });
        }

        wait_until(Duration::from_secs(2), || seen.lock().unwrap().len() == 10);
        assert_eq!(*seen.lock().unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn at_most_one_action_per_tick() {
        let interval = Duration::from_millis(25);
        let pacer = Pacer::spawn("test-pacer-tick", interval).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();

        for _ in 0..3 {
            let counter = Arc::clone(&counter);
            pacer.enqueue(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }

        wait_until(Duration::from_secs(5), || {
            counter.load(Ordering::SeqCst) == 3
        });
        // Two full intervals must separate the first action from the third.
        assert!(start.elapsed() >= interval * 2);
    }

    #[test]
    fn failed_action_does_not_stop_the_loop() {
        let pacer = Pacer::spawn("test-pacer-fail", Duration::from_millis(1)).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));

        pacer.enqueue(|| {
            Err(std::io::Error::other("wire unplugged").into())
        });
        let after = Arc::clone(&counter);
        pacer.enqueue(move || {
            after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        wait_until(Duration::from_secs(2), || {
            counter.load(Ordering::SeqCst) == 1
        });
    }

    #[test]
    fn enqueue_returns_without_waiting() {
        let pacer = Pacer::spawn("test-pacer-nb", Duration::from_secs(60)).unwrap();
        let start = Instant::now();

        for _ in 0..100 {
            pacer.enqueue(|| Ok(()));
        }

        // Nothing has been paced out yet; the producers never waited on it.
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(pacer.pending() >= 99);
    }
}
