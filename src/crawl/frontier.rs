// src/crawl/frontier.rs
// =============================================================================
// The queue of URLs waiting to be fetched.
//
// - push() never blocks and never refuses a URL (the queue is unbounded)
// - pop_blocking() waits until a URL shows up or a timeout runs out
//
// The scheduler's main loop is the consumer; fetch tasks running on other
// threads are the producers. A timeout is not an error: it is how the
// scheduler learns that it should check whether the crawl is finished.
//
// Rust concepts:
// - Mutex<VecDeque>: FIFO queue guarded by a lock (held only for a push
//   or a pop, never across an .await)
// - tokio::sync::Notify: wakes a waiting consumer when something is pushed
// =============================================================================

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::{timeout_at, Instant};

// Result of waiting on the frontier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popped {
    Url(String),
    /// Nothing arrived before the timeout
    TimedOut,
}

#[derive(Debug, Default)]
pub struct Frontier {
    queue: Mutex<VecDeque<String>>,
    ready: Notify,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, url: String) {
        self.lock().push_back(url);
        // If nobody is waiting, Notify keeps one permit for the next waiter,
        // so a push that lands between a failed pop and the wait isn't lost
        self.ready.notify_one();
    }

    // Waits for the next URL, for at most `timeout`
    pub async fn pop_blocking(&self, timeout: Duration) -> Popped {
        let deadline = Instant::now() + timeout;

        loop {
            if let Some(url) = self.try_pop() {
                return Popped::Url(url);
            }

            if timeout_at(deadline, self.ready.notified()).await.is_err() {
                // One last look in case a push raced the deadline
                return match self.try_pop() {
                    Some(url) => Popped::Url(url),
                    None => Popped::TimedOut,
                };
            }
        }
    }

    pub fn try_pop(&self) -> Option<String> {
        self.lock().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock can't leave a VecDeque half-updated,
    // so a poisoned lock is still safe to use
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not a tokio mpsc channel?
//    - The scheduler needs to ask "is the queue empty right now?" when it
//      decides whether the crawl is over; a channel receiver can't peek
//    - Every fetch task pushes, so senders would have to be cloned into each
//      task and kept alive, which also stops recv() from ever returning None
//
// 2. Why std::sync::Mutex and not tokio::sync::Mutex?
//    - The lock is held for a single push_back/pop_front and never across an
//      .await, which is exactly the case the std lock is meant for
//
// 3. Why a deadline instead of passing `timeout` to every wait?
//    - A wake-up can find the queue empty again (another consumer, or a
//      stale permit). Waiting against a fixed deadline stops those spurious
//      wake-ups from stretching the total wait past `timeout`
// -----------------------------------------------------------------------------
