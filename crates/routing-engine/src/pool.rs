//! Worker pools: fixed-size groups of OS threads draining one task queue
//! each, running the corresponding algorithm under the coordinator lock.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use log::{error, warn};

use crate::coordinator::GraphHandle;
use crate::error::EngineError;
use crate::task::Task;

/// A fixed pool of worker threads draining a single task queue.
///
/// Dropping the pool does not stop the workers — they run until their
/// queue's sender side (and every clone of it) is dropped, at which point
/// `recv()` returns `Err` and each thread exits. `join()` waits for that.
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `count` threads named `{name}-{i}`, each looping on
    /// `rx.recv()` and dispatching to `graph`. Fails as soon as any one
    /// thread fails to spawn — threads already spawned keep running and
    /// are torn down normally once their queue's senders are dropped.
    pub fn spawn(
        name: &'static str,
        count: usize,
        rx: Receiver<Task>,
        graph: GraphHandle,
    ) -> Result<Self, EngineError> {
        let mut handles = Vec::with_capacity(count);
        for i in 0..count {
            let rx = rx.clone();
            let graph = graph.clone();
            let thread_name = format!("{name}-{i}");
            let handle = thread::Builder::new()
                .name(thread_name.clone())
                .spawn(move || worker_loop(&rx, &graph))
                .map_err(|source| EngineError::Spawn { name: thread_name, source })?;
            handles.push(handle);
        }
        Ok(Self { handles })
    }

    /// Wait for every worker thread to exit. Only returns once all
    /// `TaskQueue` senders feeding this pool have been dropped.
    pub fn join(self) {
        for h in self.handles {
            if h.join().is_err() {
                error!("worker thread panicked during shutdown join");
            }
        }
    }
}

fn worker_loop(rx: &Receiver<Task>, graph: &GraphHandle) {
    while let Ok(task) = rx.recv() {
        dispatch(graph, task);
    }
}

/// Run one task to completion, isolating any panic in the algorithm so a
/// single bad task cannot take the worker thread down. The panic is
/// converted to [`EngineError::WorkerPanic`] and sent back to the waiting
/// handler — a worker must never die silently (spec §7).
fn dispatch(graph: &GraphHandle, task: Task) {
    match task {
        Task::Route { src, dst, respond } => {
            let result = catch_unwind(AssertUnwindSafe(|| graph.route(src, dst)))
                .unwrap_or_else(|_| panicked());
            if respond.send(result).is_err() {
                warn!("route task's handler disconnected before the response could be sent");
            }
        }
        Task::Update { edge, speed, respond } => {
            let result = catch_unwind(AssertUnwindSafe(|| graph.update(edge, speed)))
                .unwrap_or_else(|_| panicked());
            if respond.send(result).is_err() {
                warn!("update task's handler disconnected before the response could be sent");
            }
        }
        Task::Predict { edge, respond } => {
            let result = catch_unwind(AssertUnwindSafe(|| graph.predict(edge)))
                .unwrap_or_else(|_| panicked());
            if respond.send(result).is_err() {
                warn!("predict task's handler disconnected before the response could be sent");
            }
        }
    }
}

fn panicked<T>() -> Result<T, EngineError> {
    Err(EngineError::WorkerPanic)
}
