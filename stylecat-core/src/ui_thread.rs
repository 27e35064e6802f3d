// SPDX-License-Identifier: LGPL-3.0-only

//! # UI Thread Queue
//!
//! Style state is owned by the UI thread. Other threads hand work to it
//! through a [`UiHandle`]; the UI thread drains the queue with
//! [`UiThread::run_pending`] between frames.
//!
//! ```rust
//! use stylecat_core::ui_thread::UiThread;
//!
//! let ui = UiThread::new();
//! let handle = ui.handle();
//!
//! std::thread::spawn(move || {
//!     handle.run_on_ui_thread(|| println!("on the UI thread")).unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(ui.run_pending(), 1);
//! ```

use std::thread::{self, ThreadId};

use smol::channel::{self, Receiver, Sender, TryRecvError};

use crate::error::{CoreError, CoreResult};

type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// The task queue of the UI thread. Created on the UI thread.
pub struct UiThread {
    thread: ThreadId,
    sender: Sender<UiTask>,
    receiver: Receiver<UiTask>,
}

impl UiThread {
    /// Create the queue, making the current thread the UI thread.
    pub fn new() -> Self {
        let (sender, receiver) = channel::unbounded();
        Self {
            thread: thread::current().id(),
            sender,
            receiver,
        }
    }

    /// A handle for submitting work from any thread.
    pub fn handle(&self) -> UiHandle {
        UiHandle {
            thread: self.thread,
            sender: self.sender.clone(),
        }
    }

    /// Whether the current thread is the UI thread.
    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// The number of queued tasks.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Run all queued tasks and return how many ran.
    ///
    /// Does nothing when called off the UI thread.
    pub fn run_pending(&self) -> usize {
        if !self.is_ui_thread() {
            log::warn!("run_pending called off the UI thread");
            return 0;
        }

        let mut count = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(task) => {
                    task();
                    count += 1;
                },
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        count
    }

    /// Wait for the next task and run it.
    pub async fn run_next(&self) -> CoreResult<()> {
        let task = self.receiver.recv().await.map_err(|_| CoreError::UiThreadClosed)?;
        task();
        Ok(())
    }
}

impl Default for UiThread {
    fn default() -> Self {
        Self::new()
    }
}

/// Submits work to the UI thread.
#[derive(Clone)]
pub struct UiHandle {
    thread: ThreadId,
    sender: Sender<UiTask>,
}

impl UiHandle {
    /// Whether the current thread is the UI thread.
    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Run `task` on the UI thread.
    ///
    /// On the UI thread the task runs immediately; elsewhere it is queued.
    pub fn run_on_ui_thread<F>(&self, task: F) -> CoreResult<()>
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_ui_thread() {
            task();
            return Ok(());
        }
        self.sender
            .try_send(Box::new(task))
            .map_err(|_| CoreError::UiThreadClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_runs_immediately_on_ui_thread() {
        let ui = UiThread::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();

        ui.handle()
            .run_on_ui_thread(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(ui.run_pending(), 0);
    }

    #[test]
    fn test_queues_from_other_threads() {
        let ui = UiThread::new();
        let handle = ui.handle();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();

        thread::spawn(move || {
            assert!(!handle.is_ui_thread());
            for _ in 0..3 {
                let seen = seen.clone();
                handle
                    .run_on_ui_thread(move || {
                        seen.fetch_add(1, Ordering::SeqCst);
                    })
                    .unwrap();
            }
        })
        .join()
        .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(ui.pending(), 3);
        assert_eq!(ui.run_pending(), 3);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_run_next_waits_for_task() {
        let ui = UiThread::new();
        let handle = ui.handle();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();

        let worker = thread::spawn(move || {
            handle
                .run_on_ui_thread(move || {
                    seen.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        });

        smol::block_on(ui.run_next()).unwrap();
        worker.join().unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_closed_after_ui_thread_dropped() {
        let ui = UiThread::new();
        let handle = ui.handle();
        drop(ui);

        let result = thread::spawn(move || handle.run_on_ui_thread(|| {}))
            .join()
            .unwrap();
        assert!(matches!(result, Err(CoreError::UiThreadClosed)));
    }
}
