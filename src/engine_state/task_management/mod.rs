//! # Task Management System
//!
//! This module provides the worker pool the renderer spreads its rows over.
//!
//! ## Architecture Overview
//!
//! - `TaskManager`: Central coordinator for task distribution and worker management
//! - `Task`: A unit of work executed on a worker thread
//! - `TaskResult`: The result of a completed task, applied to the frame
//! - `TaskChannel`: Communication channel between the driving thread and one worker
//!
//! Each worker is a `std::thread` with its own task channel and result
//! channel. At most [`MAX_TASKS_IN_FLIGHT`] tasks are handed to a worker at a
//! time; the rest wait in a FIFO queue and are dispatched round-robin as
//! workers free up.
//!
//! ## Task Lifecycle
//! 1. Tasks are published via `TaskManager::publish_task()`
//! 2. The manager hands them to available workers, or queues them
//! 3. Workers process tasks and send back results
//! 4. Results are applied to the frame in `process_completed_tasks()` (polling)
//!    or `wait_for_completion()` (blocking until everything is done)
//!
//! ## Example Usage
//! ```rust,ignore
//! let mut task_manager = TaskManager::new(4);
//! for task in tasks {
//!     task_manager.publish_task(task);
//! }
//! task_manager.wait_for_completion(&mut frame)?;
//! ```

pub mod task;

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use image::RgbImage;
use log::info;
use task::{Task, TaskResult};

use crate::error::RenderError;

/// A communication channel between the driving thread and a worker thread.
///
/// # Fields
/// - `task_sender`: Sends tasks to the worker
/// - `result_receiver`: Receives task results from the worker
/// - `num_tasks_in_flight`: Number of tasks sent but not yet collected
/// - `worker`: Handle to the worker thread, joined when the manager drops
#[derive(Debug)]
pub struct TaskChannel {
    task_sender: Sender<Box<dyn Task + Send>>,
    result_receiver: Receiver<Box<dyn TaskResult + Send>>,
    num_tasks_in_flight: usize,
    worker: JoinHandle<()>,
}

/// Manages a pool of worker threads and coordinates task execution.
///
/// Dropping the manager closes every task channel, which ends the worker
/// loops, and then joins the threads.
pub struct TaskManager {
    channels: Vec<TaskChannel>,
    queued_tasks: VecDeque<Box<dyn Task + Send>>,
    current_channel: usize,
}

/// Maximum number of tasks that can be in flight per worker channel.
pub const MAX_TASKS_IN_FLIGHT: usize = 1;

impl TaskManager {
    /// Creates a new `TaskManager` with `num_workers` worker threads.
    ///
    /// A request for zero workers still starts one, so published work always
    /// has somewhere to run.
    pub fn new(num_workers: usize) -> Self {
        let num_workers = num_workers.max(1);
        let mut channels = Vec::with_capacity(num_workers);

        info!(
            "Starting {} render worker(s), available parallelism: {:?}",
            num_workers,
            thread::available_parallelism()
        );

        for _ in 0..num_workers {
            let (task_tx, task_rx) = channel::<Box<dyn Task + Send>>();
            let (result_tx, result_rx) = channel::<Box<dyn TaskResult + Send>>();

            let task_closure = move || {
                while let Ok(task) = task_rx.recv() {
                    let result = task.process();
                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
            };

            channels.push(TaskChannel {
                task_sender: task_tx,
                result_receiver: result_rx,
                num_tasks_in_flight: 0,
                worker: thread::spawn(task_closure),
            });
        }

        TaskManager {
            channels,
            queued_tasks: VecDeque::new(),
            current_channel: 0,
        }
    }

    /// Number of worker threads.
    pub fn num_workers(&self) -> usize {
        self.channels.len()
    }

    /// Number of tasks waiting for a free worker.
    pub fn num_queued(&self) -> usize {
        self.queued_tasks.len()
    }

    /// Number of tasks handed to workers whose results have not been collected.
    pub fn num_in_flight(&self) -> usize {
        self.channels
            .iter()
            .map(|channel| channel.num_tasks_in_flight)
            .sum()
    }

    /// Whether any published task has not had its result applied yet.
    pub fn has_pending_work(&self) -> bool {
        !self.queued_tasks.is_empty() || self.num_in_flight() > 0
    }

    /// Attempts to send a task to a specific worker channel.
    ///
    /// Returns the task back if the worker has hung up, so it can be requeued.
    fn try_send_task(
        &mut self,
        task: Box<dyn Task + Send>,
        channel_idx: usize,
    ) -> Result<(), Box<dyn Task + Send>> {
        match self.channels[channel_idx].task_sender.send(task) {
            Ok(_) => {
                self.channels[channel_idx].num_tasks_in_flight += 1;
                Ok(())
            }
            Err(task) => Err(task.0),
        }
    }

    /// Finds a worker channel that can accept a new task, round-robin from
    /// the last used one.
    fn find_available_channel(&self) -> Option<usize> {
        if self.channels.is_empty() {
            return None;
        }

        let start_channel = self.current_channel;
        let mut current = start_channel;

        loop {
            if self.channels[current].num_tasks_in_flight < MAX_TASKS_IN_FLIGHT {
                return Some(current);
            }
            current = (current + 1) % self.channels.len();
            if current == start_channel {
                return None;
            }
        }
    }

    /// Publishes a new task for execution.
    ///
    /// # Returns
    /// - `true` if the task was immediately handed to a worker
    /// - `false` if the task was queued because all workers are busy
    pub fn publish_task(&mut self, task: Box<dyn Task + Send>) -> bool {
        match self.find_available_channel() {
            Some(channel_idx) => match self.try_send_task(task, channel_idx) {
                Ok(_) => {
                    self.current_channel = (channel_idx + 1) % self.channels.len();
                    true
                }
                Err(task) => {
                    self.queued_tasks.push_back(task);
                    false
                }
            },
            None => {
                self.queued_tasks.push_back(task);
                false
            }
        }
    }

    /// Hands queued tasks to free workers, oldest first, until either the
    /// queue is empty or every worker is busy.
    pub fn process_queued_tasks(&mut self) {
        while let Some(channel_idx) = self.find_available_channel() {
            let Some(task) = self.queued_tasks.pop_front() else {
                return;
            };
            match self.try_send_task(task, channel_idx) {
                Ok(_) => {
                    self.current_channel = (channel_idx + 1) % self.channels.len();
                }
                Err(task) => {
                    // Worker is gone; keep the task and let the caller notice.
                    self.queued_tasks.push_front(task);
                    return;
                }
            }
        }
    }

    /// Applies every result that is already available, without blocking.
    ///
    /// Returns the number of results applied.
    pub fn process_completed_tasks(&mut self, frame: &mut RgbImage) -> usize {
        let mut completed = 0;
        for channel in &mut self.channels {
            while let Ok(result) = channel.result_receiver.try_recv() {
                channel.num_tasks_in_flight -= 1;
                result.handle_result(frame);
                completed += 1;
            }
        }
        self.process_queued_tasks();
        completed
    }

    /// Blocks until every published task has run and its result was applied.
    ///
    /// Returns the number of results applied.
    ///
    /// # Errors
    /// Returns [`RenderError::WorkerDisconnected`] if a worker dies with work
    /// outstanding. The frame may then be partially written and should be
    /// discarded.
    pub fn wait_for_completion(&mut self, frame: &mut RgbImage) -> Result<usize, RenderError> {
        let mut completed = 0;
        loop {
            self.process_queued_tasks();
            if self.num_in_flight() == 0 {
                if self.queued_tasks.is_empty() {
                    return Ok(completed);
                }
                return Err(RenderError::WorkerDisconnected);
            }

            for idx in 0..self.channels.len() {
                if self.channels[idx].num_tasks_in_flight == 0 {
                    continue;
                }
                let result = self.channels[idx]
                    .result_receiver
                    .recv()
                    .map_err(|_| RenderError::WorkerDisconnected)?;
                self.channels[idx].num_tasks_in_flight -= 1;
                result.handle_result(frame);
                completed += 1;
                self.process_queued_tasks();
            }
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.queued_tasks.clear();
        for TaskChannel {
            task_sender,
            result_receiver,
            worker,
            ..
        } in self.channels.drain(..)
        {
            drop(task_sender);
            drop(result_receiver);
            let _ = worker.join();
        }
    }
}
