//! Fixed-size worker pool.
//!
//! `N` long-lived workers pull tasks from one shared queue. A worker runs a
//! task's handler to completion before taking the next one, so at most `N`
//! tasks are in progress at any time and everything else waits in the queue.
//!
//! Each handler runs in its own tokio task which the worker awaits; a panic
//! in one handler is logged and the worker moves on.

use crate::error::PoolError;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

/// Queue between submitters and workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueBound {
    /// `submit` never waits; the queue grows with available memory.
    Unbounded,
    /// `submit` waits for a free slot once `n` tasks are queued.
    Bounded(usize),
}

impl From<Option<usize>> for QueueBound {
    fn from(capacity: Option<usize>) -> Self {
        match capacity {
            Some(n) => QueueBound::Bounded(n.max(1)),
            None => QueueBound::Unbounded,
        }
    }
}

enum TaskSender<T> {
    Unbounded(mpsc::UnboundedSender<T>),
    Bounded(mpsc::Sender<T>),
}

enum TaskReceiver<T> {
    Unbounded(mpsc::UnboundedReceiver<T>),
    Bounded(mpsc::Receiver<T>),
}

impl<T> TaskReceiver<T> {
    async fn recv(&mut self) -> Option<T> {
        match self {
            TaskReceiver::Unbounded(rx) => rx.recv().await,
            TaskReceiver::Bounded(rx) => rx.recv().await,
        }
    }
}

fn task_queue<T>(bound: QueueBound) -> (TaskSender<T>, TaskReceiver<T>) {
    match bound {
        QueueBound::Unbounded => {
            let (tx, rx) = mpsc::unbounded_channel();
            (TaskSender::Unbounded(tx), TaskReceiver::Unbounded(rx))
        }
        QueueBound::Bounded(n) => {
            let (tx, rx) = mpsc::channel(n);
            (TaskSender::Bounded(tx), TaskReceiver::Bounded(rx))
        }
    }
}

pub struct WorkerPool<T> {
    sender: TaskSender<T>,
    workers: Vec<JoinHandle<()>>,
}

impl<T> WorkerPool<T>
where
    T: Send + 'static,
{
    /// Starts `workers` workers (at least one), each running `handler` on the
    /// tasks it dequeues.
    pub fn spawn<F, Fut>(workers: usize, bound: QueueBound, handler: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let workers = workers.max(1);
        let (sender, receiver) = task_queue(bound);
        let receiver = Arc::new(Mutex::new(receiver));
        let handler = Arc::new(handler);

        let workers = (0..workers)
            .map(|id| {
                let receiver = Arc::clone(&receiver);
                let handler = Arc::clone(&handler);
                tokio::spawn(worker_loop(id, receiver, handler))
            })
            .collect();

        tracing::info!(?bound, "Worker pool started");
        Self { sender, workers }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Queues a task for the next free worker.
    pub async fn submit(&self, task: T) -> Result<(), PoolError> {
        match &self.sender {
            TaskSender::Unbounded(tx) => tx.send(task).map_err(|_| PoolError::Closed),
            TaskSender::Bounded(tx) => tx.send(task).await.map_err(|_| PoolError::Closed),
        }
    }

    /// Closes the queue and waits for every worker to drain it and exit.
    pub async fn shutdown(self) {
        let WorkerPool { sender, workers } = self;
        drop(sender);

        for (id, handle) in workers.into_iter().enumerate() {
            if let Err(e) = handle.await {
                tracing::error!(worker = id, error = %e, "Worker terminated abnormally");
            }
        }
        tracing::info!("Worker pool stopped");
    }
}

async fn worker_loop<T, F, Fut>(id: usize, receiver: Arc<Mutex<TaskReceiver<T>>>, handler: Arc<F>)
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    tracing::trace!(worker = id, "Worker started");

    loop {
        // Only idle workers contend for the receiver.
        let task = receiver.lock().await.recv().await;
        let Some(task) = task else {
            break;
        };

        match tokio::spawn((*handler)(task)).await {
            Ok(()) => {}
            Err(e) if e.is_panic() => {
                tracing::error!(worker = id, "Task panicked; worker continues");
            }
            Err(e) => {
                tracing::warn!(worker = id, error = %e, "Task was cancelled");
            }
        }
    }

    tracing::trace!(worker = id, "Worker exiting");
}
