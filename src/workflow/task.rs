use std::fmt;
use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// A task that can be executed within a workflow
pub struct WorkflowTask<T> {
    /// Name of the task
    pub(crate) name: String,

    /// Unique ID of the task
    pub(crate) id: String,

    /// Function that executes the task
    pub(crate) func: Pin<Box<dyn Future<Output = Result<T>> + Send>>,
}

impl<T> fmt::Debug for WorkflowTask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowTask")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish()
    }
}

impl<T: 'static + Send> WorkflowTask<T> {
    /// Create a new workflow task
    pub fn new<F, Fut>(name: &str, f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            name: name.to_string(),
            id: Uuid::new_v4().to_string(),
            func: Box::pin(f()),
        }
    }

    /// Get the name of the task
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the unique ID of the task
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Execute the task
    #[instrument(skip(self), fields(task.name = %self.name, task.id = %self.id))]
    pub async fn execute(self) -> Result<T> {
        debug!("Executing task: {}", self.name);

        match self.func.await {
            Ok(value) => {
                debug!("Task completed successfully: {}", self.name);
                Ok(value)
            }
            Err(err) => {
                error!("Task failed: {}, error: {}", self.name, err);
                Err(err)
            }
        }
    }
}

/// Create a new workflow task from a name and an async closure
pub fn task<T, F, Fut>(name: &str, f: F) -> WorkflowTask<T>
where
    T: 'static + Send,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    WorkflowTask::new(name, f)
}
