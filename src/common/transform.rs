// src/common/transform.rs
//
// Scheduling strategy applied by use cases

use std::future::Future;
use std::pin::Pin;

use crate::error::{AppError, AppResult};

/// Boxed pipeline future produced by a use case.
pub type BoxedResultFuture<T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'static>>;

/// Scheduling strategy applied by every use case to its repository call.
///
/// The strategy decides where the pipeline runs; it must deliver the
/// pipeline's value or error unchanged. Injected per use case so tests can
/// substitute immediate delivery.
pub trait Transform: Send + Sync {
    fn transform<T>(&self, pipeline: BoxedResultFuture<T>) -> BoxedResultFuture<T>
    where
        T: Send + 'static;
}

/// Production strategy: runs the pipeline on a spawned tokio task, off the
/// caller's task.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncTransform;

impl Transform for AsyncTransform {
    fn transform<T>(&self, pipeline: BoxedResultFuture<T>) -> BoxedResultFuture<T>
    where
        T: Send + 'static,
    {
        Box::pin(async move {
            tokio::task::spawn(pipeline)
                .await
                .map_err(|e| AppError::Other(format!("Scheduled call aborted: {}", e)))?
        })
    }
}

/// Leaves the pipeline on the calling task. Used in tests for synchronous,
/// ordered delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTransform;

impl Transform for ImmediateTransform {
    fn transform<T>(&self, pipeline: BoxedResultFuture<T>) -> BoxedResultFuture<T>
    where
        T: Send + 'static,
    {
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_async_transform_delivers_value_unchanged() {
        let transform = AsyncTransform;
        let out = transform
            .transform::<i32>(Box::pin(async { Ok(41 + 1) }))
            .await;
        assert_eq!(out.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_immediate_transform_delivers_error_unchanged() {
        let transform = ImmediateTransform;
        let out = transform
            .transform::<i32>(Box::pin(async { Err(AppError::Other("boom".to_string())) }))
            .await;
        assert!(matches!(out, Err(AppError::Other(msg)) if msg == "boom"));
    }
}
