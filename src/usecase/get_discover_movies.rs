// src/usecase/get_discover_movies.rs

use std::sync::{Arc, Mutex};

use crate::common::{BoxedResultFuture, Transform};
use crate::domain::{ApiParams, MovieList, Optional};
use crate::repositories::MovieRestRepository;

/// Fetches one page of discover results through the remote repository.
pub struct GetDiscoverMoviesUseCase<T: Transform> {
    transform: T,
    repository: Arc<dyn MovieRestRepository>,
    last_params: Mutex<Option<ApiParams>>,
}

impl<T: Transform> GetDiscoverMoviesUseCase<T> {
    pub fn new(transform: T, repository: Arc<dyn MovieRestRepository>) -> Self {
        Self {
            transform,
            repository,
            last_params: Mutex::new(None),
        }
    }

    pub fn execute(&self, params: ApiParams) -> BoxedResultFuture<Optional<MovieList>> {
        *self.last_params.lock().unwrap() = Some(params.clone());

        let repository = Arc::clone(&self.repository);
        self.transform.transform(Box::pin(async move {
            repository.get_discover_movies(&params).await
        }))
    }

    /// Arguments of the most recent `execute` call.
    pub fn last_params(&self) -> Option<ApiParams> {
        self.last_params.lock().unwrap().clone()
    }
}
