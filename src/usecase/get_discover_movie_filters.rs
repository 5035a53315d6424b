// src/usecase/get_discover_movie_filters.rs

use std::sync::Arc;

use crate::common::{BoxedResultFuture, Transform};
use crate::domain::{DiscoverFilter, Optional};
use crate::repositories::MovieCacheRepository;

/// Reads the cached discover filter, if one was ever saved.
pub struct GetDiscoverMovieFiltersUseCase<T: Transform> {
    transform: T,
    repository: Arc<dyn MovieCacheRepository>,
}

impl<T: Transform> GetDiscoverMovieFiltersUseCase<T> {
    pub fn new(transform: T, repository: Arc<dyn MovieCacheRepository>) -> Self {
        Self {
            transform,
            repository,
        }
    }

    pub fn execute(&self) -> BoxedResultFuture<Optional<Option<DiscoverFilter>>> {
        let repository = Arc::clone(&self.repository);
        self.transform.transform(Box::pin(async move {
            repository.get_discover_movie_filters().await
        }))
    }
}
