// src/usecase/save_discover_movie_filters.rs

use std::sync::{Arc, Mutex};

use crate::common::{BoxedResultFuture, Transform};
use crate::domain::{DiscoverFilter, Optional};
use crate::repositories::MovieCacheRepository;

/// Scalar arguments of the most recent save call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFilterArgs {
    pub min_vote_count: u32,
    pub include_adult: bool,
    pub sort_by: String,
    pub release_year: String,
}

/// Persists the user's discover filter through the cache repository.
///
/// Unlike the read use cases this one takes the four filter scalars
/// directly; they are packed into the outbound call, not into a parameter
/// map.
pub struct SaveDiscoverMovieFiltersUseCase<T: Transform> {
    transform: T,
    repository: Arc<dyn MovieCacheRepository>,
    last_args: Mutex<Option<SaveFilterArgs>>,
}

impl<T: Transform> SaveDiscoverMovieFiltersUseCase<T> {
    pub fn new(transform: T, repository: Arc<dyn MovieCacheRepository>) -> Self {
        Self {
            transform,
            repository,
            last_args: Mutex::new(None),
        }
    }

    pub fn execute(
        &self,
        min_vote_count: u32,
        include_adult: bool,
        sort_by: String,
        release_year: String,
    ) -> BoxedResultFuture<Optional<DiscoverFilter>> {
        *self.last_args.lock().unwrap() = Some(SaveFilterArgs {
            min_vote_count,
            include_adult,
            sort_by: sort_by.clone(),
            release_year: release_year.clone(),
        });

        let repository = Arc::clone(&self.repository);
        self.transform.transform(Box::pin(async move {
            repository
                .save_discover_movie_filters(min_vote_count, include_adult, sort_by, release_year)
                .await
        }))
    }

    /// Arguments of the most recent `execute` call.
    pub fn last_args(&self) -> Option<SaveFilterArgs> {
        self.last_args.lock().unwrap().clone()
    }
}
