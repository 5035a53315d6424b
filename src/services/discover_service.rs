// src/services/discover_service.rs
//
// Discovery orchestration
//
// RULES:
// - This service owns every observable state slot and the parameter map
// - Raw failures are translated here, and only here, into error states
// - A fresh invocation supersedes the pending result of a prior call to
//   the same operation: stale completions publish nothing

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::common::{
    Transform, PARAM_API_KEY, PARAM_GENRES, PARAM_INCLUDE_ADULT, PARAM_LANGUAGE, PARAM_PAGE,
    PARAM_RELEASE_YEAR, PARAM_SORT_BY, PARAM_VOTE_COUNT_GREATER_THAN,
};
use crate::domain::{validate_filter, ApiParams, DiscoverFilter, GenreList, MovieList, Optional};
use crate::services::error_state::{DiscoverMoviesErrorState, ErrorState};
use crate::services::paging::PagingController;
use crate::services::state::StateCell;
use crate::usecase::{
    GetDiscoverMovieFiltersUseCase, GetDiscoverMoviesUseCase, GetGenresUseCase,
    SaveDiscoverMovieFiltersUseCase,
};

/// Monotonic ticket counter, one per operation. A completion whose ticket
/// is no longer current belongs to a superseded call and is discarded.
#[derive(Debug, Default)]
struct Sequencer {
    issued: AtomicU64,
}

impl Sequencer {
    fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

/// What a discover fetch did to the observable state.
enum FetchOutcome {
    /// Items were published.
    Published(usize),
    /// The call succeeded but carried nothing.
    Empty,
    /// The call raised.
    Failed,
    /// A newer call took over; nothing was published.
    Superseded,
}

/// The discovery orchestrator.
///
/// Owns all current discovery state: the genre catalogue, the movie list,
/// the filter set, the loading flag, one error slot per stream, and the
/// outbound parameter map. Each public operation combines one use case with
/// the state cells into an observable transition; state is created when the
/// discovery screen opens and dropped with the service when it closes.
pub struct DiscoverService<T: Transform> {
    get_genres_use_case: Arc<GetGenresUseCase<T>>,
    get_discover_movies_use_case: Arc<GetDiscoverMoviesUseCase<T>>,
    save_discover_movie_filters_use_case: Arc<SaveDiscoverMovieFiltersUseCase<T>>,
    get_discover_movie_filters_use_case: Arc<GetDiscoverMovieFiltersUseCase<T>>,

    api_params: Mutex<ApiParams>,
    paging: PagingController,

    genres: StateCell<GenreList>,
    discover_movies: StateCell<MovieList>,
    discover_filters: StateCell<DiscoverFilter>,
    loading_state: StateCell<bool>,
    genre_error_state: StateCell<ErrorState>,
    discover_movies_error_state: StateCell<DiscoverMoviesErrorState>,
    discover_filters_error_state: StateCell<ErrorState>,

    genres_seq: Sequencer,
    movies_seq: Sequencer,
    save_filters_seq: Sequencer,
    load_filters_seq: Sequencer,
}

impl<T: Transform> DiscoverService<T> {
    pub fn new(
        get_genres_use_case: Arc<GetGenresUseCase<T>>,
        get_discover_movies_use_case: Arc<GetDiscoverMoviesUseCase<T>>,
        save_discover_movie_filters_use_case: Arc<SaveDiscoverMovieFiltersUseCase<T>>,
        get_discover_movie_filters_use_case: Arc<GetDiscoverMovieFiltersUseCase<T>>,
        api_key: String,
        language: String,
    ) -> Self {
        let mut params = ApiParams::new();
        params.insert(PARAM_API_KEY, api_key);
        params.insert(PARAM_LANGUAGE, language);

        Self {
            get_genres_use_case,
            get_discover_movies_use_case,
            save_discover_movie_filters_use_case,
            get_discover_movie_filters_use_case,
            api_params: Mutex::new(params),
            paging: PagingController::new(),
            genres: StateCell::new(),
            discover_movies: StateCell::new(),
            discover_filters: StateCell::new(),
            loading_state: StateCell::new(),
            genre_error_state: StateCell::new(),
            discover_movies_error_state: StateCell::new(),
            discover_filters_error_state: StateCell::new(),
            genres_seq: Sequencer::default(),
            movies_seq: Sequencer::default(),
            save_filters_seq: Sequencer::default(),
            load_filters_seq: Sequencer::default(),
        }
    }

    // ========================================================================
    // OBSERVABLE STATE
    // ========================================================================

    pub fn genres(&self) -> &StateCell<GenreList> {
        &self.genres
    }

    pub fn discover_movies(&self) -> &StateCell<MovieList> {
        &self.discover_movies
    }

    pub fn discover_filters(&self) -> &StateCell<DiscoverFilter> {
        &self.discover_filters
    }

    pub fn loading_state(&self) -> &StateCell<bool> {
        &self.loading_state
    }

    pub fn genre_error_state(&self) -> &StateCell<ErrorState> {
        &self.genre_error_state
    }

    pub fn discover_movies_error_state(&self) -> &StateCell<DiscoverMoviesErrorState> {
        &self.discover_movies_error_state
    }

    pub fn discover_filters_error_state(&self) -> &StateCell<ErrorState> {
        &self.discover_filters_error_state
    }

    /// Snapshot of the outbound parameter map. Read-only: the live map is
    /// owned and mutated solely by this service.
    pub fn api_params(&self) -> ApiParams {
        self.api_params.lock().unwrap().clone()
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Fetches the genre catalogue and publishes it to the `genres` slot.
    pub async fn load_genres(&self, params: ApiParams) {
        let ticket = self.genres_seq.begin();
        self.loading_state.publish(Some(true));

        let outcome = self.get_genres_use_case.execute(params).await;
        if !self.genres_seq.is_current(ticket) {
            log::debug!("Genre fetch superseded, dropping result");
            return;
        }

        match outcome {
            Ok(Optional::Present(list)) if !list.is_empty() => {
                self.genres.publish(Some(list));
                self.genre_error_state.publish(None);
            }
            Ok(_) => {
                log::debug!("Genre fetch came back empty");
                self.genre_error_state.publish(Some(ErrorState::no_data()));
            }
            Err(err) => {
                log::warn!("Genre fetch failed: {}", err);
                self.genre_error_state.publish(Some(ErrorState::network()));
            }
        }
        self.loading_state.publish(Some(false));
    }

    /// Fetches one batch of discover results and publishes it to the
    /// `discover_movies` slot. Error states are tagged with the genre group
    /// the params named.
    pub async fn load_discover_movies(&self, params: ApiParams) {
        let ticket = self.movies_seq.begin();
        self.loading_state.publish(Some(true));

        match self.run_discover_fetch(params, ticket).await {
            FetchOutcome::Published(count) => self.paging.record_loaded(count),
            FetchOutcome::Empty | FetchOutcome::Failed => {}
            FetchOutcome::Superseded => return,
        }
        self.loading_state.publish(Some(false));
    }

    /// Persists a new filter set. On success the saved filter becomes
    /// current state, the parameter map is re-seeded from it and paging
    /// restarts; on failure the prior filter state is left untouched.
    pub async fn save_discover_movie_filters(
        &self,
        min_vote_count: u32,
        include_adult: bool,
        sort_by: String,
        release_year: String,
    ) {
        let ticket = self.save_filters_seq.begin();
        self.loading_state.publish(Some(true));

        let candidate = DiscoverFilter {
            min_vote_count,
            include_adult,
            sort_by,
            release_year,
        };
        if let Err(err) = validate_filter(&candidate) {
            log::warn!("Rejected filter save: {}", err);
            self.discover_filters_error_state
                .publish(Some(ErrorState::save_filters()));
            self.loading_state.publish(Some(false));
            return;
        }

        let outcome = self
            .save_discover_movie_filters_use_case
            .execute(
                candidate.min_vote_count,
                candidate.include_adult,
                candidate.sort_by,
                candidate.release_year,
            )
            .await;
        if !self.save_filters_seq.is_current(ticket) {
            log::debug!("Filter save superseded, dropping result");
            return;
        }

        match outcome {
            Ok(Optional::Present(filter)) => {
                self.hold_filter_in_api_params(&filter);
                self.discover_filters.publish(Some(filter));
                self.discover_filters_error_state.publish(None);
                self.paging.reset();
            }
            Ok(Optional::Absent) => {
                log::warn!("Filter save came back empty");
                self.discover_filters_error_state
                    .publish(Some(ErrorState::save_filters()));
            }
            Err(err) => {
                log::warn!("Filter save failed: {}", err);
                self.discover_filters_error_state
                    .publish(Some(ErrorState::save_filters()));
            }
        }
        self.loading_state.publish(Some(false));
    }

    /// Loads the cached filter, or falls back to defaults when none was
    /// ever saved, and seeds the parameter map either way. `api_key` and
    /// `language` are always present in the map afterwards.
    pub async fn load_discover_movie_filters(&self) {
        let ticket = self.load_filters_seq.begin();
        self.loading_state.publish(Some(true));

        let outcome = self.get_discover_movie_filters_use_case.execute().await;
        if !self.load_filters_seq.is_current(ticket) {
            log::debug!("Filter load superseded, dropping result");
            return;
        }

        let filter = match outcome {
            Ok(Optional::Present(Some(filter))) => {
                self.discover_filters_error_state.publish(None);
                filter
            }
            Ok(_) => {
                // Never cached; defaults apply
                self.discover_filters_error_state.publish(None);
                DiscoverFilter::default()
            }
            Err(err) => {
                log::warn!("Filter cache read failed: {}", err);
                self.discover_filters_error_state
                    .publish(Some(ErrorState::load_filters()));
                DiscoverFilter::default()
            }
        };

        self.hold_filter_in_api_params(&filter);
        self.discover_filters.publish(Some(filter));
        self.loading_state.publish(Some(false));
    }

    // ========================================================================
    // PAGINATION
    // ========================================================================

    /// Consumer signal: the item at `index` was rendered. Fetches the next
    /// page when the trailing item is visible and more data is expected.
    pub async fn on_reached_item(&self, index: usize, genre_id: i32) {
        if self.paging.reached_item(index) {
            self.load_next_page(genre_id).await;
        }
    }

    /// Fetches the next discover page for `genre_id`. No-op while a page
    /// fetch is in flight or the list is exhausted.
    pub async fn load_next_page(&self, genre_id: i32) {
        let Some(page) = self.paging.begin_load() else {
            return;
        };

        let params = self.build_discover_params_for_page(genre_id, page);
        let ticket = self.movies_seq.begin();
        self.loading_state.publish(Some(true));

        match self.run_discover_fetch(params, ticket).await {
            FetchOutcome::Published(count) => self.paging.complete_load(count),
            FetchOutcome::Empty => self.paging.complete_load(0),
            FetchOutcome::Failed | FetchOutcome::Superseded => self.paging.fail_load(),
        }
        if self.movies_seq.is_current(ticket) {
            self.loading_state.publish(Some(false));
        }
    }

    pub fn has_more_data(&self) -> bool {
        self.paging.has_more_data()
    }

    pub fn current_page(&self) -> u32 {
        self.paging.current_page()
    }

    // ========================================================================
    // PARAMETER RECONCILIATION
    // ========================================================================

    /// Builds the outbound parameter set for one discover fetch: the fixed
    /// constants and filter values from the held map, layered with the
    /// genre group and the current page. Rebuilt per call, never patched.
    pub fn build_discover_params(&self, genre_id: i32) -> ApiParams {
        self.build_discover_params_for_page(genre_id, self.paging.current_page())
    }

    fn build_discover_params_for_page(&self, genre_id: i32, page: u32) -> ApiParams {
        let mut params = self.api_params.lock().unwrap().clone();
        params.insert(PARAM_GENRES, genre_id);
        params.insert(PARAM_PAGE, page);
        params
    }

    /// Re-seeds the held map from a filter. The fixed constants stay; an
    /// empty release year leaves that key absent.
    fn hold_filter_in_api_params(&self, filter: &DiscoverFilter) {
        let mut params = self.api_params.lock().unwrap();
        params.insert(PARAM_SORT_BY, filter.sort_by.clone());
        params.insert(
            PARAM_VOTE_COUNT_GREATER_THAN,
            i64::from(filter.min_vote_count),
        );
        params.insert(PARAM_INCLUDE_ADULT, filter.include_adult);
        if filter.release_year.is_empty() {
            params.remove(PARAM_RELEASE_YEAR);
        } else {
            params.insert(PARAM_RELEASE_YEAR, filter.release_year.clone());
        }
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Runs one discover fetch against a ticket and publishes its outcome.
    async fn run_discover_fetch(&self, params: ApiParams, ticket: u64) -> FetchOutcome {
        let genre_group_id = params.get_int(PARAM_GENRES).map(|id| id as i32);

        let outcome = self.get_discover_movies_use_case.execute(params).await;
        if !self.movies_seq.is_current(ticket) {
            log::debug!("Discover fetch superseded, dropping result");
            return FetchOutcome::Superseded;
        }

        match outcome {
            Ok(Optional::Present(list)) if !list.is_empty() => {
                let count = list.len();
                self.discover_movies.publish(Some(list));
                self.discover_movies_error_state.publish(None);
                FetchOutcome::Published(count)
            }
            Ok(_) => {
                log::debug!(
                    "Discover fetch for genre group {:?} came back empty",
                    genre_group_id
                );
                self.discover_movies_error_state
                    .publish(Some(DiscoverMoviesErrorState::no_data(genre_group_id)));
                FetchOutcome::Empty
            }
            Err(err) => {
                log::warn!(
                    "Discover fetch for genre group {:?} failed: {}",
                    genre_group_id,
                    err
                );
                self.discover_movies_error_state
                    .publish(Some(DiscoverMoviesErrorState::network(genre_group_id)));
                FetchOutcome::Failed
            }
        }
    }
}
