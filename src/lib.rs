// src/lib.rs
// MovieHub - Reactive movie discovery core
//
// Architecture:
// - Domain value types are immutable; state is replaced wholesale
// - Use cases wrap exactly one repository call plus a scheduling transform
// - DiscoverService owns every observable state slot and the parameter map
// - Repositories perform all I/O at the crate boundary

// ============================================================================
// MODULES
// ============================================================================

pub mod common;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod usecase;

// ============================================================================
// PUBLIC API - Domain Values
// ============================================================================

pub use domain::{
    validate_filter,
    ApiParams,
    DiscoverFilter,
    Genre,
    GenreList,
    Movie,
    MovieList,
    Optional,
    ParamValue,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Scheduling
// ============================================================================

pub use common::{AsyncTransform, ImmediateTransform, Transform};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    MovieCacheRepository, MovieRestRepository, SqliteMovieCacheRepository, TmdbRestRepository,
};

// ============================================================================
// PUBLIC API - Use Cases
// ============================================================================

pub use usecase::{
    GetDiscoverMovieFiltersUseCase, GetDiscoverMoviesUseCase, GetGenresUseCase,
    SaveDiscoverMovieFiltersUseCase,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    DiscoverMoviesErrorState, DiscoverService, ErrorKind, ErrorState, PagingController,
    PagingState, StateCell,
};
