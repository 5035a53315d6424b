// src/common/mod.rs
//
// Shared constants and the scheduling transform

pub mod transform;

pub use transform::{AsyncTransform, BoxedResultFuture, ImmediateTransform, Transform};

// ============================================================================
// OUTBOUND PARAMETER KEYS
// ============================================================================

// The fixed key set every discovery call draws from. Use cases and
// repositories pass these through untouched.

pub const PARAM_API_KEY: &str = "api_key";
pub const PARAM_LANGUAGE: &str = "language";
pub const PARAM_GENRES: &str = "with_genres";
pub const PARAM_SORT_BY: &str = "sort_by";
pub const PARAM_INCLUDE_ADULT: &str = "include_adult";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_RELEASE_YEAR: &str = "primary_release_year";
pub const PARAM_VOTE_COUNT_GREATER_THAN: &str = "vote_count.gte";

// ============================================================================
// DEFAULTS
// ============================================================================

/// Base URL movie poster paths are resolved against.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// Sort order applied when the user never chose one.
pub const DEFAULT_SORT_BY: &str = "popularity.desc";

// ============================================================================
// USER-FACING ERROR MESSAGES
// ============================================================================

pub const NO_DATA_ERROR: &str = "No data found";
pub const NETWORK_ERROR_DEFAULT: &str = "Network error, please try again later";
pub const SAVE_FILTERS_ERROR_DEFAULT: &str = "Could not save filter preferences";
pub const LOAD_FILTERS_ERROR_DEFAULT: &str = "Could not load filter preferences";
