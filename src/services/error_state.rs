// src/services/error_state.rs
//
// Typed, user-facing error states

use crate::common::{
    LOAD_FILTERS_ERROR_DEFAULT, NETWORK_ERROR_DEFAULT, NO_DATA_ERROR, SAVE_FILTERS_ERROR_DEFAULT,
};

/// Failure category surfaced to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Call succeeded but carried nothing.
    NoData,
    /// Remote call raised.
    Transport,
    /// Cache read or write raised.
    Persistence,
}

/// Error state published for the genre and filter slots.
///
/// Carries the fixed default message of its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorState {
    pub fn no_data() -> Self {
        Self {
            kind: ErrorKind::NoData,
            message: NO_DATA_ERROR.to_string(),
        }
    }

    pub fn network() -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: NETWORK_ERROR_DEFAULT.to_string(),
        }
    }

    pub fn save_filters() -> Self {
        Self {
            kind: ErrorKind::Persistence,
            message: SAVE_FILTERS_ERROR_DEFAULT.to_string(),
        }
    }

    pub fn load_filters() -> Self {
        Self {
            kind: ErrorKind::Persistence,
            message: LOAD_FILTERS_ERROR_DEFAULT.to_string(),
        }
    }
}

/// Error state published for the discover-movies slot.
///
/// Tagged with the genre group whose fetch failed so the consumer can
/// correlate the failure with the row that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverMoviesErrorState {
    pub kind: ErrorKind,
    pub message: String,
    pub genre_group_id: Option<i32>,
}

impl DiscoverMoviesErrorState {
    pub fn no_data(genre_group_id: Option<i32>) -> Self {
        Self {
            kind: ErrorKind::NoData,
            message: NO_DATA_ERROR.to_string(),
            genre_group_id,
        }
    }

    pub fn network(genre_group_id: Option<i32>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: NETWORK_ERROR_DEFAULT.to_string(),
            genre_group_id,
        }
    }
}
