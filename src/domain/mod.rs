// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod filter;
pub mod genre;
pub mod movie;
pub mod optional;
pub mod params;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use filter::{validate_filter, DiscoverFilter};
pub use genre::{Genre, GenreList};
pub use movie::{Movie, MovieList};
pub use optional::Optional;
pub use params::{ApiParams, ParamValue};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
