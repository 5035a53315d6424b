// src/services/mod.rs
//
// Service layer
//
// RULES:
// - Services own all observable state
// - Services are the only translators from raw failures to error states
// - No retries: a failure is scoped to the operation that raised it

pub mod discover_service;
pub mod error_state;
pub mod paging;
pub mod state;


pub use discover_service::DiscoverService;
pub use error_state::{DiscoverMoviesErrorState, ErrorKind, ErrorState};
pub use paging::{PagingController, PagingState};
pub use state::StateCell;
