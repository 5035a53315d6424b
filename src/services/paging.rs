// src/services/paging.rs
//
// Infinite-scroll paging state machine

use std::sync::Mutex;

/// Paging phase. `Loading` doubles as the in-flight guard: while set, any
/// further trigger is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingState {
    Idle,
    Loading,
    Exhausted,
}

#[derive(Debug)]
struct PagingInner {
    state: PagingState,
    page: u32,
    loaded: usize,
}

/// Tracks the discover list's paging cursor and decides when the next page
/// may be fetched.
///
/// Transitions: `Idle -> Loading` on `begin_load` (page advances by exactly
/// one), `Loading -> Idle` when a fetch brings items, `Loading -> Exhausted`
/// when a fetch comes back empty. Once exhausted, the consumer is expected
/// to collapse its trailing loading indicator.
#[derive(Debug)]
pub struct PagingController {
    inner: Mutex<PagingInner>,
}

impl PagingController {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PagingInner {
                state: PagingState::Idle,
                page: 1,
                loaded: 0,
            }),
        }
    }

    /// Last requested page number. Starts at 1.
    pub fn current_page(&self) -> u32 {
        self.inner.lock().unwrap().page
    }

    pub fn state(&self) -> PagingState {
        self.inner.lock().unwrap().state
    }

    /// False once a fetch has come back empty.
    pub fn has_more_data(&self) -> bool {
        self.inner.lock().unwrap().state != PagingState::Exhausted
    }

    /// Consumer signal: item `index` was rendered.
    ///
    /// True when the trailing loaded item is visible and a fetch may start.
    pub fn reached_item(&self, index: usize) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.state == PagingState::Idle && inner.loaded > 0 && index + 1 >= inner.loaded
    }

    /// `Idle -> Loading`; returns the page to request. No-op (None) while
    /// already loading or exhausted.
    pub fn begin_load(&self) -> Option<u32> {
        let mut inner = self.inner.lock().unwrap();
        if inner.state != PagingState::Idle {
            return None;
        }
        inner.state = PagingState::Loading;
        inner.page += 1;
        Some(inner.page)
    }

    /// Records items delivered outside the paging cycle (the first,
    /// non-paged load).
    pub fn record_loaded(&self, count: usize) {
        self.inner.lock().unwrap().loaded += count;
    }

    /// `Loading -> Idle` when items arrived, `Loading -> Exhausted` on an
    /// empty page.
    pub fn complete_load(&self, new_items: usize) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state != PagingState::Loading {
            return;
        }
        if new_items == 0 {
            inner.state = PagingState::Exhausted;
        } else {
            inner.loaded += new_items;
            inner.state = PagingState::Idle;
        }
    }

    /// `Loading -> Idle` with the cursor rolled back; the same page can be
    /// requested again by a later trigger.
    pub fn fail_load(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state != PagingState::Loading {
            return;
        }
        inner.page -= 1;
        inner.state = PagingState::Idle;
    }

    /// Back to page 1 with nothing loaded. Filter changes restart discovery.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = PagingInner {
            state: PagingState::Idle,
            page: 1,
            loaded: 0,
        };
    }
}

impl Default for PagingController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_load_advances_page_by_one() {
        let paging = PagingController::new();
        assert_eq!(paging.current_page(), 1);
        assert_eq!(paging.begin_load(), Some(2));
        assert_eq!(paging.state(), PagingState::Loading);
    }

    #[test]
    fn test_begin_load_while_loading_is_noop() {
        let paging = PagingController::new();
        paging.begin_load();
        assert_eq!(paging.begin_load(), None);
        assert_eq!(paging.current_page(), 2);
    }

    #[test]
    fn test_items_return_to_idle() {
        let paging = PagingController::new();
        paging.begin_load();
        paging.complete_load(20);
        assert_eq!(paging.state(), PagingState::Idle);
        assert!(paging.has_more_data());
    }

    #[test]
    fn test_empty_page_exhausts() {
        let paging = PagingController::new();
        paging.begin_load();
        paging.complete_load(0);
        assert_eq!(paging.state(), PagingState::Exhausted);
        assert!(!paging.has_more_data());
        assert_eq!(paging.begin_load(), None);
    }

    #[test]
    fn test_reached_item_triggers_only_at_trailing_item() {
        let paging = PagingController::new();
        paging.record_loaded(20);
        assert!(!paging.reached_item(5));
        assert!(paging.reached_item(19));
    }

    #[test]
    fn test_reached_item_is_noop_while_loading_or_exhausted() {
        let paging = PagingController::new();
        paging.record_loaded(20);
        paging.begin_load();
        assert!(!paging.reached_item(19));
        paging.complete_load(0);
        assert!(!paging.reached_item(19));
    }

    #[test]
    fn test_reached_item_before_first_load_is_noop() {
        let paging = PagingController::new();
        assert!(!paging.reached_item(0));
    }

    #[test]
    fn test_failed_load_rolls_the_cursor_back() {
        let paging = PagingController::new();
        assert_eq!(paging.begin_load(), Some(2));
        paging.fail_load();
        assert_eq!(paging.state(), PagingState::Idle);
        assert_eq!(paging.begin_load(), Some(2));
    }

    #[test]
    fn test_reset_restarts_from_page_one() {
        let paging = PagingController::new();
        paging.record_loaded(20);
        paging.begin_load();
        paging.complete_load(20);
        paging.reset();
        assert_eq!(paging.current_page(), 1);
        assert!(!paging.reached_item(19));
        assert_eq!(paging.begin_load(), Some(2));
    }
}
