// src/domain/optional.rs

/// Presence wrapper for repository results.
///
/// Distinguishes "call succeeded with data" from "call succeeded with
/// nothing" without a null sentinel. Failures travel separately through
/// `AppResult`, so a repository call always resolves to exactly one of:
/// data, absence, or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// Wraps a value as `Present`.
    pub fn of(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent variant.
    pub fn empty() -> Self {
        Optional::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Unwraps the contained value.
    ///
    /// Panics when called on `Absent`; check `is_present` or match first.
    pub fn get(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!("Optional::get called on Absent"),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_is_present() {
        let wrapped = Optional::of(42);
        assert!(wrapped.is_present());
        assert_eq!(wrapped.get(), 42);
    }

    #[test]
    fn test_empty_is_absent() {
        let wrapped: Optional<i32> = Optional::empty();
        assert!(!wrapped.is_present());
        assert_eq!(wrapped.into_option(), None);
    }

    #[test]
    #[should_panic(expected = "Optional::get called on Absent")]
    fn test_get_on_absent_panics() {
        let wrapped: Optional<i32> = Optional::empty();
        wrapped.get();
    }

    #[test]
    fn test_from_option_round_trip() {
        assert_eq!(Optional::from(Some(7)), Optional::of(7));
        assert_eq!(Optional::<i32>::from(None), Optional::empty());
    }
}
