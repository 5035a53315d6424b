// src/domain/filter.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::common::DEFAULT_SORT_BY;
use crate::domain::{DomainError, DomainResult};

/// User-chosen discover constraints.
///
/// A filter value replaces the previous one atomically in the orchestrator
/// state; fields are never patched individually after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverFilter {
    /// Minimum vote count a movie must have to be listed.
    pub min_vote_count: u32,

    pub include_adult: bool,

    /// Sort field and direction, `"<field>.<asc|desc>"`.
    pub sort_by: String,

    /// Four-digit release year; empty means unset.
    pub release_year: String,
}

impl Default for DiscoverFilter {
    fn default() -> Self {
        Self {
            min_vote_count: 0,
            include_adult: false,
            sort_by: DEFAULT_SORT_BY.to_string(),
            release_year: String::new(),
        }
    }
}

fn sort_by_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z_]+\.(asc|desc)$").expect("valid pattern"))
}

/// Validates all DiscoverFilter invariants
pub fn validate_filter(filter: &DiscoverFilter) -> DomainResult<()> {
    validate_sort_by(&filter.sort_by)?;
    validate_release_year(&filter.release_year)?;
    Ok(())
}

/// Sort order must name a field and a direction
fn validate_sort_by(sort_by: &str) -> DomainResult<()> {
    if !sort_by_pattern().is_match(sort_by) {
        return Err(DomainError::InvariantViolation(format!(
            "Sort order '{}' is not of the form <field>.<asc|desc>",
            sort_by
        )));
    }
    Ok(())
}

/// Release year is either unset or a four-digit year
fn validate_release_year(release_year: &str) -> DomainResult<()> {
    if release_year.is_empty() {
        return Ok(());
    }
    if release_year.len() != 4 || !release_year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvariantViolation(format!(
            "Release year '{}' is not a four-digit year",
            release_year
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_valid() {
        assert!(validate_filter(&DiscoverFilter::default()).is_ok());
    }

    #[test]
    fn test_full_filter_is_valid() {
        let filter = DiscoverFilter {
            min_vote_count: 10000,
            include_adult: true,
            sort_by: "vote_average.asc".to_string(),
            release_year: "2020".to_string(),
        };
        assert!(validate_filter(&filter).is_ok());
    }

    #[test]
    fn test_sort_without_direction_fails() {
        let filter = DiscoverFilter {
            sort_by: "popularity".to_string(),
            ..DiscoverFilter::default()
        };
        assert!(validate_filter(&filter).is_err());
    }

    #[test]
    fn test_non_numeric_year_fails() {
        let filter = DiscoverFilter {
            release_year: "20x0".to_string(),
            ..DiscoverFilter::default()
        };
        assert!(validate_filter(&filter).is_err());
    }
}
