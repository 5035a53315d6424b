// src/repositories/cache_repository.rs
//
// Filter preference cache - SQLite persistence
//
// A single-row table holds the last saved discover filter. Reads
// distinguish "no filter ever saved" (inner None) from "read failed"
// (AppError).

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{DiscoverFilter, Optional};
use crate::error::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovieCacheRepository: Send + Sync {
    async fn save_discover_movie_filters(
        &self,
        min_vote_count: u32,
        include_adult: bool,
        sort_by: String,
        release_year: String,
    ) -> AppResult<Optional<DiscoverFilter>>;

    async fn get_discover_movie_filters(&self) -> AppResult<Optional<Option<DiscoverFilter>>>;
}

pub struct SqliteMovieCacheRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieCacheRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        let repository = Self { pool };
        repository.ensure_schema()?;
        Ok(repository)
    }

    fn ensure_schema(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS discover_filter (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                min_vote_count INTEGER NOT NULL,
                include_adult INTEGER NOT NULL,
                sort_by TEXT NOT NULL,
                release_year TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    fn row_to_filter(row: &Row) -> Result<DiscoverFilter, rusqlite::Error> {
        let min_vote_count: i64 = row.get("min_vote_count")?;
        Ok(DiscoverFilter {
            min_vote_count: min_vote_count as u32,
            include_adult: row.get("include_adult")?,
            sort_by: row.get("sort_by")?,
            release_year: row.get("release_year")?,
        })
    }
}

#[async_trait]
impl MovieCacheRepository for SqliteMovieCacheRepository {
    async fn save_discover_movie_filters(
        &self,
        min_vote_count: u32,
        include_adult: bool,
        sort_by: String,
        release_year: String,
    ) -> AppResult<Optional<DiscoverFilter>> {
        let pool = Arc::clone(&self.pool);
        let filter = DiscoverFilter {
            min_vote_count,
            include_adult,
            sort_by,
            release_year,
        };

        let saved = tokio::task::spawn_blocking(move || -> AppResult<DiscoverFilter> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO discover_filter
                     (id, min_vote_count, include_adult, sort_by, release_year, updated_at)
                 VALUES (1, ?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     min_vote_count = excluded.min_vote_count,
                     include_adult = excluded.include_adult,
                     sort_by = excluded.sort_by,
                     release_year = excluded.release_year,
                     updated_at = excluded.updated_at",
                params![
                    filter.min_vote_count,
                    filter.include_adult,
                    filter.sort_by,
                    filter.release_year,
                    Utc::now().to_rfc3339(),
                ],
            )?;
            Ok(filter)
        })
        .await
        .map_err(|e| AppError::Other(format!("Cache task aborted: {}", e)))??;

        Ok(Optional::of(saved))
    }

    async fn get_discover_movie_filters(&self) -> AppResult<Optional<Option<DiscoverFilter>>> {
        let pool = Arc::clone(&self.pool);

        let cached = tokio::task::spawn_blocking(move || -> AppResult<Option<DiscoverFilter>> {
            let conn = pool.get()?;
            let filter = conn
                .query_row(
                    "SELECT min_vote_count, include_adult, sort_by, release_year
                     FROM discover_filter WHERE id = 1",
                    [],
                    Self::row_to_filter,
                )
                .optional()?;
            Ok(filter)
        })
        .await
        .map_err(|e| AppError::Other(format!("Cache task aborted: {}", e)))??;

        Ok(Optional::of(cached))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_connection_pool_at;

    fn temp_repository() -> (tempfile::TempDir, SqliteMovieCacheRepository) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool_at(dir.path().join("cache.db")).unwrap();
        let repository = SqliteMovieCacheRepository::new(Arc::new(pool)).unwrap();
        (dir, repository)
    }

    #[tokio::test]
    async fn test_read_before_any_save_is_present_none() {
        let (_dir, repository) = temp_repository();

        let cached = repository.get_discover_movie_filters().await.unwrap();
        assert_eq!(cached, Optional::of(None));
    }

    #[tokio::test]
    async fn test_save_then_read_round_trips() {
        let (_dir, repository) = temp_repository();

        let saved = repository
            .save_discover_movie_filters(10000, true, "popularity.desc".into(), "2020".into())
            .await
            .unwrap();
        assert!(saved.is_present());

        let cached = repository.get_discover_movie_filters().await.unwrap();
        let filter = cached.get().expect("filter was saved");
        assert_eq!(filter.min_vote_count, 10000);
        assert!(filter.include_adult);
        assert_eq!(filter.sort_by, "popularity.desc");
        assert_eq!(filter.release_year, "2020");
    }

    #[tokio::test]
    async fn test_second_save_replaces_first() {
        let (_dir, repository) = temp_repository();

        repository
            .save_discover_movie_filters(0, false, "popularity.desc".into(), String::new())
            .await
            .unwrap();
        repository
            .save_discover_movie_filters(500, false, "vote_average.desc".into(), "1999".into())
            .await
            .unwrap();

        let filter = repository
            .get_discover_movie_filters()
            .await
            .unwrap()
            .get()
            .expect("filter was saved");
        assert_eq!(filter.min_vote_count, 500);
        assert_eq!(filter.sort_by, "vote_average.desc");
        assert_eq!(filter.release_year, "1999");
    }
}
