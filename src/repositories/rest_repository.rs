// src/repositories/rest_repository.rs
//
// Remote discovery data - TMDB-shaped REST API
//
// Maps external payloads to domain values, nothing more. Presence is
// reported through `Optional`; transport and decode failures through
// `AppResult`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::common::PARAM_GENRES;
use crate::domain::{ApiParams, Genre, GenreList, Movie, MovieList, Optional};
use crate::error::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovieRestRepository: Send + Sync {
    async fn get_genres(&self, params: &ApiParams) -> AppResult<Optional<GenreList>>;
    async fn get_discover_movies(&self, params: &ApiParams) -> AppResult<Optional<MovieList>>;
}

/// Genre catalogue payload
#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

/// Discover payload with its paging envelope
#[derive(Debug, Deserialize)]
struct DiscoverMoviesResponse {
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default = "first_page")]
    total_pages: u32,
    results: Vec<Movie>,
}

fn first_page() -> u32 {
    1
}

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// REST repository backed by the TMDB v3 API
pub struct TmdbRestRepository {
    base_url: String,
    http_client: Client,
}

impl TmdbRestRepository {
    pub fn new() -> Self {
        Self::with_base_url(TMDB_BASE_URL)
    }

    /// Point the repository at a different host (test servers, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Execute one GET and decode the JSON body
    async fn get_json<T>(&self, path: &str, params: &ApiParams) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(&params.to_query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {} failed with HTTP {}", path, status);
            return Err(AppError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for TmdbRestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRestRepository for TmdbRestRepository {
    async fn get_genres(&self, params: &ApiParams) -> AppResult<Optional<GenreList>> {
        let decoded: GenreListResponse = self.get_json("/genre/movie/list", params).await?;

        if decoded.genres.is_empty() {
            return Ok(Optional::empty());
        }
        Ok(Optional::of(GenreList {
            genres: decoded.genres,
        }))
    }

    async fn get_discover_movies(&self, params: &ApiParams) -> AppResult<Optional<MovieList>> {
        let genre_group_id = params.get_int(PARAM_GENRES).map(|id| id as i32);
        let decoded: DiscoverMoviesResponse = self.get_json("/discover/movie", params).await?;

        log::debug!(
            "Discover page {}/{} carried {} movies for genre group {:?}",
            decoded.page,
            decoded.total_pages,
            decoded.results.len(),
            genre_group_id
        );

        if decoded.results.is_empty() {
            return Ok(Optional::empty());
        }
        Ok(Optional::of(MovieList {
            page: decoded.page,
            total_pages: decoded.total_pages,
            results: decoded.results,
            genre_group_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_payload_decodes() {
        let body = r#"{"genres":[{"id":28,"name":"Action"},{"id":35,"name":"Comedy"}]}"#;
        let decoded: GenreListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.genres.len(), 2);
        assert_eq!(decoded.genres[0].id, 28);
        assert_eq!(decoded.genres[1].name, "Comedy");
    }

    #[test]
    fn test_discover_payload_decodes_with_envelope() {
        let body = r#"{
            "page": 2,
            "total_pages": 40,
            "results": [
                {"id": 550, "title": "Fight Club", "poster_path": "/x.jpg"},
                {"id": 551, "title": "The Matrix"}
            ]
        }"#;
        let decoded: DiscoverMoviesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.page, 2);
        assert_eq!(decoded.total_pages, 40);
        assert_eq!(decoded.results.len(), 2);
        // poster_path missing on the wire decodes as empty
        assert_eq!(decoded.results[1].poster_path, "");
    }

    #[test]
    fn test_discover_payload_without_envelope_defaults_to_first_page() {
        let body = r#"{"results":[]}"#;
        let decoded: DiscoverMoviesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.page, 1);
        assert_eq!(decoded.total_pages, 1);
        assert!(decoded.results.is_empty());
    }
}
