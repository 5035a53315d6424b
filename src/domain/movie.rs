// src/domain/movie.rs

use serde::{Deserialize, Serialize};

use crate::common::IMAGE_BASE_URL;

/// A single movie as decoded from the discover payload.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub poster_path: String,
}

impl Movie {
    /// Absolute poster URL.
    pub fn image_url(&self) -> String {
        format!("{}{}", IMAGE_BASE_URL, self.poster_path)
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }
}

/// One page of discover results.
///
/// `genre_group_id` correlates the batch with the genre group it was
/// requested for; the paging envelope comes straight from the remote
/// response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<Movie>,
    pub genre_group_id: Option<i32>,
}

impl MovieList {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_joins_base_and_path() {
        let movie = Movie {
            id: 550,
            title: "Fight Club".to_string(),
            poster_path: "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string(),
        };
        assert_eq!(
            movie.image_url(),
            format!("{}{}", IMAGE_BASE_URL, "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")
        );
        assert_eq!(movie.id_string(), "550");
    }

    #[test]
    fn test_last_page_detection() {
        let list = MovieList {
            page: 4,
            total_pages: 4,
            results: Vec::new(),
            genre_group_id: Some(28),
        };
        assert!(list.is_last_page());
        assert!(list.is_empty());
    }
}
