pub mod fixture;

use crate::domain::Film;
use std::sync::Arc;
use tracing::debug;

/// Read-only, in-memory film catalog.
///
/// The film list is fixed at construction and shared between clones.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    films: Arc<[Film]>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

impl CatalogStore {
    pub fn new(films: Vec<Film>) -> Self {
        Self {
            films: films.into(),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(fixture::sample_films())
    }

    /// Every film, in catalog order
    pub fn list_films(&self) -> Vec<Film> {
        self.films.to_vec()
    }

    /// Films whose author is exactly `name` (case-sensitive)
    pub fn find_by_author(&self, name: Option<&str>) -> Vec<Film> {
        let Some(name) = name else {
            return Vec::new();
        };
        let films: Vec<Film> = self
            .films
            .iter()
            .filter(|film| film.author == name)
            .cloned()
            .collect();
        debug!("Found {} films by author {:?}", films.len(), name);
        films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_films_is_stable_and_non_empty() {
        let store = CatalogStore::with_sample_data();
        let first = store.list_films();
        let second = store.list_films();

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first, fixture::sample_films());
    }

    #[test]
    fn test_find_by_author_matches_exactly() {
        let store = CatalogStore::with_sample_data();
        let films = store.find_by_author(Some("Christopher Nolan"));

        assert_eq!(films.len(), 3);
        assert!(films.iter().all(|f| f.author == "Christopher Nolan"));
        let titles: Vec<_> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "Interstellar", "Dunkirk"]);
    }

    #[test]
    fn test_find_by_author_is_case_sensitive() {
        let store = CatalogStore::with_sample_data();
        assert!(store.find_by_author(Some("christopher nolan")).is_empty());
        assert!(store.find_by_author(Some(" Christopher Nolan")).is_empty());
    }

    #[test]
    fn test_unknown_or_missing_author_is_empty() {
        let store = CatalogStore::with_sample_data();
        assert!(store.find_by_author(Some("Unknown Author")).is_empty());
        assert!(store.find_by_author(None).is_empty());
    }

    #[test]
    fn test_every_author_lookup_returns_only_that_author() {
        let store = CatalogStore::with_sample_data();
        for film in store.list_films() {
            let found = store.find_by_author(Some(&film.author));
            assert!(found.contains(&film));
            assert!(found.iter().all(|f| f.author == film.author));
        }
    }

    #[test]
    fn test_clones_share_the_same_films() {
        let store = CatalogStore::new(vec![Film {
            title: "X".into(),
            author: "Y".into(),
            co_author: vec![],
            release_date: 2020,
        }]);
        let clone = store.clone();
        assert_eq!(clone.len(), 1);
        assert_eq!(clone.list_films(), store.list_films());
    }
}
