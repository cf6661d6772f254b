use std::ops::RangeInclusive;

use indexmap::IndexMap;
use thiserror::Error;

use crate::model::movie::Movie;

// The two bounds differ on purpose: adding and updating were specified
// independently and keep their own ranges.
const ADD_YEAR_BOUNDS: RangeInclusive<i32> = 1888..=2024;
const UPDATE_YEAR_BOUNDS: RangeInclusive<i32> = 1900..=2026;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Movie ID already exists")]
    DuplicateId,
    #[error("Movie not found")]
    NotFound,
    #[error("Release year must be a number")]
    InvalidFormat,
    #[error("Invalid release year")]
    OutOfRange,
}

/// One optional value per mutable field. `None` means "leave the field
/// alone"; a blank string for the text fields is skipped the same way.
#[derive(Debug, Default)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<String>,
    pub genre: Option<String>,
}

/// In-memory keyed store of movies. Insertion order is preserved, so
/// listing and search output are deterministic.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: IndexMap<String, Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            movies: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.movies.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn add_movie(
        &mut self,
        id: &str,
        title: &str,
        director: &str,
        release_year: &str,
        genre: &str,
    ) -> Result<&'static str, CatalogError> {
        if self.movies.contains_key(id) {
            return Err(CatalogError::DuplicateId);
        }

        let year = parse_year(release_year)?;
        if !ADD_YEAR_BOUNDS.contains(&year) {
            return Err(CatalogError::OutOfRange);
        }

        self.movies.insert(
            id.to_string(),
            Movie {
                id: id.to_string(),
                title: title.to_string(),
                director: director.to_string(),
                year,
                genre: genre.to_string(),
            },
        );
        Ok("Movie added successfully")
    }

    pub fn view_all_movies(&self) -> String {
        if self.movies.is_empty() {
            return "No movies in the collection".to_string();
        }

        self.movies
            .values()
            .map(|movie| movie.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn search_movie(&self, title: &str) -> String {
        let query = title.to_lowercase();
        let found: Vec<String> = self
            .movies
            .values()
            .filter(|movie| movie.title.to_lowercase().contains(&query))
            .map(|movie| movie.to_string())
            .collect();

        if found.is_empty() {
            return "No movies found with that title".to_string();
        }
        found.join("\n\n")
    }

    pub fn update_movie(
        &mut self,
        id: &str,
        updates: &MovieUpdate,
    ) -> Result<&'static str, CatalogError> {
        let movie = self.movies.get_mut(id).ok_or(CatalogError::NotFound)?;

        // The year is validated before any field is applied, so a bad year
        // leaves the whole record untouched.
        let year = match updates.release_year.as_deref() {
            Some(raw) => {
                let year = parse_year(raw)?;
                if !UPDATE_YEAR_BOUNDS.contains(&year) {
                    return Err(CatalogError::OutOfRange);
                }
                Some(year)
            }
            None => None,
        };

        if let Some(title) = non_blank(&updates.title) {
            movie.title = title.to_string();
        }
        if let Some(director) = non_blank(&updates.director) {
            movie.director = director.to_string();
        }
        if let Some(genre) = non_blank(&updates.genre) {
            movie.genre = genre.to_string();
        }
        if let Some(year) = year {
            movie.year = year;
        }

        Ok("Movie updated successfully")
    }

    pub fn delete_movie(&mut self, id: &str) -> Result<&'static str, CatalogError> {
        match self.movies.shift_remove(id) {
            Some(_) => Ok("Movie deleted successfully"),
            None => Err(CatalogError::NotFound),
        }
    }
}

fn parse_year(raw: &str) -> Result<i32, CatalogError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CatalogError::InvalidFormat)
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
