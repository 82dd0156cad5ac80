//! Seams to the remote adoption services consumed by the engine.

use async_trait::async_trait;

use crate::domain::animal::{Animal, Breed, Favorite};
use crate::domain::criteria::Species;
use crate::dto::search::SearchRequest;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;

/// Outcome of an animal search. [`SearchOutcome::NoMatches`] is the explicit
/// empty-result signal (HTTP 204), distinct from a transport failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NoMatches,
    Matches(Vec<Animal>),
}

#[async_trait]
pub trait AnimalSearcher {
    /// Runs a search and returns the entire matched set; pagination is
    /// client-side.
    async fn search_animals(&self, request: &SearchRequest) -> RepositoryResult<SearchOutcome>;
}

#[async_trait]
pub trait BreedCatalog {
    /// Lists the breed options for a species, or the whole catalog for
    /// [`Species::Any`].
    async fn list_breeds(&self, species: &Species) -> RepositoryResult<Vec<Breed>>;
}

#[async_trait]
pub trait FavoritesSource {
    /// Lists the signed-in user's favorited animals.
    async fn list_favorites(&self, bearer_token: &str) -> RepositoryResult<Vec<Favorite>>;
}
