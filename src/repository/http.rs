//! Reqwest-backed implementation of the service seams.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::animal::{Breed, Favorite};
use crate::domain::criteria::Species;
use crate::dto::search::{BreedEntry, FavoriteEntry, SearchRequest, SearchResponseBody};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AnimalSearcher, BreedCatalog, FavoritesSource, SearchOutcome};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the adoption API.
#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: Client,
    api_url: String,
}

impl HttpRepository {
    pub fn new(api_url: &str) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RepositoryError::Network(err.to_string()))?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }
}

#[async_trait]
impl AnimalSearcher for HttpRepository {
    async fn search_animals(&self, request: &SearchRequest) -> RepositoryResult<SearchOutcome> {
        let response = self
            .client
            .post(self.endpoint("/animal"))
            .json(request)
            .send()
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(SearchOutcome::NoMatches);
        }
        let body: SearchResponseBody = response.error_for_status()?.json().await?;
        Ok(SearchOutcome::Matches(body.animal))
    }
}

#[async_trait]
impl BreedCatalog for HttpRepository {
    async fn list_breeds(&self, species: &Species) -> RepositoryResult<Vec<Breed>> {
        let path = match species.catalog_segment() {
            Some(segment) => format!("/breed/{segment}"),
            None => "/breed".to_string(),
        };
        let entries: Vec<BreedEntry> = self
            .client
            .get(self.endpoint(&path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(entries.into_iter().map(Breed::from).collect())
    }
}

#[async_trait]
impl FavoritesSource for HttpRepository {
    async fn list_favorites(&self, bearer_token: &str) -> RepositoryResult<Vec<Favorite>> {
        let entries: Vec<FavoriteEntry> = self
            .client
            .get(self.endpoint("/adopt/api/Favorite"))
            .bearer_auth(bearer_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(entries.into_iter().map(Favorite::from).collect())
    }
}
