//! The search state engine: filter criteria, client-side pagination, and the
//! URL synchronization contract in one place.

use log::{debug, warn};
use validator::Validate;

use crate::domain::animal::{Animal, Breed};
use crate::domain::criteria::{FilterCriteria, Species};
use crate::dto::query::SearchQuery;
use crate::dto::search::SearchRequest;
use crate::forms::search::SearchForm;
use crate::pagination::PaginationState;
use crate::repository::{AnimalSearcher, BreedCatalog, FavoritesSource, SearchOutcome};
use crate::services::view::SearchView;
use crate::services::{ServiceError, ServiceResult};

/// Ticket tying an in-flight breed-list fetch to the species and generation
/// that issued it. Finishing a superseded ticket discards the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedFetch {
    species: Species,
    generation: u64,
}

impl BreedFetch {
    pub fn species(&self) -> &Species {
        &self.species
    }
}

/// Owns the active [`FilterCriteria`] and [`PaginationState`] and drives the
/// repository seams and the view.
///
/// Every criteria change follows the same sequence: URL sync (synchronous,
/// before any await point, so a reload mid-flight still reproduces the
/// search), then the request, then a reset to page 1 and a render.
pub struct SearchStateEngine<R, V> {
    repo: R,
    view: V,
    criteria: FilterCriteria,
    pagination: PaginationState<Animal>,
    breed_generation: u64,
    bearer_token: Option<String>,
}

impl<R, V> SearchStateEngine<R, V>
where
    R: AnimalSearcher + BreedCatalog + FavoritesSource,
    V: SearchView,
{
    pub fn new(repo: R, view: V) -> Self {
        Self {
            repo,
            view,
            criteria: FilterCriteria::default(),
            pagination: PaginationState::default(),
            breed_generation: 0,
            bearer_token: None,
        }
    }

    /// Bearer token used by the favorites overlay; absent means anonymous.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count()
    }

    pub fn result_count(&self) -> usize {
        self.pagination.len()
    }

    /// Validates and applies a submitted search form. Invalid postal input
    /// fails here, before any state or URL change.
    pub async fn submit(&mut self, form: &SearchForm) -> ServiceResult<()> {
        form.validate()?;
        self.apply_criteria(FilterCriteria::from(form)).await
    }

    /// Applies new criteria: URL sync, search, page reset, render.
    pub async fn apply_criteria(&mut self, criteria: FilterCriteria) -> ServiceResult<()> {
        self.criteria = criteria;
        self.sync_url()?;
        self.run_search().await
    }

    /// Resets the sidebar refinements and re-runs the search from page 1.
    /// Species, breed, and postal input are left untouched; reloading the
    /// breed list is a separate flow.
    pub async fn clear_filters(&mut self) -> ServiceResult<()> {
        self.criteria.clear_refinements();
        self.view.project_criteria(&self.criteria);
        self.sync_url()?;
        self.run_search().await
    }

    /// Species selection changed: refinements reset, a fresh search runs, and
    /// the breed list reloads under a new fetch ticket. The search outcome is
    /// reported even when the breed reload also fails.
    pub async fn change_species(&mut self, species: Species) -> ServiceResult<()> {
        self.criteria.set_species(species);
        let searched = self.clear_filters().await;
        let reloaded = self.reload_breeds().await;
        searched.and(reloaded)
    }

    /// Restores a bookmarked search. Only query strings carrying `zipPostal`
    /// restore anything; other URLs leave the page untouched and return
    /// `Ok(false)`.
    pub async fn restore_from_url(&mut self, raw_query: &str) -> ServiceResult<bool> {
        let query = SearchQuery::decode(raw_query).map_err(|err| {
            ServiceError::Query(err.to_string())
        })?;
        if !query.is_restorable() {
            return Ok(false);
        }
        self.criteria = FilterCriteria::from(query);
        self.view.project_criteria(&self.criteria);
        self.reload_breeds().await?;
        self.sync_url()?;
        self.run_search().await?;
        Ok(true)
    }

    /// Renders the requested page (clamped into range). Never issues a
    /// search; only the favorites overlay runs afterwards, and it never
    /// blocks or fails the swap.
    pub async fn render_page(&mut self, page: usize) {
        self.pagination.go_to(page);
        let paginated = self.pagination.page();
        self.view.render_page(&paginated);
        self.apply_favorites_overlay().await;
    }

    /// Advances one page; a no-op at the last page.
    pub async fn next_page(&mut self) {
        if self.pagination.next() {
            let page = self.pagination.current_page();
            self.render_page(page).await;
        }
    }

    /// Retreats one page; a no-op at the first page.
    pub async fn prev_page(&mut self) {
        if self.pagination.prev() {
            let page = self.pagination.current_page();
            self.render_page(page).await;
        }
    }

    /// Starts a breed-list reload for the current species. Returns `None`
    /// when the species has no breed catalog ("any"/"other"): the control is
    /// disabled and no request is issued. Every call supersedes any
    /// outstanding fetch, whether or not a new one starts.
    pub fn begin_breed_fetch(&mut self) -> Option<BreedFetch> {
        self.breed_generation += 1;
        let species = self.criteria.animal_type.clone();
        if !species.has_breed_catalog() {
            self.view.set_breed_enabled(false);
            return None;
        }
        self.view.set_breed_enabled(true);
        Some(BreedFetch {
            species,
            generation: self.breed_generation,
        })
    }

    /// Completes a breed-list fetch. The response is discarded when another
    /// fetch (or a species change) superseded this ticket.
    pub fn finish_breed_fetch(&mut self, fetch: BreedFetch, breeds: Vec<Breed>) {
        if fetch.generation != self.breed_generation {
            debug!(
                "discarding stale breed list for {}",
                fetch.species.as_token()
            );
            return;
        }
        self.view.replace_breed_options(&breeds);
    }

    /// Sequential begin/fetch/finish wrapper for flows with no overlap.
    pub async fn reload_breeds(&mut self) -> ServiceResult<()> {
        let Some(fetch) = self.begin_breed_fetch() else {
            return Ok(());
        };
        let breeds = self.repo.list_breeds(fetch.species()).await?;
        self.finish_breed_fetch(fetch, breeds);
        Ok(())
    }

    fn sync_url(&self) -> ServiceResult<()> {
        let query = SearchQuery::from(&self.criteria)
            .encode()
            .map_err(|err| ServiceError::Query(err.to_string()))?;
        self.view.replace_url_query(&query);
        Ok(())
    }

    async fn run_search(&mut self) -> ServiceResult<()> {
        let request = SearchRequest::from(&self.criteria);
        match self.repo.search_animals(&request).await {
            Ok(SearchOutcome::NoMatches) => {
                self.pagination.clear();
                self.view.set_pagination_visible(false);
                self.view.render_empty_state();
                Ok(())
            }
            Ok(SearchOutcome::Matches(records)) => {
                self.view.set_pagination_visible(true);
                self.pagination.replace(records);
                self.render_page(1).await;
                Ok(())
            }
            Err(err) => {
                // Degrade to the empty state; the user re-triggers by
                // changing a filter again.
                warn!("animal search failed: {err}");
                self.pagination.clear();
                self.view.set_pagination_visible(false);
                self.view.render_empty_state();
                Err(err.into())
            }
        }
    }

    async fn apply_favorites_overlay(&self) {
        let Some(token) = self.bearer_token.as_deref() else {
            return;
        };
        match self.repo.list_favorites(token).await {
            Ok(favorites) => {
                for favorite in favorites {
                    self.view
                        .mark_favorite(&favorite.reference_number, favorite.favorite_id);
                }
            }
            Err(err) => debug!("favorites overlay unavailable: {err}"),
        }
    }
}
