//! Shared test doubles: a mock of the repository seams and a recording view.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use adopt_search::domain::animal::{Animal, Breed, Favorite};
use adopt_search::domain::criteria::{FilterCriteria, Species};
use adopt_search::dto::search::SearchRequest;
use adopt_search::pagination::Paginated;
use adopt_search::repository::errors::RepositoryResult;
use adopt_search::repository::{AnimalSearcher, BreedCatalog, FavoritesSource, SearchOutcome};
use adopt_search::services::view::SearchView;

mock! {
    pub Repository {}

    #[async_trait]
    impl AnimalSearcher for Repository {
        async fn search_animals(&self, request: &SearchRequest) -> RepositoryResult<SearchOutcome>;
    }

    #[async_trait]
    impl BreedCatalog for Repository {
        async fn list_breeds(&self, species: &Species) -> RepositoryResult<Vec<Breed>>;
    }

    #[async_trait]
    impl FavoritesSource for Repository {
        async fn list_favorites(&self, bearer_token: &str) -> RepositoryResult<Vec<Favorite>>;
    }
}

/// Everything the engine asked the view to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    UrlReplaced(String),
    PageRendered {
        reference_numbers: Vec<String>,
        pages: Vec<Option<usize>>,
        page: usize,
    },
    EmptyState,
    PaginationVisible(bool),
    BreedOptions(Vec<String>),
    BreedEnabled(bool),
    CriteriaProjected(FilterCriteria),
    Favorited {
        reference_number: String,
        favorite_id: i64,
    },
}

#[derive(Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// The most recent rendered page, if any.
    pub fn last_page(&self) -> Option<(Vec<String>, Vec<Option<usize>>, usize)> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ViewEvent::PageRendered {
                    reference_numbers,
                    pages,
                    page,
                } => Some((reference_numbers, pages, page)),
                _ => None,
            })
    }

    pub fn rendered_page_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, ViewEvent::PageRendered { .. }))
            .count()
    }

    pub fn last_url(&self) -> Option<String> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ViewEvent::UrlReplaced(url) => Some(url),
                _ => None,
            })
    }
}

impl SearchView for RecordingView {
    fn replace_url_query(&self, query: &str) {
        self.push(ViewEvent::UrlReplaced(query.to_string()));
    }

    fn render_page(&self, page: &Paginated<Animal>) {
        self.push(ViewEvent::PageRendered {
            reference_numbers: page
                .items
                .iter()
                .map(|animal| animal.reference_number.clone())
                .collect(),
            pages: page.pages.clone(),
            page: page.page,
        });
    }

    fn render_empty_state(&self) {
        self.push(ViewEvent::EmptyState);
    }

    fn set_pagination_visible(&self, visible: bool) {
        self.push(ViewEvent::PaginationVisible(visible));
    }

    fn replace_breed_options(&self, breeds: &[Breed]) {
        self.push(ViewEvent::BreedOptions(
            breeds.iter().map(|breed| breed.key.clone()).collect(),
        ));
    }

    fn set_breed_enabled(&self, enabled: bool) {
        self.push(ViewEvent::BreedEnabled(enabled));
    }

    fn project_criteria(&self, criteria: &FilterCriteria) {
        self.push(ViewEvent::CriteriaProjected(criteria.clone()));
    }

    fn mark_favorite(&self, reference_number: &str, favorite_id: i64) {
        self.push(ViewEvent::Favorited {
            reference_number: reference_number.to_string(),
            favorite_id,
        });
    }
}

/// Builds `count` animals with stable reference numbers `A-0001`, `A-0002`, …
pub fn animals(count: usize) -> Vec<Animal> {
    (1..=count)
        .map(|n| Animal {
            reference_number: format!("A-{n:04}"),
            name: format!("Pet {n}"),
            animal_type: "Dog".into(),
            breed: "beagle".into(),
            ..Animal::default()
        })
        .collect()
}

pub fn breeds(keys: &[&str]) -> Vec<Breed> {
    keys.iter()
        .map(|key| Breed {
            key: (*key).to_string(),
            label: (*key).to_uppercase(),
        })
        .collect()
}
