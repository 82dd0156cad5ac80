use std::env;

use config::Config;
use dotenvy::dotenv;

use adopt_search::domain::animal::{Animal, Breed};
use adopt_search::domain::criteria::FilterCriteria;
use adopt_search::models::config::ClientConfig;
use adopt_search::pagination::Paginated;
use adopt_search::repository::http::HttpRepository;
use adopt_search::services::engine::SearchStateEngine;
use adopt_search::services::view::SearchView;

/// Terminal rendering of the search state, one line per result.
struct ConsoleView;

impl SearchView for ConsoleView {
    fn replace_url_query(&self, query: &str) {
        println!("search url: ?{query}");
    }

    fn render_page(&self, page: &Paginated<Animal>) {
        for animal in &page.items {
            println!(
                "  {} {} ({}, {}, {})",
                animal.reference_number, animal.name, animal.breed, animal.age, animal.gender
            );
        }
        let strip: Vec<String> = page
            .pages
            .iter()
            .map(|label| match label {
                Some(number) if *number == page.page => format!("[{number}]"),
                Some(number) => number.to_string(),
                None => "...".to_string(),
            })
            .collect();
        println!("  pages: {}", strip.join(" "));
    }

    fn render_empty_state(&self) {
        println!("  no animals matched this search");
    }

    fn set_pagination_visible(&self, _visible: bool) {}

    fn replace_breed_options(&self, breeds: &[Breed]) {
        println!("  {} breeds available", breeds.len());
    }

    fn set_breed_enabled(&self, _enabled: bool) {}

    fn project_criteria(&self, criteria: &FilterCriteria) {
        println!(
            "  searching {} within {} miles of {}",
            criteria.animal_type.as_token(),
            criteria.radius_miles,
            criteria.zip_postal
        );
    }

    fn mark_favorite(&self, reference_number: &str, _favorite_id: i64) {
        println!("  favorite: {reference_number}");
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let Some(raw_query) = env::args().nth(1) else {
        eprintln!("usage: adopt-search '<query-string>' (e.g. 'zipPostal=90210&filterAnimalType=Dog')");
        std::process::exit(2);
    };

    let repo = match HttpRepository::new(&client_config.api_url) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let mut engine = SearchStateEngine::new(repo, ConsoleView);
    if let Some(token) = client_config.bearer_token {
        engine = engine.with_bearer_token(token);
    }

    match engine.restore_from_url(&raw_query).await {
        Ok(true) => {
            println!(
                "{} results, page {} of {}",
                engine.result_count(),
                engine.current_page(),
                engine.page_count()
            );
        }
        Ok(false) => log::warn!("query string has no zipPostal parameter; nothing to search"),
        Err(err) => {
            log::error!("Search failed: {err}");
            std::process::exit(1);
        }
    }
}
