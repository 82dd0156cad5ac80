//! The bookmarkable URL query contract.
//!
//! Reloading a URL must reproduce the same search, so [`SearchQuery`] and
//! [`FilterCriteria`] convert into each other without information loss.
//! Multi-valued filters are comma-joined in selection order; `filterSize` is
//! omitted from the query string entirely when the species is Cat.

use serde::{Deserialize, Serialize};

use crate::domain::criteria::{FilterCriteria, Species};
use crate::domain::types::RadiusMiles;

/// Query parameters carried by the search page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    /// Raw postal input. Its presence is what marks a URL as a restorable
    /// search.
    pub zip_postal: Option<String>,
    pub filter_animal_type: String,
    pub filter_breed: String,
    pub miles_radius: String,
    pub filter_gender: String,
    pub filter_age: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_size: Option<String>,
}

impl SearchQuery {
    /// Percent-encoded query string, without the leading `?`.
    pub fn encode(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }

    /// Parses a raw query string; unknown keys are ignored, missing keys
    /// fall back to their defaults.
    pub fn decode(raw: &str) -> Result<Self, serde_html_form::de::Error> {
        serde_html_form::from_str(raw.trim_start_matches('?'))
    }

    /// Whether the URL carries a search to restore.
    pub fn is_restorable(&self) -> bool {
        self.zip_postal.is_some()
    }
}

fn join_tokens(values: &[String]) -> String {
    values.join(",")
}

fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<&FilterCriteria> for SearchQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        let filter_size =
            (!criteria.animal_type.is_cat()).then(|| join_tokens(&criteria.sizes));
        Self {
            zip_postal: Some(criteria.zip_postal.clone()),
            filter_animal_type: criteria.animal_type.as_token().to_string(),
            filter_breed: criteria.breed.clone(),
            miles_radius: criteria.radius_miles.to_string(),
            filter_gender: join_tokens(&criteria.genders),
            filter_age: join_tokens(&criteria.ages),
            filter_size,
        }
    }
}

impl From<SearchQuery> for FilterCriteria {
    fn from(query: SearchQuery) -> Self {
        let animal_type = Species::from_token(&query.filter_animal_type);
        let sizes = if animal_type.is_cat() {
            Vec::new()
        } else {
            split_tokens(query.filter_size.as_deref().unwrap_or_default())
        };
        Self {
            breed: query.filter_breed,
            zip_postal: query.zip_postal.unwrap_or_default(),
            radius_miles: RadiusMiles::parse_lenient(&query.miles_radius),
            genders: split_tokens(&query.filter_gender),
            ages: split_tokens(&query.filter_age),
            sizes,
            animal_type,
        }
    }
}
