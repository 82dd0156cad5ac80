//! Wire payloads exchanged with the adoption REST services.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::animal::{Animal, Breed, Favorite};
use crate::domain::criteria::FilterCriteria;

/// Body of `POST /animal`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub location_information: LocationInformation,
    pub animal_filters: AnimalFilters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInformation {
    /// Assigned server-side; always sent as `null`.
    pub client_id: Option<String>,
    /// `null` when the postal control is empty.
    pub zip_postal: Option<String>,
    pub miles_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalFilters {
    /// The service returns the entire matched set in one response.
    pub start_index: usize,
    pub filter_animal_type: Option<String>,
    pub filter_breed: Vec<String>,
    /// Plain string: the selected value when exactly one gender is checked,
    /// `""` otherwise. Contrast with `filter_age`/`filter_size`, which use
    /// `null` for "no constraint".
    pub filter_gender: String,
    pub filter_age: Option<Vec<String>>,
    #[serde(skip_serializing_if = "SizeFilter::is_omitted")]
    pub filter_size: SizeFilter,
}

/// Tri-state size filter: the field is left out of the payload for cats,
/// sent as `null` when nothing is selected, and as a value list otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeFilter {
    Omitted,
    Unconstrained,
    Selected(Vec<String>),
}

impl SizeFilter {
    pub fn is_omitted(&self) -> bool {
        matches!(self, SizeFilter::Omitted)
    }
}

impl Serialize for SizeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SizeFilter::Omitted | SizeFilter::Unconstrained => serializer.serialize_none(),
            SizeFilter::Selected(values) => values.serialize(serializer),
        }
    }
}

impl From<&FilterCriteria> for SearchRequest {
    fn from(criteria: &FilterCriteria) -> Self {
        let zip = criteria.zip_postal.trim();
        let breed = criteria.breed.trim();
        let filter_gender = match criteria.genders.as_slice() {
            [gender] => gender.clone(),
            _ => String::new(),
        };
        let filter_age = if criteria.ages.is_empty() {
            None
        } else {
            Some(criteria.ages.clone())
        };
        let filter_size = if criteria.animal_type.is_cat() {
            SizeFilter::Omitted
        } else if criteria.sizes.is_empty() {
            SizeFilter::Unconstrained
        } else {
            SizeFilter::Selected(criteria.sizes.clone())
        };
        Self {
            location_information: LocationInformation {
                client_id: None,
                zip_postal: (!zip.is_empty()).then(|| zip.to_string()),
                miles_radius: criteria.radius_miles.get(),
            },
            animal_filters: AnimalFilters {
                start_index: 0,
                filter_animal_type: criteria
                    .animal_type
                    .request_value()
                    .map(str::to_string),
                filter_breed: if breed.is_empty() {
                    Vec::new()
                } else {
                    vec![breed.to_string()]
                },
                filter_gender,
                filter_age,
                filter_size,
            },
        }
    }
}

/// Body of a non-empty `POST /animal` response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResponseBody {
    #[serde(default)]
    pub animal: Vec<Animal>,
}

/// One entry of the `GET /breed` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreedEntry {
    pub breed_key: String,
    pub breed_value: String,
}

impl From<BreedEntry> for Breed {
    fn from(entry: BreedEntry) -> Self {
        Self {
            key: entry.breed_key,
            label: entry.breed_value,
        }
    }
}

/// One entry of the `GET /adopt/api/Favorite` response.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteEntry {
    #[serde(rename = "Animal")]
    pub animal: FavoriteAnimal,
    #[serde(rename = "Id")]
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteAnimal {
    #[serde(rename = "ReferenceNumber")]
    pub reference_number: String,
}

impl From<FavoriteEntry> for Favorite {
    fn from(entry: FavoriteEntry) -> Self {
        Self {
            reference_number: entry.animal.reference_number,
            favorite_id: entry.id,
        }
    }
}
