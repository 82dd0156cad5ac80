use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::criteria::{FilterCriteria, Species};
use crate::domain::types::{PostalCode, RadiusMiles};

/// Current value of every filter control, read verbatim from the page.
///
/// Nothing is normalized here: empty strings mean the control is unset, and
/// checkbox groups keep the order the boxes appear in. Validation only gates
/// the postal input, which is what blocks a submit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(custom(function = postal_code))]
    pub zip_postal: String,
    /// Pet-type select value; the "Any" option carries the `"null"` token.
    pub pet_type: String,
    pub breed: String,
    pub radius: String,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub ages: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

fn postal_code(value: &str) -> Result<(), ValidationError> {
    PostalCode::new(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("postal_code"))
}

impl From<&SearchForm> for FilterCriteria {
    fn from(form: &SearchForm) -> Self {
        let animal_type = Species::from_token(&form.pet_type);
        // Cats have no size attribute; the selection is dropped, not passed
        // through empty.
        let sizes = if animal_type.is_cat() {
            Vec::new()
        } else {
            form.sizes.clone()
        };
        Self {
            breed: form.breed.clone(),
            zip_postal: form.zip_postal.clone(),
            radius_miles: RadiusMiles::parse_lenient(&form.radius),
            genders: form.genders.clone(),
            ages: form.ages.clone(),
            sizes,
            animal_type,
        }
    }
}
