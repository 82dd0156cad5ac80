//! Filter criteria: the complete user-selectable search intent.

use crate::domain::types::RadiusMiles;

/// Token used for the "any species" option by both the URL contract and the
/// search endpoint.
pub const ANY_SPECIES_TOKEN: &str = "null";

/// Species selected in the pet-type control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Species {
    /// No species filter; serialized as the `"null"` token.
    #[default]
    Any,
    Named(String),
}

impl Species {
    /// Parses the raw control/URL token. `"null"` and the empty string both
    /// mean "any".
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "" | ANY_SPECIES_TOKEN => Species::Any,
            name => Species::Named(name.to_string()),
        }
    }

    /// Token written back to the URL contract.
    pub fn as_token(&self) -> &str {
        match self {
            Species::Any => ANY_SPECIES_TOKEN,
            Species::Named(name) => name,
        }
    }

    /// Species value sent to the search endpoint; `None` means no filter.
    pub fn request_value(&self) -> Option<&str> {
        match self {
            Species::Any => None,
            Species::Named(name) => Some(name),
        }
    }

    pub fn is_cat(&self) -> bool {
        matches!(self, Species::Named(name) if name.eq_ignore_ascii_case("cat"))
    }

    /// Whether the breed catalog applies. "Any" and "Other" have no breed
    /// list; the breed control is disabled and no fetch is issued for them.
    pub fn has_breed_catalog(&self) -> bool {
        match self {
            Species::Any => false,
            Species::Named(name) => !name.eq_ignore_ascii_case("other"),
        }
    }

    /// Lowercased path segment for the breed catalog endpoint.
    pub fn catalog_segment(&self) -> Option<String> {
        match self {
            Species::Any => None,
            Species::Named(name) => Some(name.to_ascii_lowercase()),
        }
    }
}

/// The complete user-selectable search intent, round-trippable through the
/// URL query contract in `dto::query`.
///
/// Multi-valued selections keep the order the controls were read in; the
/// order carries no meaning but keeps serialized URLs stable. `sizes` stays
/// empty whenever the species is Cat (cats have no size attribute); the
/// construction and mutation paths maintain that invariant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub animal_type: Species,
    /// Single breed code; empty means "any breed".
    pub breed: String,
    /// Raw postal input. Validated at the submit boundary, not here.
    pub zip_postal: String,
    pub radius_miles: RadiusMiles,
    pub genders: Vec<String>,
    pub ages: Vec<String>,
    pub sizes: Vec<String>,
}

impl FilterCriteria {
    /// Switches the species, dropping the breed selection (the breed list is
    /// species-specific) and any size selection when the new species is Cat.
    pub fn set_species(&mut self, species: Species) {
        self.animal_type = species;
        self.breed.clear();
        if self.animal_type.is_cat() {
            self.sizes.clear();
        }
    }

    /// Resets the sidebar refinements (radius, genders, ages, sizes) to their
    /// defaults. Species, breed, and postal input are left untouched.
    pub fn clear_refinements(&mut self) {
        self.radius_miles = RadiusMiles::default();
        self.genders.clear();
        self.ages.clear();
        self.sizes.clear();
    }
}
