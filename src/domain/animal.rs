//! Records returned by the adoption services.

use serde::{Deserialize, Serialize};

/// One adoptable animal from the search service. The payload is tolerant of
/// missing attributes; `reference_number` is the stable identifier the
/// favorites overlay keys on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Animal {
    pub reference_number: String,
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub size: String,
    pub photo: Option<String>,
}

/// One breed option for the currently selected species.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breed {
    /// Code submitted with the search request.
    pub key: String,
    /// Display label shown in the breed control.
    pub label: String,
}

/// A favorited animal for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Favorite {
    pub reference_number: String,
    pub favorite_id: i64,
}
