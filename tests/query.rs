use adopt_search::domain::criteria::{FilterCriteria, Species};
use adopt_search::domain::types::RadiusMiles;
use adopt_search::dto::query::SearchQuery;

fn round_trip(criteria: &FilterCriteria) -> FilterCriteria {
    let encoded = SearchQuery::from(criteria).encode().unwrap();
    FilterCriteria::from(SearchQuery::decode(&encoded).unwrap())
}

#[test]
fn default_criteria_round_trip() {
    let criteria = FilterCriteria::default();
    assert_eq!(round_trip(&criteria), criteria);
}

#[test]
fn full_criteria_round_trip() {
    let criteria = FilterCriteria {
        animal_type: Species::Named("Dog".into()),
        breed: "great dane".into(),
        zip_postal: "K1A 0B1".into(),
        radius_miles: RadiusMiles::new(50),
        genders: vec!["Male".into(), "Female".into()],
        ages: vec!["Senior".into(), "Puppy".into()],
        sizes: vec!["Large".into(), "Small".into()],
    };
    assert_eq!(round_trip(&criteria), criteria);
}

#[test]
fn selection_order_survives_the_round_trip_unsorted() {
    let criteria = FilterCriteria {
        ages: vec!["Senior".into(), "Adult".into(), "Puppy".into()],
        ..FilterCriteria::default()
    };
    assert_eq!(
        round_trip(&criteria).ages,
        vec!["Senior", "Adult", "Puppy"]
    );
}

#[test]
fn cat_urls_carry_no_size_parameter() {
    let mut criteria = FilterCriteria {
        zip_postal: "90210".into(),
        ..FilterCriteria::default()
    };
    criteria.set_species(Species::Named("Cat".into()));

    let encoded = SearchQuery::from(&criteria).encode().unwrap();
    assert!(!encoded.contains("filterSize"));
    assert_eq!(round_trip(&criteria), criteria);
}

#[test]
fn non_cat_urls_keep_an_empty_size_parameter() {
    let criteria = FilterCriteria {
        animal_type: Species::Named("Dog".into()),
        ..FilterCriteria::default()
    };
    let encoded = SearchQuery::from(&criteria).encode().unwrap();
    assert!(encoded.contains("filterSize="));
}

#[test]
fn any_species_serializes_as_the_null_token() {
    let encoded = SearchQuery::from(&FilterCriteria::default()).encode().unwrap();
    assert!(encoded.contains("filterAnimalType=null"));
}

#[test]
fn percent_encoded_values_survive() {
    let criteria = FilterCriteria {
        breed: "wirehaired pointing griffon & co".into(),
        zip_postal: "K1A 0B1".into(),
        ..FilterCriteria::default()
    };
    let encoded = SearchQuery::from(&criteria).encode().unwrap();
    assert!(!encoded.contains(' '));
    assert_eq!(round_trip(&criteria), criteria);
}

#[test]
fn foreign_query_strings_parse_leniently() {
    let query = SearchQuery::decode("utm_source=mail&zipPostal=90210&milesRadius=forty").unwrap();
    assert!(query.is_restorable());
    let criteria = FilterCriteria::from(query);
    assert_eq!(criteria.zip_postal, "90210");
    assert_eq!(criteria.radius_miles, RadiusMiles::default());
    assert_eq!(criteria.animal_type, Species::Any);
}

#[test]
fn missing_zip_marks_the_url_as_not_restorable() {
    let query = SearchQuery::decode("filterAnimalType=Dog").unwrap();
    assert!(!query.is_restorable());

    let query = SearchQuery::decode("zipPostal=").unwrap();
    assert!(query.is_restorable());
}

#[test]
fn leading_question_mark_is_tolerated() {
    let query = SearchQuery::decode("?zipPostal=90210").unwrap();
    assert_eq!(query.zip_postal.as_deref(), Some("90210"));
}
