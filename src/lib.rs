//! Client-side engine for a pet-adoption search page.
//!
//! The crate owns the three things a bookmarkable search has to keep in
//! agreement: the active [`FilterCriteria`](domain::criteria::FilterCriteria),
//! the client-side paginated view over the result set, and the URL
//! query-string contract. Remote services (animal search, breed catalog,
//! favorites) are consumed through the seams in [`repository`]; rendering goes
//! through the view seam in [`services::view`].

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
