//! Raw filter-control snapshots collected by the UI layer.

pub mod search;
