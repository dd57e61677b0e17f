//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes a strongly typed error so adapters map their failures
//! into predictable variants.

mod school_store;

#[cfg(test)]
pub use school_store::MockSchoolStore;
pub use school_store::{SchoolStore, SchoolStoreError};
