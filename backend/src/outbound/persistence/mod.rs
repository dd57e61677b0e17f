//! Persistence adapters for the school store port.

mod memory;

pub use memory::InMemorySchoolStore;
