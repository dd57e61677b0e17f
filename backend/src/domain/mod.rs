//! Domain types for the school service.
//!
//! These types are transport agnostic. Inbound adapters decode requests into
//! them and map failures to HTTP responses; outbound adapters persist them
//! behind the ports defined in [`ports`].

pub mod ports;
mod school;
mod validation;

pub use school::{DESCRIPTION_MAX, School, SchoolRecord};
pub use validation::{CONTACT_LEN_MAX, CONTACT_LEN_MIN, ValidationError, validate_school};
