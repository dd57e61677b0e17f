//! School record types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Declared maximum length for [`SchoolRecord::description`].
///
/// The validation routine does not enforce this bound; it documents the
/// contract carried over from the persisted schema.
pub const DESCRIPTION_MAX: usize = 255;

/// The id-less school shape decoded from create and update request bodies.
///
/// Every field defaults to the empty string so that an absent JSON field is
/// reported by [`validate_school`](crate::domain::validate_school) rather
/// than as a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchoolRecord {
    /// Institution name.
    #[serde(default)]
    #[schema(example = "Northgate Primary")]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    #[schema(example = "12 Ring Road")]
    pub address: String,
    /// Phone number, optionally prefixed with `+`.
    #[serde(default)]
    #[schema(example = "+628123456789")]
    pub contact: String,
    /// Contact email address.
    #[serde(default)]
    #[schema(example = "office@northgate.example")]
    pub email: String,
    /// Free-text description; see [`DESCRIPTION_MAX`].
    #[serde(default)]
    pub description: String,
}

/// A persisted school record.
///
/// The id is assigned by the store on insert and never changes afterwards;
/// updates replace every other field wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct School {
    /// Store-assigned unique identifier.
    pub id: Uuid,
    /// Institution name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Phone number.
    pub contact: String,
    /// Contact email address.
    pub email: String,
    /// Free-text description.
    pub description: String,
}

impl School {
    /// Combine a store-assigned id with a validated record.
    pub fn from_record(id: Uuid, record: SchoolRecord) -> Self {
        Self {
            id,
            name: record.name,
            address: record.address,
            contact: record.contact,
            email: record.email,
            description: record.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_decode_to_empty_strings() {
        let record: SchoolRecord = serde_json::from_str("{}").expect("empty object decodes");
        assert_eq!(record, SchoolRecord::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record: SchoolRecord =
            serde_json::from_str(r#"{"name":"A","headmaster":"ignored"}"#).expect("decodes");
        assert_eq!(record.name, "A");
    }
}
