//! Data models for directory records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::query::SortField;

/// Postal address embedded in an organization record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub house: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        house: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            house: house.into(),
        }
    }

    /// Single-line form used by the address column: "city, street, house"
    pub fn composed(&self) -> String {
        format!("{}, {}, {}", self.city, self.street, self.house)
    }
}

/// A single directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    /// Opaque identity token, never changed after creation
    pub id: String,
    /// Organization name
    pub name: String,
    /// Full name of the director; the searchable field
    pub director: String,
    /// Free-form phone number
    pub phone: String,
    /// Postal address
    pub address: Address,
}

impl Organization {
    /// Create a record with a freshly generated id
    pub fn new(
        name: impl Into<String>,
        director: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
    ) -> Self {
        Self::with_id(generate_id(), name, director, phone, address)
    }

    /// Create a record with an explicit id
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        director: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            director: director.into(),
            phone: phone.into(),
            address,
        }
    }

    /// Text of a sortable column
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Name => &self.name,
            SortField::Director => &self.director,
        }
    }
}

/// Generate a new record id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
