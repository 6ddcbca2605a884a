//! User domain entity.

use serde::{Deserialize, Serialize};

/// User domain entity
///
/// `id` is `None` until storage assigns one on the first save. The
/// repository writes whole rows, so a user that is saved again must carry
/// every field it should keep, not only the ones that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl User {
    /// Create a new, not yet persisted user without an address
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            street: None,
            postal_code: None,
            city: None,
            country: None,
        }
    }

    /// Set all four address fields at once
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.street = Some(street.into());
        self.postal_code = Some(postal_code.into());
        self.city = Some(city.into());
        self.country = Some(country.into());
        self
    }

    /// Check if storage has assigned an id
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
