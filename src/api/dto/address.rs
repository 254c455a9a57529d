//! DTOs for address endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Address;

/// Body of `POST /api/contacts/{contactId}/addresses`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(max = 255))]
    pub street: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub province: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub postal_code: String,

    #[validate(length(min = 1, max = 100))]
    pub country: String,
}

/// Body of `PUT /api/contacts/{contactId}/addresses/{addressId}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(max = 255))]
    pub street: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub province: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub postal_code: String,

    #[validate(length(min = 1, max = 100))]
    pub country: String,
}

/// Address shape returned to clients.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub id: Uuid,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id,
            street: address.street.clone(),
            city: address.city.clone(),
            province: address.province.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_country_and_postal_code() {
        let request = CreateAddressRequest {
            street: None,
            city: None,
            province: None,
            postal_code: String::new(),
            country: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_minimal_is_valid() {
        let request = CreateAddressRequest {
            street: None,
            city: None,
            province: None,
            postal_code: "12345".into(),
            country: "Indonesia".into(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_long_postal_code() {
        let request = CreateAddressRequest {
            street: None,
            city: None,
            province: None,
            postal_code: "12345678901".into(),
            country: "Indonesia".into(),
        };
        assert!(request.validate().is_err());
    }
}
