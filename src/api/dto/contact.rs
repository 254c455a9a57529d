//! DTOs for contact endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Contact;

/// Body of `POST /api/contacts`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(email, length(max = 200))]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// Body of `PUT /api/contacts/{contactId}`. A full replacement, same rules
/// as creation.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(email, length(max = 200))]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Query string of `GET /api/contacts`.
///
/// `page`/`size` arrive as strings in the query; `serde_with` parses them
/// as integers. Zero, negative and absent values all fall back to the
/// defaults (page 1, size 10); sizes above [`MAX_PAGE_SIZE`] are clamped.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct SearchContactParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<i64>,
}

impl SearchContactParams {
    pub fn page_or_default(&self) -> i64 {
        match self.page {
            Some(page) if page > 0 => page,
            _ => 1,
        }
    }

    pub fn size_or_default(&self) -> i64 {
        match self.size {
            Some(size) if size > 0 => size.min(MAX_PAGE_SIZE),
            _ => 10,
        }
    }
}

/// Contact shape returned to clients. The owner id is implied by the
/// authenticated request and not echoed back.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
