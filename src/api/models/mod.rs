//! API request and response data models.
//!
//! Request bodies deserialize into structs whose fields are all `Option` so
//! that missing-field validation can produce the API's field-specific error
//! messages instead of a generic deserialization failure. Response structs
//! define the public wire shapes and convert from the database models in
//! [`crate::db::models`].

pub mod companies;
pub mod industries;
pub mod invoices;

use serde::{Deserialize, Serialize};

/// Body returned by DELETE endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}
