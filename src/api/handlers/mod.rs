//! HTTP request handlers for all API endpoints.
//!
//! Handlers are organized by resource. Each one deserializes the request,
//! validates required fields, runs the matching repository query from
//! [`crate::db::handlers`], and wraps the result in the resource envelope.
//! Failures propagate as [`crate::errors::Error`], which renders the JSON
//! error envelope.

pub mod companies;
pub mod industries;
pub mod invoices;
