//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all endpoints
//! - **[`models`]**: Request/response data structures defining the wire shapes
//!
//! Every success response wraps its payload in a resource-named envelope
//! (`{"company": …}`, `{"invoices": […]}`), and every failure produces the
//! uniform `{"error": {"message", "status"}}` envelope from
//! [`crate::errors`].

pub mod handlers;
pub mod models;
