//! Database record models matching table schemas.
//!
//! Each struct here corresponds to a table row (or an aggregate row produced
//! by a join) and derives `sqlx::FromRow` so repositories can map query
//! results directly. Database models are distinct from the API models in
//! [`crate::api::models`], which define the wire shapes.

pub mod companies;
pub mod industries;
pub mod invoices;
