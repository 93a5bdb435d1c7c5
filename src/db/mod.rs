//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL,
//! following the repository pattern: API handlers call into repository structs
//! ([`handlers`]) which run parameterized queries and return row structs
//! ([`models`]). Database failures are categorized by [`errors::DbError`].
//!
//! Repositories wrap a `&mut PgConnection`, so callers decide whether an
//! operation runs on a plain pool connection or inside a transaction. The
//! handlers in this crate use plain connections; no endpoint spans more than
//! two statements and none requires atomicity between them.

pub mod errors;
pub mod handlers;
pub mod models;
