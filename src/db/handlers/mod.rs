//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut PgConnection` and provides strongly-typed
//! query methods for one table (plus its join queries). All queries are
//! parameterized; results map into [`crate::db::models`] structs via
//! `sqlx::FromRow`.
//!
//! ```ignore
//! use biztime::db::handlers::Companies;
//!
//! async fn example(pool: &sqlx::PgPool) -> anyhow::Result<()> {
//!     let mut conn = pool.acquire().await?;
//!     let companies = Companies::new(&mut conn).list().await?;
//!     Ok(())
//! }
//! ```

pub mod companies;
pub mod industries;
pub mod invoices;

pub use companies::Companies;
pub use industries::Industries;
pub use invoices::Invoices;
