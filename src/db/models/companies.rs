//! Database models for companies.

use serde::{Deserialize, Serialize};

/// Database representation of a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A company row joined with the names of its associated industries.
///
/// `industries` is NULL when the company has no associations; the aggregate
/// query filters out the placeholder row produced by the left join.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyWithIndustries {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub industries: Option<Vec<String>>,
}

/// Request to insert a new company
#[derive(Debug, Clone)]
pub struct CompanyCreateDBRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}
