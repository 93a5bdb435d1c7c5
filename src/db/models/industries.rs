//! Database models for industries and company/industry associations.

use serde::{Deserialize, Serialize};

/// Database representation of an industry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Industry {
    pub code: String,
    pub name: String,
}

/// An industry row joined with the codes of its associated companies.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct IndustryWithCompanies {
    pub code: String,
    pub name: String,
    pub companies: Option<Vec<String>>,
}

/// A company/industry association row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyIndustry {
    pub comp_code: String,
    pub industry_code: String,
}

/// Request to insert a new industry
#[derive(Debug, Clone)]
pub struct IndustryCreateDBRequest {
    pub code: String,
    pub name: String,
}
