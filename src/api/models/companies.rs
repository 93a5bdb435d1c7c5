//! API models for company endpoints.

use crate::db::models::companies::{Company, CompanyWithIndustries};
use crate::db::models::invoices::Invoice;
use serde::{Deserialize, Serialize};

/// Body for POST /companies. The company code is not accepted from the
/// client; it is derived by slugifying the name.
#[derive(Debug, Deserialize)]
pub struct CompanyCreate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body for PUT /companies/{code}; all fields are required
#[derive(Debug, Deserialize)]
pub struct CompanyReplace {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body for PATCH /companies/{code}; any subset of fields
#[derive(Debug, Deserialize)]
pub struct CompanyPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// API response for a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
        }
    }
}

/// API response for a company with its aggregated industry names.
/// `industries` is null when the company has no associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDetailResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub industries: Option<Vec<String>>,
}

impl From<CompanyWithIndustries> for CompanyDetailResponse {
    fn from(company: CompanyWithIndustries) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            industries: company.industries,
        }
    }
}

/// API response for a company with its invoices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInvoicesResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<super::invoices::InvoiceResponse>,
}

impl CompanyInvoicesResponse {
    pub fn new(company: Company, invoices: Vec<Invoice>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices: invoices.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyEnvelope<T> {
    pub company: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyListEnvelope {
    pub companies: Vec<CompanyResponse>,
}

/// Derive a URL-safe company code from a display name: lowercased, trimmed,
/// whitespace collapsed to single dashes, punctuation dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
        // other punctuation is dropped entirely
    }

    slug
}
