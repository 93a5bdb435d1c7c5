//! API models for industry endpoints.

use crate::db::models::industries::{CompanyIndustry, Industry, IndustryWithCompanies};
use serde::{Deserialize, Serialize};

/// Body for POST /industries
#[derive(Debug, Deserialize)]
pub struct IndustryCreate {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Body for POST /industries/company/{code}; names the industry to associate
#[derive(Debug, Deserialize)]
pub struct AssociationCreate {
    pub code: Option<String>,
}

/// API response for an industry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryResponse {
    pub code: String,
    pub name: String,
}

impl From<Industry> for IndustryResponse {
    fn from(industry: Industry) -> Self {
        Self {
            code: industry.code,
            name: industry.name,
        }
    }
}

/// API response for an industry with its aggregated company codes.
/// `companies` is null when no company carries the industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryDetailResponse {
    pub code: String,
    pub name: String,
    pub companies: Option<Vec<String>>,
}

impl From<IndustryWithCompanies> for IndustryDetailResponse {
    fn from(industry: IndustryWithCompanies) -> Self {
        Self {
            code: industry.code,
            name: industry.name,
            companies: industry.companies,
        }
    }
}

/// API response for a company/industry association
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationResponse {
    pub comp_code: String,
    pub industry_code: String,
}

impl From<CompanyIndustry> for AssociationResponse {
    fn from(association: CompanyIndustry) -> Self {
        Self {
            comp_code: association.comp_code,
            industry_code: association.industry_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndustryEnvelope {
    pub industry: IndustryResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndustryListEnvelope {
    pub industries: Vec<IndustryDetailResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssociationEnvelope {
    pub association: AssociationResponse,
}
