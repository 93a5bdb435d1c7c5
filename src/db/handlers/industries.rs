//! Database repository for industries and company/industry associations.

use crate::db::{
    errors::Result,
    models::industries::{CompanyIndustry, Industry, IndustryCreateDBRequest, IndustryWithCompanies},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Industries<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Industries<'c> {
    /// Create a new Industries repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List all industries together with the codes of their associated companies
    #[instrument(skip(self), err)]
    pub async fn list_with_companies(&mut self) -> Result<Vec<IndustryWithCompanies>> {
        let industries = sqlx::query_as::<_, IndustryWithCompanies>(
            r#"
            SELECT i.code, i.name,
                   ARRAY_AGG(ci.comp_code) FILTER (WHERE ci.comp_code IS NOT NULL) AS companies
            FROM industries AS i
            LEFT JOIN companies_industries AS ci ON i.code = ci.industry_code
            GROUP BY i.code
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(industries)
    }

    /// Insert a new industry
    #[instrument(skip(self, request), fields(code = %request.code), err)]
    pub async fn create(&mut self, request: &IndustryCreateDBRequest) -> Result<Industry> {
        let industry = sqlx::query_as::<_, Industry>(
            "INSERT INTO industries (code, name) VALUES ($1, $2) RETURNING code, name",
        )
        .bind(&request.code)
        .bind(&request.name)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(industry)
    }

    /// Associate an industry with a company
    #[instrument(skip(self), err)]
    pub async fn associate(&mut self, comp_code: &str, industry_code: &str) -> Result<CompanyIndustry> {
        let association = sqlx::query_as::<_, CompanyIndustry>(
            "INSERT INTO companies_industries (comp_code, industry_code) VALUES ($1, $2) RETURNING comp_code, industry_code",
        )
        .bind(comp_code)
        .bind(industry_code)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(association)
    }
}
