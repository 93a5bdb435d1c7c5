//! Database repository for companies.

use crate::db::{
    errors::Result,
    models::companies::{Company, CompanyCreateDBRequest, CompanyWithIndustries},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Companies<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Companies<'c> {
    /// Create a new Companies repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List all companies
    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>("SELECT code, name, description FROM companies")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(companies)
    }

    /// Get a company by code
    #[instrument(skip(self), err)]
    pub async fn get(&mut self, code: &str) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>("SELECT code, name, description FROM companies WHERE code = $1")
            .bind(code)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(company)
    }

    /// Get a company by code together with the names of its industries.
    ///
    /// The FILTER clause drops the NULL produced by the left join, so the
    /// aggregate is NULL (not `[null]`) for a company with no associations.
    #[instrument(skip(self), err)]
    pub async fn get_with_industries(&mut self, code: &str) -> Result<Option<CompanyWithIndustries>> {
        let company = sqlx::query_as::<_, CompanyWithIndustries>(
            r#"
            SELECT c.code, c.name, c.description,
                   ARRAY_AGG(i.name) FILTER (WHERE i.name IS NOT NULL) AS industries
            FROM companies AS c
            LEFT JOIN companies_industries AS ci ON c.code = ci.comp_code
            LEFT JOIN industries AS i ON ci.industry_code = i.code
            WHERE c.code = $1
            GROUP BY c.code
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(company)
    }

    /// Insert a new company
    #[instrument(skip(self, request), fields(code = %request.code), err)]
    pub async fn create(&mut self, request: &CompanyCreateDBRequest) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) RETURNING code, name, description",
        )
        .bind(&request.code)
        .bind(&request.name)
        .bind(&request.description)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(company)
    }

    /// Replace all fields of the company identified by `code`.
    ///
    /// Returns None if no company matched. The stored code may change here
    /// (self-rename); the URL path code remains the lookup identity.
    #[instrument(skip(self, request), err)]
    pub async fn replace(&mut self, code: &str, request: &CompanyCreateDBRequest) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET code = $1, name = $2, description = $3 WHERE code = $4 RETURNING code, name, description",
        )
        .bind(&request.code)
        .bind(&request.name)
        .bind(&request.description)
        .bind(code)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(company)
    }

    /// Update only the code of a company
    #[instrument(skip(self), err)]
    pub async fn update_code(&mut self, code: &str, new_code: &str) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET code = $1 WHERE code = $2 RETURNING code, name, description",
        )
        .bind(new_code)
        .bind(code)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(company)
    }

    /// Update only the name of a company
    #[instrument(skip(self), err)]
    pub async fn update_name(&mut self, code: &str, name: &str) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1 WHERE code = $2 RETURNING code, name, description",
        )
        .bind(name)
        .bind(code)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(company)
    }

    /// Update only the description of a company
    #[instrument(skip(self), err)]
    pub async fn update_description(&mut self, code: &str, description: &str) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET description = $1 WHERE code = $2 RETURNING code, name, description",
        )
        .bind(description)
        .bind(code)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(company)
    }

    /// Delete a company by code, returning the number of rows deleted
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, code: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
