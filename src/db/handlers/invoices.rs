//! Database repository for invoices.

use crate::db::{
    errors::Result,
    models::invoices::{Invoice, InvoiceCreateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Invoices<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Invoices<'c> {
    /// Create a new Invoices repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List all invoices
    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(invoices)
    }

    /// Get an invoice by id
    #[instrument(skip(self), err)]
    pub async fn get(&mut self, id: i32) -> Result<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(invoice)
    }

    /// List all invoices billed to a company
    #[instrument(skip(self), err)]
    pub async fn list_for_company(&mut self, comp_code: &str) -> Result<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE comp_code = $1",
        )
        .bind(comp_code)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(invoices)
    }

    /// Insert a new invoice. `paid` and `add_date` take their column defaults.
    #[instrument(skip(self, request), fields(comp_code = %request.comp_code), err)]
    pub async fn create(&mut self, request: &InvoiceCreateDBRequest) -> Result<Invoice> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2)
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(&request.comp_code)
        .bind(request.amt)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(invoice)
    }

    /// Update an invoice's amount and paid flag.
    ///
    /// Paying stamps `paid_date` with the current date and un-paying clears
    /// it, regardless of the previous state. Returns None if no invoice
    /// matched.
    #[instrument(skip(self), err)]
    pub async fn update(&mut self, id: i32, amt: f64, paid: bool) -> Result<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "UPDATE invoices
             SET amt = $1, paid = $2, paid_date = CASE WHEN $2 THEN CURRENT_DATE ELSE NULL END
             WHERE id = $3
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(amt)
        .bind(paid)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(invoice)
    }

    /// Delete an invoice by id, returning the number of rows deleted
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
