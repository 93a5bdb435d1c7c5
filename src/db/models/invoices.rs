//! Database models for invoices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Database representation of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Request to insert a new invoice. `paid` defaults to false and `add_date`
/// to the current date at the database level.
#[derive(Debug, Clone)]
pub struct InvoiceCreateDBRequest {
    pub comp_code: String,
    pub amt: f64,
}
