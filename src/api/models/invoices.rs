//! API models for invoice endpoints.

use crate::db::models::invoices::Invoice;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body for POST /invoices
#[derive(Debug, Deserialize)]
pub struct InvoiceCreate {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
}

/// Body for PUT /invoices/{id}; both fields are required
#[derive(Debug, Deserialize)]
pub struct InvoiceUpdate {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
}

/// API response for an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceEnvelope {
    pub invoice: InvoiceResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceListEnvelope {
    pub invoices: Vec<InvoiceResponse>,
}
