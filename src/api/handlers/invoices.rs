use crate::AppState;
use crate::api::models::StatusResponse;
use crate::api::models::companies::{CompanyEnvelope, CompanyInvoicesResponse};
use crate::api::models::invoices::{InvoiceCreate, InvoiceEnvelope, InvoiceListEnvelope, InvoiceUpdate};
use crate::db::errors::DbError;
use crate::db::handlers::{Companies, Invoices};
use crate::db::models::invoices::InvoiceCreateDBRequest;
use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::{Path, State},
};

/// GET /invoices - list all invoices
#[tracing::instrument(skip_all)]
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<InvoiceListEnvelope>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let invoices = Invoices::new(&mut conn).list().await?;

    Ok(Json(InvoiceListEnvelope {
        invoices: invoices.into_iter().map(Into::into).collect(),
    }))
}

/// GET /invoices/{id} - fetch one invoice
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn get_invoice(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<InvoiceEnvelope>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let invoice = Invoices::new(&mut conn)
        .get(id)
        .await?
        .ok_or(Error::NotFound { resource: "Invoice" })?;

    Ok(Json(InvoiceEnvelope { invoice: invoice.into() }))
}

/// POST /invoices - insert an invoice; paid defaults to false
#[tracing::instrument(skip_all)]
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(data): Json<InvoiceCreate>,
) -> Result<Json<InvoiceEnvelope>> {
    let (comp_code, amt) = match (data.comp_code, data.amt) {
        (Some(comp_code), Some(amt)) => (comp_code, amt),
        _ => {
            return Err(Error::MissingFields {
                message: "Require comp_code, and amt".to_string(),
            });
        }
    };

    let request = InvoiceCreateDBRequest { comp_code, amt };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let invoice = Invoices::new(&mut conn).create(&request).await.map_err(|err| match err {
        DbError::ForeignKeyViolation { .. } => Error::InvalidCompanyCode,
        err => Error::Database(err),
    })?;

    Ok(Json(InvoiceEnvelope { invoice: invoice.into() }))
}

/// PUT /invoices/{id} - update amount and paid state.
///
/// Setting paid stamps paid_date with the current date; clearing it nulls
/// paid_date, regardless of the previous state.
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<InvoiceUpdate>,
) -> Result<Json<InvoiceEnvelope>> {
    let (amt, paid) = match (data.amt, data.paid) {
        (Some(amt), Some(paid)) => (amt, paid),
        _ => {
            return Err(Error::MissingFields {
                message: "Require amt and paid".to_string(),
            });
        }
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let invoice = Invoices::new(&mut conn)
        .update(id, amt, paid)
        .await?
        .ok_or(Error::NotFound { resource: "Invoice" })?;

    Ok(Json(InvoiceEnvelope { invoice: invoice.into() }))
}

/// DELETE /invoices/{id} - delete an invoice
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<StatusResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let deleted = Invoices::new(&mut conn).delete(id).await?;

    if deleted == 0 {
        return Err(Error::NotFound { resource: "Invoice" });
    }

    Ok(Json(StatusResponse::deleted()))
}

/// GET /invoices/companies/{code} - fetch a company plus its invoices.
///
/// Two independent queries with no transaction between them.
#[tracing::instrument(skip_all, fields(code = %code))]
pub async fn company_invoices(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyEnvelope<CompanyInvoicesResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let company = Companies::new(&mut conn)
        .get(&code)
        .await?
        .ok_or(Error::NotFound { resource: "Company" })?;
    let invoices = Invoices::new(&mut conn).list_for_company(&code).await?;

    Ok(Json(CompanyEnvelope {
        company: CompanyInvoicesResponse::new(company, invoices),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::models::invoices::{InvoiceEnvelope, InvoiceListEnvelope};
    use crate::errors::ErrorEnvelope;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_invoices(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        seed_invoice(&pool, "isle", 100.0).await;
        seed_invoice(&pool, "isle", 200.0).await;

        let response = app.get("/invoices").await;
        response.assert_status_ok();

        let body: InvoiceListEnvelope = response.json();
        assert_eq!(body.invoices.len(), 2);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_invoice(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        let invoice = seed_invoice(&pool, "isle", 100.0).await;

        let response = app.get(&format!("/invoices/{}", invoice.id)).await;
        response.assert_status_ok();

        let body: InvoiceEnvelope = response.json();
        assert_eq!(body.invoice.id, invoice.id);
        assert_eq!(body.invoice.comp_code, "isle");
        assert_eq!(body.invoice.amt, 100.0);
        assert!(!body.invoice.paid);
        assert_eq!(body.invoice.paid_date, None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_unknown_invoice(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.get("/invoices/-1").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Invoice not found");
        assert_eq!(body.error.status, 404);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_invoice_defaults(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;

        let response = app.post("/invoices").json(&json!({"comp_code": "isle", "amt": 800})).await;
        response.assert_status_ok();

        let body: InvoiceEnvelope = response.json();
        assert_eq!(body.invoice.comp_code, "isle");
        assert_eq!(body.invoice.amt, 800.0);
        assert!(!body.invoice.paid);
        assert_eq!(body.invoice.paid_date, None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_invoice_missing_fields(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.post("/invoices").json(&json!({"amt": 800})).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Require comp_code, and amt");
        assert_eq!(body.error.status, 404);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_invoice_unknown_company(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.post("/invoices").json(&json!({"comp_code": "ghost", "amt": 800})).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Invalid Company Code");
        assert_eq!(body.error.status, 500);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_invoice_toggles_paid_date(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        let invoice = seed_invoice(&pool, "isle", 300.0).await;

        // Mark paid: paid_date is stamped
        let response = app
            .put(&format!("/invoices/{}", invoice.id))
            .json(&json!({"amt": 500, "paid": true}))
            .await;
        response.assert_status_ok();

        let body: InvoiceEnvelope = response.json();
        assert_eq!(body.invoice.amt, 500.0);
        assert!(body.invoice.paid);
        assert!(body.invoice.paid_date.is_some());

        // Mark unpaid again: paid_date is cleared
        let response = app
            .put(&format!("/invoices/{}", invoice.id))
            .json(&json!({"amt": 500, "paid": false}))
            .await;
        response.assert_status_ok();

        let body: InvoiceEnvelope = response.json();
        assert!(!body.invoice.paid);
        assert_eq!(body.invoice.paid_date, None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_invoice_missing_fields(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        let invoice = seed_invoice(&pool, "isle", 300.0).await;

        let response = app.put(&format!("/invoices/{}", invoice.id)).json(&json!({})).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Require amt and paid");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_unknown_invoice(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.put("/invoices/-1").json(&json!({"amt": 500, "paid": true})).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Invoice not found");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_invoice(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        let invoice = seed_invoice(&pool, "isle", 100.0).await;

        let response = app.delete(&format!("/invoices/{}", invoice.id)).await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "deleted");

        app.get(&format!("/invoices/{}", invoice.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_unknown_invoice(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.delete("/invoices/-1").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Invoice not found");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_company_invoices(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        seed_company(&pool, "far", "Far Far Away Inc", "Vacation getaway resorts").await;
        seed_invoice(&pool, "far", 200.0).await;
        seed_invoice(&pool, "far", 300.0).await;

        let response = app.get("/invoices/companies/far").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["company"]["code"], "far");
        assert_eq!(body["company"]["invoices"].as_array().map(Vec::len), Some(2));

        // A company without invoices reports an empty list
        let response = app.get("/invoices/companies/isle").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["company"]["invoices"].as_array().map(Vec::len), Some(0));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_company_invoices_unknown_company(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.get("/invoices/companies/fake").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Company not found");
    }
}
