use crate::AppState;
use crate::api::models::industries::{
    AssociationCreate, AssociationEnvelope, IndustryCreate, IndustryEnvelope, IndustryListEnvelope,
};
use crate::db::handlers::Industries;
use crate::db::models::industries::IndustryCreateDBRequest;
use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::{Path, State},
};

/// GET /industries - list all industries with their associated company codes
#[tracing::instrument(skip_all)]
pub async fn list_industries(State(state): State<AppState>) -> Result<Json<IndustryListEnvelope>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let industries = Industries::new(&mut conn).list_with_companies().await?;

    Ok(Json(IndustryListEnvelope {
        industries: industries.into_iter().map(Into::into).collect(),
    }))
}

/// POST /industries - insert an industry
#[tracing::instrument(skip_all)]
pub async fn create_industry(
    State(state): State<AppState>,
    Json(data): Json<IndustryCreate>,
) -> Result<Json<IndustryEnvelope>> {
    let (code, name) = match (data.code, data.name) {
        (Some(code), Some(name)) => (code, name),
        _ => {
            return Err(Error::MissingFields {
                message: "Require code, and name".to_string(),
            });
        }
    };

    let request = IndustryCreateDBRequest { code, name };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let industry = Industries::new(&mut conn).create(&request).await?;

    Ok(Json(IndustryEnvelope { industry: industry.into() }))
}

/// POST /industries/company/{code} - associate an industry with a company
#[tracing::instrument(skip_all, fields(comp_code = %code))]
pub async fn associate_industry(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(data): Json<AssociationCreate>,
) -> Result<Json<AssociationEnvelope>> {
    let industry_code = data.code.ok_or_else(|| Error::MissingFields {
        message: "Require industry code".to_string(),
    })?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let association = Industries::new(&mut conn).associate(&code, &industry_code).await?;

    Ok(Json(AssociationEnvelope {
        association: association.into(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::models::industries::{AssociationEnvelope, IndustryEnvelope, IndustryListEnvelope};
    use crate::errors::ErrorEnvelope;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_industries_with_companies(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        seed_company(&pool, "far", "Far Far Away Inc", "Vacation getaway resorts").await;
        seed_industry(&pool, "tour", "Tourism").await;
        seed_industry(&pool, "serv", "Service").await;
        seed_association(&pool, "isle", "tour").await;
        seed_association(&pool, "far", "tour").await;

        let response = app.get("/industries").await;
        response.assert_status_ok();

        let body: IndustryListEnvelope = response.json();
        assert_eq!(body.industries.len(), 2);

        let tourism = body
            .industries
            .iter()
            .find(|i| i.code == "tour")
            .expect("tourism industry should be listed");
        let mut companies = tourism.companies.clone().expect("tourism should have companies");
        companies.sort();
        assert_eq!(companies, vec!["far".to_string(), "isle".to_string()]);

        // An industry with no associations aggregates to null
        let service = body
            .industries
            .iter()
            .find(|i| i.code == "serv")
            .expect("service industry should be listed");
        assert_eq!(service.companies, None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_industry(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.post("/industries").json(&json!({"code": "tech", "name": "Technology"})).await;
        response.assert_status_ok();

        let body: IndustryEnvelope = response.json();
        assert_eq!(body.industry.code, "tech");
        assert_eq!(body.industry.name, "Technology");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_industry_missing_fields(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.post("/industries").json(&json!({"code": "tech"})).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Require code, and name");
        assert_eq!(body.error.status, 404);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_associate_industry(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;
        seed_industry(&pool, "tour", "Tourism").await;

        let response = app.post("/industries/company/isle").json(&json!({"code": "tour"})).await;
        response.assert_status_ok();

        let body: AssociationEnvelope = response.json();
        assert_eq!(body.association.comp_code, "isle");
        assert_eq!(body.association.industry_code, "tour");

        // The association shows up on the company detail
        let response = app.get("/companies/isle").await;
        let body: serde_json::Value = response.json();
        let industries: Vec<String> =
            serde_json::from_value(body["company"]["industries"].clone()).expect("industries should be an array");
        assert_eq!(industries, vec!["Tourism".to_string()]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_associate_industry_missing_code(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;

        let response = app.post("/industries/company/isle").json(&json!({})).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.message, "Require industry code");
        assert_eq!(body.error.status, 404);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_associate_unknown_industry(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        seed_company(&pool, "isle", "The Island Company", "For all your island needs").await;

        // Foreign key violation surfaces as a 500 with the database message
        let response = app.post("/industries/company/isle").json(&json!({"code": "ghost"})).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorEnvelope = response.json();
        assert_eq!(body.error.status, 500);
    }
}
