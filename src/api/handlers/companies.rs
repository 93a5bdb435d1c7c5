use crate::AppState;
use crate::api::models::StatusResponse;
use crate::api::models::companies::{
    CompanyCreate, CompanyDetailResponse, CompanyEnvelope, CompanyListEnvelope, CompanyPatch, CompanyReplace,
    CompanyResponse, slugify,
};
use crate::db::handlers::Companies;
use crate::db::models::companies::CompanyCreateDBRequest;
use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::{Path, State},
};

/// GET /companies - list all companies
#[tracing::instrument(skip_all)]
pub async fn list_companies(State(state): State<AppState>) -> Result<Json<CompanyListEnvelope>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let companies = Companies::new(&mut conn).list().await?;

    Ok(Json(CompanyListEnvelope {
        companies: companies.into_iter().map(Into::into).collect(),
    }))
}

/// GET /companies/{code} - fetch one company with its industry names
#[tracing::instrument(skip_all, fields(code = %code))]
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyEnvelope<CompanyDetailResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let company = Companies::new(&mut conn)
        .get_with_industries(&code)
        .await?
        .ok_or(Error::NotFound { resource: "Company" })?;

    Ok(Json(CompanyEnvelope { company: company.into() }))
}

/// POST /companies - insert a company, deriving its code from the name
#[tracing::instrument(skip_all)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(data): Json<CompanyCreate>,
) -> Result<Json<CompanyEnvelope<CompanyResponse>>> {
    let (name, description) = match (data.name, data.description) {
        (Some(name), Some(description)) => (name, description),
        _ => {
            return Err(Error::MissingFields {
                message: "Require name, and description".to_string(),
            });
        }
    };

    let request = CompanyCreateDBRequest {
        code: slugify(&name),
        name,
        description: Some(description),
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let company = Companies::new(&mut conn).create(&request).await?;

    Ok(Json(CompanyEnvelope { company: company.into() }))
}

/// PUT /companies/{code} - full replace of code/name/description
#[tracing::instrument(skip_all, fields(code = %code))]
pub async fn replace_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(data): Json<CompanyReplace>,
) -> Result<Json<CompanyEnvelope<CompanyResponse>>> {
    let (new_code, name, description) = match (data.code, data.name, data.description) {
        (Some(new_code), Some(name), Some(description)) => (new_code, name, description),
        _ => {
            return Err(Error::MissingFields {
                message: "Require code, name, and description".to_string(),
            });
        }
    };

    let request = CompanyCreateDBRequest {
        code: new_code,
        name,
        description: Some(description),
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let company = Companies::new(&mut conn)
        .replace(&code, &request)
        .await?
        .ok_or(Error::NotFound { resource: "Company" })?;

    Ok(Json(CompanyEnvelope { company: company.into() }))
}

/// PATCH /companies/{code} - partial update, applied one field at a time.
///
/// Updates run as independent sequential statements, so a later field wins
/// over an earlier one. A rename retargets the remaining updates at the new
/// code. An empty body matches no row and reports the company as not found.
#[tracing::instrument(skip_all, fields(code = %code))]
pub async fn patch_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(data): Json<CompanyPatch>,
) -> Result<Json<CompanyEnvelope<CompanyResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Companies::new(&mut conn);

    let mut lookup = code;
    let mut company = None;

    if let Some(new_code) = &data.code {
        company = repo.update_code(&lookup, new_code).await?;
        if company.is_some() {
            lookup = new_code.clone();
        }
    }
    if let Some(name) = &data.name {
        company = repo.update_name(&lookup, name).await?;
    }
    if let Some(description) = &data.description {
        company = repo.update_description(&lookup, description).await?;
    }

    let company = company.ok_or(Error::NotFound { resource: "Company" })?;

    Ok(Json(CompanyEnvelope { company: company.into() }))
}

/// DELETE /companies/{code} - delete a company (invoices and associations cascade)
#[tracing::instrument(skip_all, fields(code = %code))]
pub async fn delete_company(State(state): State<AppState>, Path(code): Path<String>) -> Result<Json<StatusResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let deleted = Companies::new(&mut conn).delete(&code).await?;

    match deleted {
        0 => Err(Error::NotFound { resource: "Company" }),
        1 => Ok(Json(StatusResponse::deleted())),
        _ => Ok(Json(StatusResponse {
            status: "Multiple companies deleted".to_string(),
        })),
    }
}
