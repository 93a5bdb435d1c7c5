use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Required request fields were absent
    #[error("{message}")]
    MissingFields { message: String },

    /// Requested resource not found
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// No route matched the request
    #[error("Not Found")]
    RouteNotFound,

    /// An invoice referenced a company code that does not exist
    #[error("Invalid Company Code")]
    InvalidCompanyCode,

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Missing-field validation reports 404, not 400; the API contract
            // fixes both the status and the message text
            Error::MissingFields { .. } => StatusCode::NOT_FOUND,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::InvalidCompanyCode => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::UniqueViolation { message, .. }
                | DbError::ForeignKeyViolation { message, .. }
                | DbError::CheckViolation { message, .. } => message.clone(),
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// The uniform JSON error envelope returned on every failure path
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) | Error::InvalidCompanyCode => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::MissingFields { .. } | Error::NotFound { .. } | Error::RouteNotFound => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = ErrorEnvelope {
            error: ErrorBody {
                message: self.user_message(),
                status: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
