//! PostgREST-shaped error responses.
//!
//! Errors are rendered as `{"code", "message", "details", "hint"}` with
//! the status codes PostgREST uses for the corresponding Postgres errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum StubError {
    #[error("relation \"public.{0}\" does not exist")]
    UnknownTable(String),

    #[error("column \"{column}\" of relation \"{table}\" does not exist")]
    UnknownColumn { table: String, column: String },

    #[error("could not find a relationship between '{table}' and '{relation}'")]
    UnknownRelation { table: String, relation: String },

    #[error("unsupported query parameter {key}={value}")]
    UnsupportedQuery { key: String, value: String },

    #[error("null value in column \"{column}\" of relation \"{table}\" violates not-null constraint")]
    NotNull { table: String, column: String },

    #[error("insert or update on table \"{table}\" violates foreign key constraint on \"{column}\"")]
    ForeignKey { table: String, column: String },

    #[error("invalid input syntax for type {kind}: \"{value}\"")]
    InvalidInput { kind: &'static str, value: String },

    #[error("request body must be a JSON object or an array of objects")]
    InvalidBody,
}

impl StubError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::UnknownTable(_) => (StatusCode::NOT_FOUND, "42P01"),
            Self::UnknownColumn { .. } => (StatusCode::BAD_REQUEST, "PGRST204"),
            Self::UnknownRelation { .. } => (StatusCode::BAD_REQUEST, "PGRST200"),
            Self::UnsupportedQuery { .. } => (StatusCode::BAD_REQUEST, "PGRST100"),
            Self::NotNull { .. } => (StatusCode::BAD_REQUEST, "23502"),
            Self::ForeignKey { .. } => (StatusCode::CONFLICT, "23503"),
            Self::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "22P02"),
            Self::InvalidBody => (StatusCode::BAD_REQUEST, "PGRST102"),
        }
    }

    /// The PostgREST/Postgres error code.
    pub fn code(&self) -> &'static str {
        self.status_and_code().1
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        tracing::debug!(%status, code, error = %self, "request rejected");
        let body = json!({
            "code": code,
            "message": self.to_string(),
            "details": null,
            "hint": null,
        });
        (status, Json(body)).into_response()
    }
}
