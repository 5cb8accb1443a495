//! Client-visible error payloads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::queries::params::{InvalidParameterError, QueryParameter};

/// Wire shape of error responses: a machine-readable code plus a
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "errorDescription")]
    pub error_description: String,
}

/// An error response carrying a status code and structured body.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        error: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                error_description: description.into(),
            },
        }
    }

    pub fn bad_request(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, description)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<InvalidParameterError> for ApiError {
    fn from(err: InvalidParameterError) -> Self {
        let code = match err.parameter {
            QueryParameter::Page => "invalid_page",
            QueryParameter::PageSize => "invalid_page_size",
            QueryParameter::Sort => "invalid_sort",
            QueryParameter::Query => "invalid_query",
            QueryParameter::Search => "invalid_search",
            QueryParameter::Aggregation => "invalid_aggregation",
            // Kinds without a dedicated code fall back to a generic bad request.
            QueryParameter::Condition => "bad_request",
        };
        Self::bad_request(code, err.to_string())
    }
}
