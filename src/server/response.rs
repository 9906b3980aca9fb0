use crate::core::CompareOutcome;
use crate::utils::error::CompareError;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const NO_DIFFERENCES_MESSAGE: &str = "No differences found: the files contain the same lines.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub identical: bool,
    pub output1_url: Option<String>,
    pub output2_url: Option<String>,
    pub unique_to_file1: usize,
    pub unique_to_file2: usize,
    pub message: Option<String>,
}

impl From<CompareOutcome> for CompareResponse {
    fn from(outcome: CompareOutcome) -> Self {
        match outcome {
            CompareOutcome::Identical => Self {
                identical: true,
                output1_url: None,
                output2_url: None,
                unique_to_file1: 0,
                unique_to_file2: 0,
                message: Some(NO_DIFFERENCES_MESSAGE.to_string()),
            },
            CompareOutcome::Differences {
                output_a,
                output_b,
                unique_to_a_count,
                unique_to_b_count,
                ..
            } => Self {
                identical: false,
                output1_url: Some(format!("outputs/{}", output_a)),
                output2_url: Some(format!("outputs/{}", output_b)),
                unique_to_file1: unique_to_a_count,
                unique_to_file2: unique_to_b_count,
                message: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// HTTP 錯誤回應
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn from_multipart(err: MultipartError) -> Self {
        let status = err.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return Self {
                status,
                kind: "payload_too_large",
                message: "The uploaded files exceed the size limit".to_string(),
            };
        }
        CompareError::invalid_input("form", err.body_text()).into()
    }

    pub fn from_multipart_rejection(rejection: MultipartRejection) -> Self {
        CompareError::invalid_input("form", rejection.body_text()).into()
    }
}

impl From<CompareError> for ApiError {
    fn from(err: CompareError) -> Self {
        match &err {
            CompareError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                kind: "invalid_input",
                message: err.to_string(),
            },
            CompareError::InvalidSortMode { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                kind: "invalid_sort_mode",
                message: err.to_string(),
            },
            CompareError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                kind: "not_found",
                message: err.user_friendly_message(),
            },
            _ => {
                tracing::error!(
                    "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    kind: "processing_failure",
                    message: err.user_friendly_message(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
