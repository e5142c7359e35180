//! Remote call failures and their HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::infrastructure::dto::rpc::{RpcErrorBody, RpcErrorDetail, RpcErrorKind};

/// Why a remote call could not produce a result
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No service is bound under the requested name
    #[error("Service not bound: {0}")]
    NotBound(String),

    /// The service exists but has no such method
    #[error("Method '{method}' not found on service '{service}'")]
    MethodNotFound { service: String, method: String },

    /// Arguments could not be decoded for the method
    #[error("Bad arguments: {0}")]
    BadArguments(String),

    /// Arguments decoded but were rejected by validation
    #[error("{0}")]
    InvalidInput(String),

    /// The service failed while handling the call
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DispatchError {
    /// Wire-level error kind
    pub fn kind(&self) -> RpcErrorKind {
        match self {
            Self::NotBound(_) => RpcErrorKind::NotBound,
            Self::MethodNotFound { .. } => RpcErrorKind::MethodNotFound,
            Self::BadArguments(_) => RpcErrorKind::BadArguments,
            Self::InvalidInput(_) => RpcErrorKind::InvalidInput,
            Self::Internal(_) => RpcErrorKind::Internal,
        }
    }

    /// HTTP status carrying this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotBound(_) | Self::MethodNotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadArguments(_) => StatusCode::BAD_REQUEST,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let body = RpcErrorBody {
            error: RpcErrorDetail {
                kind: self.kind(),
                message: self.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
