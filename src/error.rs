//! HTTP boundary errors. Every failure leaves as `{"detail": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::admin_actor::AdminError;
use crate::auth::AuthError;
use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Order(e) => match e {
                OrderError::NotFound(_) => StatusCode::NOT_FOUND,
                OrderError::InvalidStatus(_) | OrderError::ValidationError(_) => {
                    StatusCode::BAD_REQUEST
                }
                OrderError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Admin(e) => match e {
                AdminError::NotFound(_) => StatusCode::NOT_FOUND,
                AdminError::UsernameTaken(_) | AdminError::ValidationError(_) => {
                    StatusCode::BAD_REQUEST
                }
                AdminError::HashingError(_) | AdminError::StoreError(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Menu(e) => match e {
                MenuError::NotFound(_) => StatusCode::NOT_FOUND,
                MenuError::ValidationError(_) => StatusCode::BAD_REQUEST,
                MenuError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Auth(e) => match e {
                AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
                e if e.is_token_rejection() => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
