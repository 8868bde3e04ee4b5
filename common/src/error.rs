use actix_web::HttpResponse;
use thiserror::Error;

use crate::validation::ValidationResult;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    // === APPLICATION ERRORS ===
    #[error("Validation failed: {0}")]
    Validation(ValidationResult),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    IllegalState(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Returns the validation result carried by a `Validation` error.
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            AppError::Validation(result) => Some(result),
            _ => None,
        }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "error": err_msg })
            } else {
                serde_json::json!({ "error": "Internal server error" })
            }
        };

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Migration(error) => {
                log::error!("Migration error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }

            // === APPLICATION ERRORS ===
            AppError::Validation(result) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "errors": result.errors() }))
            }
            AppError::NotFound(_) => {
                HttpResponse::NotFound().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::IllegalState(_) => {
                HttpResponse::Conflict().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::BadRequest(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Config(error) | AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(error))
            }
        }
    }
}

impl From<crate::validation::ValidationError> for AppError {
    fn from(error: crate::validation::ValidationError) -> Self {
        AppError::Validation(ValidationResult::from(error))
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn illegal_state_displays_bare_message() {
        let err = AppError::IllegalState("Subscription 7 has already expired".to_string());

        assert_eq!(err.to_string(), "Subscription 7 has already expired");
    }

    #[test]
    fn maps_taxonomy_to_http_statuses() {
        let cases = [
            (
                AppError::from(ValidationError::invalid_name()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::IllegalState("x".into()), StatusCode::CONFLICT),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.to_http_response().status(), status, "{err}");
        }
    }

    #[test]
    fn validation_error_keeps_its_codes() {
        let err = AppError::from(ValidationError::invalid_provider());

        let codes = err.validation_result().map(|r| r.codes());
        assert_eq!(codes, Some(vec![102]));
    }
}
