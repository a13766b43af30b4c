use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Success and error shapes are never conflated: every failure is a tagged
/// `{"error": ...}` envelope with a meaningful status. Unique-constraint
/// conflicts answer 409; everything else database-side is a logged 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(DbError::UniqueViolation(message)) => {
                (StatusCode::CONFLICT, message)
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_envelope() {
        let response = AppError::NotFound("person 7 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "person 7 not found");
    }

    #[tokio::test]
    async fn unique_violation_maps_to_409() {
        let err = AppError::Database(DbError::UniqueViolation(
            "duplicate key value violates unique constraint \"people_email_key\"".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("people_email_key"));
    }
}
