use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Something went wrong on our end";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether a driver error is a unique-index violation.
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_err))
            if write_err.code == DUPLICATE_KEY_CODE
    )
}

/// Any possible server errors
#[derive(Debug, Error)]
pub(crate) enum ServerError {
    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error(transparent)]
    Bson(#[from] mongodb::bson::ser::Error),

    #[error(transparent)]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::DuplicateUser => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::InvalidId(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                )
            }
            ServerError::Bson(e) => {
                tracing::error!("bson serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                )
            }
            ServerError::PasswordHash(e) => {
                tracing::error!("password hashing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                )
            }
            ServerError::Token(e) => {
                tracing::error!("token error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, Json(json!({ "success": false, "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_client_statuses() {
        assert_eq!(
            ServerError::DuplicateUser.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::NotFound("donation").into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn bad_object_ids_are_a_client_error() {
        let err = mongodb::bson::oid::ObjectId::parse_str("not-a-hex-id").unwrap_err();
        assert_eq!(
            ServerError::from(err).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
