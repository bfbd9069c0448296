use axum::http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for calls against the booking backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Auth(String),
    #[error("{message}")]
    Request { status: u16, message: String },
    #[error("Сервис недоступен: {0}. Он мог уснуть, попробуйте ещё раз чуть позже.")]
    Network(String),
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn token_missing() -> Self {
        ClientError::Auth("Токен не задан".to_string())
    }

    pub fn token_rejected() -> Self {
        ClientError::Auth("Неавторизован (проверьте ADMIN_TOKEN)".to_string())
    }

    pub fn request(status: u16, body: String) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("Ошибка сервера {status}")
        } else {
            format!("Ошибка {status}: {trimmed}")
        };
        ClientError::Request { status, message }
    }

    pub fn bad_payload(detail: impl std::fmt::Display) -> Self {
        ClientError::Request {
            status: 502,
            message: format!("Неожиданный ответ сервера: {detail}"),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        tracing::warn!("request failed: {err}");
        let status = match &err {
            ClientError::Auth(_) => StatusCode::UNAUTHORIZED,
            ClientError::Request { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ClientError::Network(_) => StatusCode::BAD_GATEWAY,
            ClientError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_keeps_server_text() {
        let err = ClientError::request(409, "слот уже занят".to_string());
        assert_eq!(err.to_string(), "Ошибка 409: слот уже занят");

        let err = ClientError::request(500, "  ".to_string());
        assert_eq!(err.to_string(), "Ошибка сервера 500");
    }

    #[test]
    fn client_errors_map_to_http_statuses() {
        let auth: AppError = ClientError::token_missing().into();
        assert_eq!(auth.status, StatusCode::UNAUTHORIZED);

        let upstream: AppError = ClientError::request(404, "нет такого тура".into()).into();
        assert_eq!(upstream.status, StatusCode::NOT_FOUND);

        let network: AppError = ClientError::Network("connection refused".into()).into();
        assert_eq!(network.status, StatusCode::BAD_GATEWAY);

        let invalid: AppError = ClientError::Validation("пусто".into()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    }
}
