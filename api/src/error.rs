//! Error taxonomy for backend calls.
//!
//! Four families, matching how the views surface them: validation errors
//! (field map rendered inline), authorization errors (401 invalidates the
//! session globally, 403 is message-only), not-found (inline empty state),
//! and generic server/network failures (toast or blocking alert). Nothing
//! here is ever retried automatically.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// 401 — the credential is missing, expired or revoked. The HTTP adapter
    /// has already cleared the stored credential and notified the session
    /// observers by the time this value reaches a caller.
    #[error("no autorizado")]
    Unauthorized,

    /// 403 — authenticated but not allowed. Does not touch the session.
    #[error("prohibido: {0}")]
    Forbidden(String),

    /// 404 on a show/update/delete target.
    #[error("recurso no encontrado")]
    NotFound,

    /// 422 with the Laravel `{message, errors}` body.
    #[error("validación fallida: {message}")]
    Validation {
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    /// Any other non-success status.
    #[error("error del servidor ({status}): {message}")]
    Server { status: u16, message: String },

    /// Transport failure before a status code existed.
    #[error("error de red: {0}")]
    Network(String),

    /// The response arrived but did not match the expected shape.
    #[error("respuesta inválida: {0}")]
    Decode(String),
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Map a non-success status plus its raw body into the taxonomy. The
    /// body is parsed opportunistically; a non-JSON body falls back to a
    /// generic message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .unwrap_or_else(|| "Error inesperado del servidor".to_string());
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound,
            422 => ApiError::Validation {
                message,
                errors: parsed.errors.unwrap_or_default(),
            },
            _ => ApiError::Server { status, message },
        }
    }

    /// Message suitable for a toast or alert: the backend-provided text when
    /// there is one, a generic Spanish fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Tu sesión ha expirado. Vuelve a iniciar sesión.".into(),
            ApiError::Forbidden(msg) => msg.clone(),
            ApiError::NotFound => "No encontrado".into(),
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => "No se pudo conectar con el servidor".into(),
            ApiError::Decode(_) => "Respuesta inesperada del servidor".into(),
        }
    }

    /// Field-level messages for inline rendering next to inputs.
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_parsing() {
        let body = r#"{"message": "Los datos no son válidos",
                       "errors": {"dni": ["El DNI debe tener 8 dígitos"]}}"#;
        let err = ApiError::from_status(422, body);
        match &err {
            ApiError::Validation { message, errors } => {
                assert_eq!(message, "Los datos no son válidos");
                assert_eq!(errors["dni"], vec!["El DNI debe tener 8 dígitos"]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.user_message(), "Los datos no son válidos");
    }

    #[test]
    fn test_status_mapping() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(403, r#"{"message": "Solo administradores"}"#),
            ApiError::Forbidden("Solo administradores".into())
        );
        match ApiError::from_status(500, "not json at all") {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Error inesperado del servidor");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
