use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::client::ClientError;
use crate::domain::invoice::InvoiceError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// One or more rejected fields (400)
  Validation(Vec<String>),

  /// Unknown resource (404)
  NotFound(String),

  /// Tax ID already registered (409)
  Conflict(String),

  /// Upstream service failed or refused the request (502)
  Gateway(String),

  /// Internal server error (500)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(errors) => write!(f, "Validation error: {}", errors.join("; ")),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Gateway(msg) => write!(f, "Gateway error: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message, details) = match self {
      ApiError::Validation(errors) => (
        "validation_error",
        errors
          .first()
          .cloned()
          .unwrap_or_else(|| "Invalid request".to_string()),
        Some(serde_json::json!(errors)),
      ),
      ApiError::NotFound(msg) => ("not_found", msg.clone(), None),
      ApiError::Conflict(msg) => ("conflict", msg.clone(), None),
      ApiError::Gateway(msg) => {
        tracing::warn!("Upstream failure: {}", msg);
        ("gateway_error", msg.clone(), None)
      }
      ApiError::Internal(msg) => {
        // Storage paths and driver messages stay in the logs
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
          None,
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

impl From<ClientError> for ApiError {
  fn from(error: ClientError) -> Self {
    match error {
      ClientError::NotFound(id) => ApiError::NotFound(format!("Cliente {} no encontrado", id)),
      ClientError::DuplicateTaxId(tax_id) => {
        ApiError::Conflict(format!("Ya existe un cliente con el CUIT {}", tax_id))
      }
      ClientError::Validation(errors) => ApiError::Validation(errors),
      ClientError::Gateway(msg) => ApiError::Gateway(msg),
      ClientError::Storage(msg) => ApiError::Internal(msg),
    }
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(errors) => ApiError::Validation(errors),
      InvoiceError::Gateway(msg) | InvoiceError::Rejected(msg) => ApiError::Gateway(msg),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;
  use uuid::Uuid;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation(vec!["x".to_string()]).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::NotFound("x".to_string()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::Conflict("x".to_string()).status_code(),
      StatusCode::CONFLICT
    );
    assert_eq!(
      ApiError::Gateway("x".to_string()).status_code(),
      StatusCode::BAD_GATEWAY
    );
    assert_eq!(
      ApiError::Internal("x".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_domain_error_conversion() {
    let api_error: ApiError = ClientError::NotFound(Uuid::new_v4()).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = ClientError::DuplicateTaxId("20123456786".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = ClientError::Storage("disk full".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let api_error: ApiError = InvoiceError::Rejected("CAE denegado".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_GATEWAY);
  }

  #[actix_web::test]
  async fn test_validation_body_lists_every_error() {
    let error = ApiError::Validation(vec![
      "El nombre es obligatorio".to_string(),
      "La condición impositiva es obligatoria".to_string(),
    ]);
    let body = to_bytes(error.error_response().into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["message"], "El nombre es obligatorio");
    assert_eq!(json["details"].as_array().unwrap().len(), 2);
  }

  #[actix_web::test]
  async fn test_internal_details_are_hidden() {
    let error = ApiError::Internal("/var/lib/afipdesk/clients.json: EACCES".to_string());
    let body = to_bytes(error.error_response().into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "An internal server error occurred");
  }
}
