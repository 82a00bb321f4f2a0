use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{dtos::ValidateTaxIdRequest, errors::ApiError};
use crate::application::tax_id::{ValidateTaxIdCommand, ValidateTaxIdUseCase};

/// Check a CUIT/CUIL
/// POST /api/v1/tax-ids/validate
///
/// An invalid number is still a 200 with `valid: false`.
pub async fn validate_tax_id_handler(
  request: web::Json<ValidateTaxIdRequest>,
  use_case: web::Data<Arc<ValidateTaxIdUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let response = use_case.execute(ValidateTaxIdCommand {
    tax_id: request.into_inner().tax_id,
  });

  Ok(HttpResponse::Ok().json(response))
}
