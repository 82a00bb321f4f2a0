use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    CreateClientRequest, ImportClientRequest, ListClientsQuery, SuccessResponse,
    UpdateClientRequest,
  },
  errors::ApiError,
};
use crate::application::client::*;
use crate::domain::tax_id;

/// List clients, filtered and paginated
/// GET /api/v1/clients?search=&person_kind=&tax_regime=&active=&page=&page_size=
pub async fn list_clients_handler(
  query: web::Query<ListClientsQuery>,
  use_case: web::Data<Arc<ListClientsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  query.validate()?;

  let command = ListClientsCommand {
    filters: query.filters(),
    page: query.page,
    page_size: query.page_size,
  };

  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Create client
/// POST /api/v1/clients
pub async fn create_client_handler(
  request: web::Json<CreateClientRequest>,
  use_case: web::Data<Arc<CreateClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = CreateClientCommand {
    client: request.into_inner().into(),
  };

  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Created().json(response))
}

/// Get client by id
/// GET /api/v1/clients/:id
pub async fn get_client_handler(
  client_id: web::Path<Uuid>,
  use_case: web::Data<Arc<GetClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case
    .execute(GetClientCommand {
      client_id: *client_id,
    })
    .await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Get client by CUIT, in any formatting
/// GET /api/v1/clients/by-tax-id/:tax_id
pub async fn find_client_by_tax_id_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<FindClientByTaxIdUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requested = path.into_inner();

  match use_case
    .execute(FindClientByTaxIdCommand {
      tax_id: requested.clone(),
    })
    .await?
  {
    Some(response) => Ok(HttpResponse::Ok().json(response)),
    None => Err(ApiError::NotFound(format!(
      "No existe un cliente con el CUIT {}",
      tax_id::format(&requested)
    ))),
  }
}

/// Update client
/// PUT /api/v1/clients/:id
pub async fn update_client_handler(
  client_id: web::Path<Uuid>,
  request: web::Json<UpdateClientRequest>,
  use_case: web::Data<Arc<UpdateClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = UpdateClientCommand {
    client_id: *client_id,
    patch: request.into_inner().into(),
  };

  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Deactivate client (logical delete)
/// DELETE /api/v1/clients/:id
pub async fn archive_client_handler(
  client_id: web::Path<Uuid>,
  use_case: web::Data<Arc<ArchiveClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  use_case
    .execute(ArchiveClientCommand {
      client_id: *client_id,
    })
    .await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Cliente desactivado".to_string(),
  }))
}

/// Reactivate client
/// POST /api/v1/clients/:id/reactivate
pub async fn reactivate_client_handler(
  client_id: web::Path<Uuid>,
  use_case: web::Data<Arc<ReactivateClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case
    .execute(ReactivateClientCommand {
      client_id: *client_id,
    })
    .await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Directory statistics
/// GET /api/v1/clients/stats
pub async fn client_stats_handler(
  use_case: web::Data<Arc<ClientStatsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let stats = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(stats))
}

/// Import client from the tax authority
/// POST /api/v1/clients/import
pub async fn import_client_handler(
  request: web::Json<ImportClientRequest>,
  use_case: web::Data<Arc<ImportClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let requested = request.into_inner().tax_id;

  match use_case
    .execute(ImportClientCommand {
      tax_id: requested.clone(),
    })
    .await?
  {
    Some(response) if response.created => Ok(HttpResponse::Created().json(response)),
    Some(response) => Ok(HttpResponse::Ok().json(response)),
    None => Err(ApiError::NotFound(format!(
      "No se encontraron datos para el CUIT {}",
      tax_id::format(&requested)
    ))),
  }
}
