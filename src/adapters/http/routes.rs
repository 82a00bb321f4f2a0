use actix_web::web;
use std::sync::Arc;

use crate::application::client::{
  ArchiveClientUseCase, ClientStatsUseCase, CreateClientUseCase, FindClientByTaxIdUseCase,
  GetClientUseCase, ImportClientUseCase, ListClientsUseCase, ReactivateClientUseCase,
  UpdateClientUseCase,
};
use crate::application::invoice::{
  CalculateTotalsUseCase, CancelVoucherUseCase, EmitInvoiceUseCase, GetVoucherUseCase,
  IssueNoteUseCase, ListSalesPointsUseCase,
};
use crate::application::tax_id::ValidateTaxIdUseCase;

use super::handlers::{clients, invoices, tax_ids};

/// Use cases behind the client directory routes
#[derive(Clone)]
pub struct ClientRouteDependencies {
  pub list_use_case: Arc<ListClientsUseCase>,
  pub create_use_case: Arc<CreateClientUseCase>,
  pub get_use_case: Arc<GetClientUseCase>,
  pub find_by_tax_id_use_case: Arc<FindClientByTaxIdUseCase>,
  pub update_use_case: Arc<UpdateClientUseCase>,
  pub archive_use_case: Arc<ArchiveClientUseCase>,
  pub reactivate_use_case: Arc<ReactivateClientUseCase>,
  pub stats_use_case: Arc<ClientStatsUseCase>,
  pub import_use_case: Arc<ImportClientUseCase>,
}

/// Use cases behind the invoicing routes
#[derive(Clone)]
pub struct InvoiceRouteDependencies {
  pub calculate_totals_use_case: Arc<CalculateTotalsUseCase>,
  pub emit_use_case: Arc<EmitInvoiceUseCase>,
  pub issue_note_use_case: Arc<IssueNoteUseCase>,
  pub get_voucher_use_case: Arc<GetVoucherUseCase>,
  pub cancel_voucher_use_case: Arc<CancelVoucherUseCase>,
  pub list_sales_points_use_case: Arc<ListSalesPointsUseCase>,
}

/// Configure tax ID routes
///
/// # Routes
///
/// - POST /validate - Normalize, format and check a CUIT/CUIL
pub fn configure_tax_id_routes(
  cfg: &mut web::ServiceConfig,
  validate_use_case: Arc<ValidateTaxIdUseCase>,
) {
  cfg
    .app_data(web::Data::new(validate_use_case))
    .route(
      "/validate",
      web::post().to(tax_ids::validate_tax_id_handler),
    );
}

/// Configure client directory routes
///
/// Fixed segments are registered before `/{id}` so they never reach the
/// UUID extractor.
///
/// # Routes
///
/// - GET / - Filtered, paginated listing
/// - POST / - Create a client
/// - GET /stats - Directory statistics
/// - POST /import - Create a client from tax authority data
/// - GET /by-tax-id/{tax_id} - Find by CUIT
/// - GET /{id} - Get a client
/// - PUT /{id} - Partially update a client
/// - DELETE /{id} - Deactivate a client
/// - POST /{id}/reactivate - Reactivate a client
pub fn configure_client_routes(cfg: &mut web::ServiceConfig, deps: ClientRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.list_use_case))
    .app_data(web::Data::new(deps.create_use_case))
    .app_data(web::Data::new(deps.get_use_case))
    .app_data(web::Data::new(deps.find_by_tax_id_use_case))
    .app_data(web::Data::new(deps.update_use_case))
    .app_data(web::Data::new(deps.archive_use_case))
    .app_data(web::Data::new(deps.reactivate_use_case))
    .app_data(web::Data::new(deps.stats_use_case))
    .app_data(web::Data::new(deps.import_use_case))
    .route("", web::get().to(clients::list_clients_handler))
    .route("", web::post().to(clients::create_client_handler))
    .route("/stats", web::get().to(clients::client_stats_handler))
    .route("/import", web::post().to(clients::import_client_handler))
    .route(
      "/by-tax-id/{tax_id}",
      web::get().to(clients::find_client_by_tax_id_handler),
    )
    .route("/{id}", web::get().to(clients::get_client_handler))
    .route("/{id}", web::put().to(clients::update_client_handler))
    .route("/{id}", web::delete().to(clients::archive_client_handler))
    .route(
      "/{id}/reactivate",
      web::post().to(clients::reactivate_client_handler),
    );
}

/// Configure invoicing routes
///
/// # Routes
///
/// - POST /totals - Totals preview for a set of line items
/// - POST /emit - Emit an invoice
/// - POST /credit-notes - Emit a credit note against a voucher
/// - POST /debit-notes - Emit a debit note against a voucher
/// - GET /vouchers/{hash} - Fetch an emitted voucher
/// - POST /vouchers/{hash}/cancel - Cancel a voucher
/// - GET /sales-points - Sales points enabled for the account
pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig, deps: InvoiceRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.calculate_totals_use_case))
    .app_data(web::Data::new(deps.emit_use_case))
    .app_data(web::Data::new(deps.issue_note_use_case))
    .app_data(web::Data::new(deps.get_voucher_use_case))
    .app_data(web::Data::new(deps.cancel_voucher_use_case))
    .app_data(web::Data::new(deps.list_sales_points_use_case))
    .route("/totals", web::post().to(invoices::calculate_totals_handler))
    .route("/emit", web::post().to(invoices::emit_invoice_handler))
    .route(
      "/credit-notes",
      web::post().to(invoices::emit_credit_note_handler),
    )
    .route(
      "/debit-notes",
      web::post().to(invoices::emit_debit_note_handler),
    )
    .route(
      "/vouchers/{hash}",
      web::get().to(invoices::get_voucher_handler),
    )
    .route(
      "/vouchers/{hash}/cancel",
      web::post().to(invoices::cancel_voucher_handler),
    )
    .route(
      "/sales-points",
      web::get().to(invoices::list_sales_points_handler),
    );
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
  };
  use serde_json::{Value, json};
  use std::time::Duration;

  use crate::application::invoice::tests::{StubGateway, emission_request};
  use crate::domain::client::ClientDirectory;
  use crate::domain::invoice::InvoiceService;
  use crate::infrastructure::gateways::SimulatedTaxAuthorityLookup;
  use crate::infrastructure::persistence::InMemoryClientStore;

  fn client_deps() -> ClientRouteDependencies {
    let directory = Arc::new(ClientDirectory::new(
      Arc::new(InMemoryClientStore::new()),
      Arc::new(SimulatedTaxAuthorityLookup::new(Duration::ZERO)),
    ));
    ClientRouteDependencies {
      list_use_case: Arc::new(ListClientsUseCase::new(directory.clone())),
      create_use_case: Arc::new(CreateClientUseCase::new(directory.clone())),
      get_use_case: Arc::new(GetClientUseCase::new(directory.clone())),
      find_by_tax_id_use_case: Arc::new(FindClientByTaxIdUseCase::new(directory.clone())),
      update_use_case: Arc::new(UpdateClientUseCase::new(directory.clone())),
      archive_use_case: Arc::new(ArchiveClientUseCase::new(directory.clone())),
      reactivate_use_case: Arc::new(ReactivateClientUseCase::new(directory.clone())),
      stats_use_case: Arc::new(ClientStatsUseCase::new(directory.clone())),
      import_use_case: Arc::new(ImportClientUseCase::new(directory)),
    }
  }

  fn invoice_deps() -> InvoiceRouteDependencies {
    let service = Arc::new(InvoiceService::new(Arc::new(StubGateway)));
    InvoiceRouteDependencies {
      calculate_totals_use_case: Arc::new(CalculateTotalsUseCase::new()),
      emit_use_case: Arc::new(EmitInvoiceUseCase::new(service.clone())),
      issue_note_use_case: Arc::new(IssueNoteUseCase::new(service.clone())),
      get_voucher_use_case: Arc::new(GetVoucherUseCase::new(service.clone())),
      cancel_voucher_use_case: Arc::new(CancelVoucherUseCase::new(service.clone())),
      list_sales_points_use_case: Arc::new(ListSalesPointsUseCase::new(service)),
    }
  }

  macro_rules! app {
    () => {{
      let clients = client_deps();
      let invoices = invoice_deps();
      test::init_service(
        App::new()
          .service(web::scope("/api/v1/tax-ids").configure(|cfg| {
            configure_tax_id_routes(cfg, Arc::new(ValidateTaxIdUseCase::new()))
          }))
          .service(
            web::scope("/api/v1/clients")
              .configure(move |cfg| configure_client_routes(cfg, clients)),
          )
          .service(
            web::scope("/api/v1/invoices")
              .configure(move |cfg| configure_invoice_routes(cfg, invoices)),
          ),
      )
      .await
    }};
  }

  fn new_client() -> Value {
    json!({
      "tax_id": "20-12345678-6",
      "person_kind": 1,
      "given_name": "Juan",
      "family_name": "Pérez",
      "tax_regime": 3,
      "email": "juan@example.com"
    })
  }

  #[actix_web::test]
  async fn test_validate_tax_id() {
    let app = app!();
    let req = TestRequest::post()
      .uri("/api/v1/tax-ids/validate")
      .set_json(json!({ "tax_id": "20123456786" }))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["valid"], true);
    assert_eq!(body["formatted"], "20-12345678-6");
    assert_eq!(body["document_kind"], 1);
  }

  #[actix_web::test]
  async fn test_client_lifecycle() {
    let app = app!();

    let req = TestRequest::post()
      .uri("/api/v1/clients")
      .set_json(new_client())
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["client"]["id"].as_str().unwrap().to_string();

    let req = TestRequest::post()
      .uri("/api/v1/clients")
      .set_json(new_client())
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = TestRequest::get()
      .uri("/api/v1/clients/by-tax-id/20-12345678-6")
      .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["client"]["id"], id.as_str());

    let req = TestRequest::put()
      .uri(&format!("/api/v1/clients/{}", id))
      .set_json(json!({ "phone": "011-4444-5555" }))
      .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["client"]["phone"], "011-4444-5555");

    let req = TestRequest::delete()
      .uri(&format!("/api/v1/clients/{}", id))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get()
      .uri("/api/v1/clients?active=true")
      .to_request();
    let listing: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listing["total"], 0);

    let req = TestRequest::get().uri("/api/v1/clients/stats").to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["inactive"], 1);

    let req = TestRequest::post()
      .uri(&format!("/api/v1/clients/{}/reactivate", id))
      .to_request();
    let reactivated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reactivated["client"]["active"], true);
  }

  #[actix_web::test]
  async fn test_invalid_client_lists_every_error() {
    let app = app!();
    let mut body = new_client();
    body["given_name"] = json!("");
    body["family_name"] = Value::Null;

    let req = TestRequest::post()
      .uri("/api/v1/clients")
      .set_json(body)
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "validation_error");
    assert_eq!(error["details"].as_array().unwrap().len(), 2);
  }

  #[actix_web::test]
  async fn test_unknown_client_is_404() {
    let app = app!();
    let req = TestRequest::get()
      .uri(&format!("/api/v1/clients/{}", uuid::Uuid::new_v4()))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn test_import_from_lookup() {
    let app = app!();

    let req = TestRequest::post()
      .uri("/api/v1/clients/import")
      .set_json(json!({ "tax_id": "20-23456789-0" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let imported: Value = test::read_body_json(resp).await;
    assert_eq!(imported["client"]["given_name"], "María Elena");
    assert_eq!(imported["client"]["tax_regime"], 4);

    let req = TestRequest::post()
      .uri("/api/v1/clients/import")
      .set_json(json!({ "tax_id": "20-23456789-0" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::post()
      .uri("/api/v1/clients/import")
      .set_json(json!({ "tax_id": "27999999990" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn test_totals_preview() {
    let app = app!();
    let req = TestRequest::post()
      .uri("/api/v1/invoices/totals")
      .set_json(json!({
        "items": [{
          "Descripcion": "Servicio",
          "Cantidad": 2,
          "PrecioUnitario": 100,
          "Concepto": 2,
          "UnidadMedida": 7,
          "AlicuotaIVA": 3
        }]
      }))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["subtotal"], 200.0);
    assert_eq!(body["vat_total"], 42.0);
    assert_eq!(body["grand_total"], 242.0);
    assert_eq!(body["vat_breakdown"][0]["code"], 3);
  }

  #[actix_web::test]
  async fn test_totals_preview_out_of_range() {
    let app = app!();
    let req = TestRequest::post()
      .uri("/api/v1/invoices/totals")
      .set_json(json!({
        "items": [{
          "Descripcion": "Servicio",
          "Cantidad": 1e20,
          "PrecioUnitario": 1e20,
          "Concepto": 2,
          "UnidadMedida": 7,
          "AlicuotaIVA": 3
        }]
      }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Item 1: El importe está fuera de rango");
  }

  #[actix_web::test]
  async fn test_emission_flow() {
    let app = app!();

    let mut invalid = emission_request();
    invalid.items.clear();
    let req = TestRequest::post()
      .uri("/api/v1/invoices/emit")
      .set_json(&invalid)
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
      .uri("/api/v1/invoices/emit")
      .set_json(emission_request())
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let emitted: Value = test::read_body_json(resp).await;
    assert_eq!(emitted["voucher"]["hash"], "f3a9c2");

    let req = TestRequest::post()
      .uri("/api/v1/invoices/credit-notes")
      .set_json(json!({ "related_voucher": "f3a9c2", "request": emission_request() }))
      .to_request();
    let note: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(note["kind"], "credit");
    assert_eq!(note["voucher"]["voucher_kind"], 6);

    let req = TestRequest::post()
      .uri("/api/v1/invoices/vouchers/f3a9c2/cancel")
      .set_json(json!({ "reason": "" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::get()
      .uri("/api/v1/invoices/vouchers/unknown")
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let req = TestRequest::get()
      .uri("/api/v1/invoices/sales-points")
      .to_request();
    let points: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(points["sales_points"][0]["Numero"], 1);
  }
}
