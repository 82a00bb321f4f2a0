use actix_web::{App, HttpResponse, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use afipdesk::{
  adapters::http::{
    ClientRouteDependencies, InvoiceRouteDependencies, configure_client_routes,
    configure_invoice_routes, configure_tax_id_routes,
  },
  application::client::{
    ArchiveClientUseCase, ClientStatsUseCase, CreateClientUseCase, FindClientByTaxIdUseCase,
    GetClientUseCase, ImportClientUseCase, ListClientsUseCase, ReactivateClientUseCase,
    UpdateClientUseCase,
  },
  application::invoice::{
    CalculateTotalsUseCase, CancelVoucherUseCase, EmitInvoiceUseCase, GetVoucherUseCase,
    IssueNoteUseCase, ListSalesPointsUseCase,
  },
  application::tax_id::ValidateTaxIdUseCase,
  domain::client::{ClientDirectory, ClientStore, TaxAuthorityLookup},
  domain::invoice::InvoiceService,
  infrastructure::{
    config::{Config, StorageBackend, StorageConfig},
    gateways::{
      ApiCredentials, HttpTaxAuthorityLookup, IFacturaClient, SimulatedTaxAuthorityLookup,
    },
    persistence::{InMemoryClientStore, JsonFileClientStore, RedisClientStore},
  },
};

async fn connect_store(storage: &StorageConfig) -> anyhow::Result<Arc<dyn ClientStore>> {
  match storage.backend {
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory client storage; records are lost on restart");
      Ok(Arc::new(InMemoryClientStore::new()))
    }
    StorageBackend::File => {
      tracing::info!("Using JSON file client storage at {}", storage.path);
      Ok(Arc::new(JsonFileClientStore::new(&storage.path)))
    }
    StorageBackend::Redis => {
      let url = storage
        .redis_url
        .as_deref()
        .context("storage.redis_url is required for the redis backend")?;
      tracing::info!("Connecting to Redis: {}", url);

      let client = redis::Client::open(url).context("Invalid Redis URL")?;
      let manager = tokio::time::timeout(
        Duration::from_secs(storage.connect_timeout_seconds),
        client.get_connection_manager(),
      )
      .await
      .map_err(|_| {
        tracing::error!(
          "Redis connection timed out after {} seconds. Is Redis running?",
          storage.connect_timeout_seconds
        );
        anyhow::anyhow!(
          "Redis connection timed out after {} seconds",
          storage.connect_timeout_seconds
        )
      })?
      .with_context(|| format!("Could not connect to Redis at {}", url))?;

      tracing::info!("Redis connection established");
      Ok(Arc::new(RedisClientStore::new(manager, storage.key.clone())))
    }
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "afipdesk=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting afipdesk");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  let store = connect_store(&config.storage).await?;

  let lookup: Arc<dyn TaxAuthorityLookup> = if config.lookup.simulated {
    tracing::warn!("Tax authority lookup is simulated");
    Arc::new(SimulatedTaxAuthorityLookup::default())
  } else {
    Arc::new(HttpTaxAuthorityLookup::new(
      config.lookup.base_url.clone(),
      Duration::from_secs(config.lookup.timeout_seconds),
    )?)
  };

  if config.emission.email.is_empty() || config.emission.password.is_empty() {
    tracing::warn!("Emission credentials are not configured; the gateway will reject requests");
  }
  let gateway = Arc::new(IFacturaClient::new(
    config.emission.base_url.clone(),
    ApiCredentials {
      email: config.emission.email.clone(),
      password: config.emission.password.clone(),
    },
    Duration::from_secs(config.emission.timeout_seconds),
  )?);

  // Services
  let directory = Arc::new(ClientDirectory::new(store, lookup));
  let invoice_service = Arc::new(InvoiceService::new(gateway));

  // Use cases
  let validate_tax_id_use_case = Arc::new(ValidateTaxIdUseCase::new());
  let client_deps = ClientRouteDependencies {
    list_use_case: Arc::new(ListClientsUseCase::new(directory.clone())),
    create_use_case: Arc::new(CreateClientUseCase::new(directory.clone())),
    get_use_case: Arc::new(GetClientUseCase::new(directory.clone())),
    find_by_tax_id_use_case: Arc::new(FindClientByTaxIdUseCase::new(directory.clone())),
    update_use_case: Arc::new(UpdateClientUseCase::new(directory.clone())),
    archive_use_case: Arc::new(ArchiveClientUseCase::new(directory.clone())),
    reactivate_use_case: Arc::new(ReactivateClientUseCase::new(directory.clone())),
    stats_use_case: Arc::new(ClientStatsUseCase::new(directory.clone())),
    import_use_case: Arc::new(ImportClientUseCase::new(directory)),
  };
  let invoice_deps = InvoiceRouteDependencies {
    calculate_totals_use_case: Arc::new(CalculateTotalsUseCase::new()),
    emit_use_case: Arc::new(EmitInvoiceUseCase::new(invoice_service.clone())),
    issue_note_use_case: Arc::new(IssueNoteUseCase::new(invoice_service.clone())),
    get_voucher_use_case: Arc::new(GetVoucherUseCase::new(invoice_service.clone())),
    cancel_voucher_use_case: Arc::new(CancelVoucherUseCase::new(invoice_service.clone())),
    list_sales_points_use_case: Arc::new(ListSalesPointsUseCase::new(invoice_service)),
  };

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let client_deps = client_deps.clone();
    let invoice_deps = invoice_deps.clone();
    let validate_tax_id_use_case = validate_tax_id_use_case.clone();

    App::new()
      .wrap(Logger::default())
      .service(
        web::scope("/api/v1/tax-ids")
          .configure(|cfg| configure_tax_id_routes(cfg, validate_tax_id_use_case)),
      )
      .service(
        web::scope("/api/v1/clients").configure(|cfg| configure_client_routes(cfg, client_deps)),
      )
      .service(
        web::scope("/api/v1/invoices")
          .configure(|cfg| configure_invoice_routes(cfg, invoice_deps)),
      )
      .route("/health", web::get().to(|| async { HttpResponse::Ok().body("OK") }))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  Ok(())
}
