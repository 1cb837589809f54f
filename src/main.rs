use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ledgerline::config::{Config, LogFormat};
use ledgerline::documents::DocumentService;
use ledgerline::payments::PaymentService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("ledgerline={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Ledgerline ledger calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        currency = %config.ledger.currency,
        default_tax = %config.ledger.default_tax_rate,
        "Ledger settings loaded"
    );

    let ledger = config.ledger;
    let documents = Arc::new(DocumentService::new(ledger));
    let payments = Arc::new(PaymentService::new(ledger));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(ledger))
            .app_data(web::Data::new(documents.clone()))
            .app_data(web::Data::new(payments.clone()))
            .configure(ledgerline::configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
