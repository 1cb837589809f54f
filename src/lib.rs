//! Ledgerline line-item ledger calculator
//!
//! Computes line totals, document aggregates and bulk payment apportionment
//! for bills and invoices, and validates them for submission.

pub mod config;
pub mod core;
pub mod modules;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::core::AppError;

// Re-export commonly used types
pub use modules::documents;
pub use modules::line_items;
pub use modules::payments;
pub use modules::taxes;

/// Register every route: `/health` at the root, the engine under `/api`
///
/// Callers supply `web::Data<LedgerConfig>`, `web::Data<Arc<DocumentService>>`
/// and `web::Data<Arc<PaymentService>>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(modules::health::configure)
        .service(
            web::scope("/api")
                .configure(modules::line_items::controllers::configure)
                .configure(modules::documents::controllers::configure)
                .configure(modules::payments::controllers::configure),
        )
        .default_service(web::to(route_not_found));
}

/// JSON extractor settings: malformed bodies answer with the `AppError` shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            let app_error = match err {
                JsonPayloadError::Deserialize(e) => AppError::Json(e),
                other => AppError::validation(other.to_string()),
            };
            app_error.into()
        })
}

async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!("{} {}", req.method(), req.path())))
}
