use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub ledger: LedgerSettings,
}

/// Ledger settings the running instance computes with
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSettings {
    pub currency: String,
    pub default_tax_percent: u8,
}

/// GET /health - Liveness check
/// The engine has no external dependencies, so alive means ready
pub async fn health_check(config: web::Data<LedgerConfig>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        ledger: LedgerSettings {
            currency: config.currency.to_string(),
            default_tax_percent: config.default_tax_rate.as_u8(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
