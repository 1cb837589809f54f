use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::payments::models::BulkPaymentRequest;
use crate::modules::payments::services::PaymentService;

/// Recompute allocations, apportionment and credit for a bulk payment
/// POST /payments/preview
pub async fn preview_payment(
    service: web::Data<Arc<PaymentService>>,
    request: web::Json<BulkPaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let preview = service.preview(request.into_inner());
    Ok(HttpResponse::Ok().json(preview))
}

/// Validate a bulk payment and return its submission payload
/// POST /payments/payload
pub async fn payment_payload(
    service: web::Data<Arc<PaymentService>>,
    request: web::Json<BulkPaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = service.submit(request.into_inner())?;
    Ok(HttpResponse::Ok().json(payload))
}

/// Configure bulk payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("/preview", web::post().to(preview_payment))
            .route("/payload", web::post().to(payment_payload)),
    );
}
