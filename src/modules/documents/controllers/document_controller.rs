use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::documents::models::{DocumentKind, DocumentRequest};
use crate::modules::documents::services::DocumentService;

/// Recompute a bill
/// POST /bills/preview
pub async fn preview_bill(
    service: web::Data<Arc<DocumentService>>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let preview = service.preview(DocumentKind::Bill, request.into_inner())?;
    Ok(HttpResponse::Ok().json(preview))
}

/// Validate a bill and return its submission payload
/// POST /bills/payload
pub async fn bill_payload(
    service: web::Data<Arc<DocumentService>>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = service.submit(DocumentKind::Bill, request.into_inner())?;
    Ok(HttpResponse::Ok().json(payload))
}

/// Recompute an invoice
/// POST /invoices/preview
pub async fn preview_invoice(
    service: web::Data<Arc<DocumentService>>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let preview = service.preview(DocumentKind::Invoice, request.into_inner())?;
    Ok(HttpResponse::Ok().json(preview))
}

/// Validate an invoice and return its submission payload
/// POST /invoices/payload
pub async fn invoice_payload(
    service: web::Data<Arc<DocumentService>>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = service.submit(DocumentKind::Invoice, request.into_inner())?;
    Ok(HttpResponse::Ok().json(payload))
}

/// Configure bill and invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bills")
            .route("/preview", web::post().to(preview_bill))
            .route("/payload", web::post().to(bill_payload)),
    )
    .service(
        web::scope("/invoices")
            .route("/preview", web::post().to(preview_invoice))
            .route("/payload", web::post().to(invoice_payload)),
    );
}
