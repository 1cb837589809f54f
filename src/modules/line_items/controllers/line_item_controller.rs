use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::core::coerce::{lenient_decimal, lenient_optional_decimal};
use crate::core::error::AppError;
use crate::core::ValidationErrors;
use crate::modules::line_items::services::{LineBreakdown, LineCalculator};

/// Single line to compute, amounts accepted as numbers or text
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotalRequest {
    #[serde(default = "one", deserialize_with = "lenient_decimal")]
    pub quantity: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub unit_price: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discount_percent: Decimal,

    /// Falls back to the configured default slab when absent
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub tax_percent: Option<Decimal>,
}

fn one() -> Decimal {
    Decimal::ONE
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotalResponse {
    pub breakdown: LineBreakdown,
    pub formatted_total: String,
}

/// Compute one line's amounts
/// POST /line-items/total
///
/// Amounts above the calculator limits answer 422 with the offending fields
pub async fn line_total(
    config: web::Data<LedgerConfig>,
    request: web::Json<LineTotalRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let tax_percent = request
        .tax_percent
        .unwrap_or_else(|| config.default_tax_rate.percent());

    let mut errors = ValidationErrors::new();
    LineCalculator::check_limits(
        request.quantity,
        request.unit_price,
        tax_percent,
        &mut errors,
        |field| field.as_str().to_string(),
    );
    errors.into_result()?;

    let breakdown = LineCalculator::breakdown(
        request.quantity,
        request.unit_price,
        request.discount_percent,
        tax_percent,
    );

    Ok(HttpResponse::Ok().json(LineTotalResponse {
        formatted_total: config.currency.format_amount(breakdown.total),
        breakdown,
    }))
}

/// Configure line item routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/line-items").route("/total", web::post().to(line_total)));
}
