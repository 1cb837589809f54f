// Contract tests for the ledger HTTP endpoints
//
// Each test builds the full route table with default ledger settings
// (INR, 18% GST) and checks response shapes and computed amounts.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::{test, web, App};
use ledgerline::config::LedgerConfig;
use ledgerline::documents::DocumentService;
use ledgerline::payments::PaymentService;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

macro_rules! ledger_app {
    () => {{
        let config = LedgerConfig::default();
        test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(Arc::new(DocumentService::new(config))))
                .app_data(web::Data::new(Arc::new(PaymentService::new(config))))
                .configure(ledgerline::configure_routes),
        )
        .await
    }};
}

fn amount(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        other => Decimal::from_str(&other.to_string()).unwrap(),
    }
}

fn bill_body() -> Value {
    json!({
        "vendorId": "vendor-1",
        "billNumber": "BILL-001",
        "billDate": "2024-06-01",
        "dueDate": "2024-06-30",
        "billLines": [
            { "product": "Steel", "quantity": 2, "unitPrice": "500", "discountPercent": 10, "taxPercent": 18 },
            { "product": "Bolts", "quantity": "1", "unitPrice": 200 }
        ]
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = ledger_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ledger"]["currency"], "INR");
}

#[actix_web::test]
async fn test_line_total_contract() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/line-items/total")
        .set_json(json!({ "quantity": 2, "unitPrice": 500, "discountPercent": 10, "taxPercent": 18 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let breakdown = &body["breakdown"];
    assert_eq!(amount(&breakdown["subtotal"]), dec!(1000));
    assert_eq!(amount(&breakdown["discountAmount"]), dec!(100));
    assert_eq!(amount(&breakdown["taxableAmount"]), dec!(900));
    assert_eq!(amount(&breakdown["taxAmount"]), dec!(162));
    assert_eq!(amount(&breakdown["total"]), dec!(1062));
    assert_eq!(body["formattedTotal"], "₹1,062.00");
}

#[actix_web::test]
async fn test_line_total_coerces_junk_to_zero() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/line-items/total")
        .set_json(json!({ "quantity": "abc", "unitPrice": 100 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(amount(&body["breakdown"]["total"]), Decimal::ZERO);
}

#[actix_web::test]
async fn test_line_total_rejects_amounts_beyond_limits() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/line-items/total")
        .set_json(json!({ "quantity": "1e20", "unitPrice": "1e20" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    let fields = &body["error"]["fields"];
    assert_eq!(fields["quantity"], "Quantity cannot exceed 1000000000");
    assert_eq!(fields["unitPrice"], "Price cannot exceed 1000000000000");
    assert!(fields.get("taxPercent").is_none());
}

#[actix_web::test]
async fn test_bill_preview_contract() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/bills/preview")
        .set_json(bill_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["canSubmit"], true);
    assert_eq!(body["lines"].as_array().unwrap().len(), 2);
    assert_eq!(amount(&body["totals"]["grandTotal"]), dec!(1298));
    assert_eq!(amount(&body["totals"]["gst"]["cgst"]), dec!(99));
    assert_eq!(body["formattedTotal"], "₹1,298.00");
}

#[actix_web::test]
async fn test_bill_preview_applies_edits() {
    let app = ledger_app!();

    let mut body = bill_body();
    body["edits"] = json!([{ "lineIndex": 1, "field": "unitPrice", "value": "100" }]);

    let req = test::TestRequest::post()
        .uri("/api/bills/preview")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(amount(&body["lines"][1]["total"]), dec!(118));
    assert_eq!(amount(&body["totals"]["grandTotal"]), dec!(1180));
}

#[actix_web::test]
async fn test_bill_payload_contract() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/bills/payload")
        .set_json(bill_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["vendorId"], "vendor-1");
    assert_eq!(body["billNumber"], "BILL-001");
    assert_eq!(body["billDate"], "2024-06-01");
    assert_eq!(body["billLines"].as_array().unwrap().len(), 2);
    assert_eq!(body["billLines"][0]["taxPercent"], 18);
    assert_eq!(amount(&body["totalAmount"]), dec!(1298));
}

#[actix_web::test]
async fn test_invoice_payload_rejects_missing_fields() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/invoices/payload")
        .set_json(json!({ "invoiceLines": [{ "quantity": 1, "unitPrice": 10 }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    let fields = &body["error"]["fields"];
    assert_eq!(fields["customerId"], "Customer is required");
    assert!(fields.get("invoiceNumber").is_some());
    assert!(fields.get("invoiceDate").is_some());
    assert!(fields.get("invoiceLine_0_product").is_some());
}

#[actix_web::test]
async fn test_off_slab_tax_is_bad_request() {
    let app = ledger_app!();

    let mut body = bill_body();
    body["billLines"][0]["taxPercent"] = json!(7);

    let req = test::TestRequest::post()
        .uri("/api/bills/preview")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/payments/preview")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_payment_preview_contract() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/payments/preview")
        .set_json(json!({
            "vendorId": "vendor-1",
            "paymentDate": "2024-07-01",
            "paymentMethod": "neft",
            "bankAccount": "HDFC-1",
            "bills": [{
                "billId": "b-1",
                "dueAmount": 11800,
                "finalAmount": 11800,
                "totalBeforeGST": 10000,
                "totalGST": 1800,
                "paymentAmount": 5900
            }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["canSubmit"], true);
    assert_eq!(amount(&body["apportionments"][0]["ratio"]), dec!(0.5));
    assert_eq!(amount(&body["breakdown"]["subtotal"]), dec!(5000));
    assert_eq!(amount(&body["breakdown"]["gst"]), dec!(900));
    assert_eq!(body["formattedFinalAmount"], "₹5,900.00");
}

#[actix_web::test]
async fn test_payment_payload_clamps_and_applies_credit() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/payments/payload")
        .set_json(json!({
            "vendorId": "vendor-1",
            "paymentDate": "2024-07-01",
            "paymentMethod": "neft",
            "bankAccount": "HDFC-1",
            "availableCredit": "250",
            "appliedCredit": 400,
            "bills": [
                { "billId": "b-1", "dueAmount": 1000, "finalAmount": 1000, "totalBeforeGST": 847.46, "totalGST": 152.54, "paymentAmount": "5000" },
                { "billId": "b-2", "dueAmount": 500, "finalAmount": 500, "paymentAmount": 0 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let bill_payments = body["billPayments"].as_array().unwrap();
    assert_eq!(bill_payments.len(), 1);
    assert_eq!(bill_payments[0]["billId"], "b-1");
    assert_eq!(amount(&bill_payments[0]["paidAmount"]), dec!(1000));
    assert_eq!(amount(&body["totalAmount"]), dec!(1000));
    assert_eq!(amount(&body["appliedCredit"]), dec!(250));
    assert_eq!(amount(&body["finalPaymentAmount"]), dec!(750));
}

#[actix_web::test]
async fn test_payment_payload_requires_vendor() {
    let app = ledger_app!();

    let req = test::TestRequest::post()
        .uri("/api/payments/payload")
        .set_json(json!({ "bills": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["fields"]["vendorId"], "Please select a vendor");
    assert_eq!(body["error"]["fields"]["bills"], "Select at least one bill to pay");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = ledger_app!();

    let req = test::TestRequest::get().uri("/api/ledgers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
