//! Example x402 payment gate with Stacks (sBTC), using Axum.
//!
//! This example demonstrates the 402 challenge/response flow: a request
//! without an `X-PAYMENT` header receives payment requirements, a request
//! carrying a verified payment unlocks the premium endpoint.
//!
//! Run with:
//! ```bash
//! cargo run --example server
//! ```
//!
//! Environment variables:
//! - PAY_TO: Stacks address to receive payments
//! - PRICE: price in sBTC smallest units (default: 10000)
//! - HIRO_API: indexer base URL (default: https://api.hiro.so)
//! - PORT: server port (default: 3000)

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use x402_stacks::{
    create_payment_requirements, decode_payment_header, format_amount, Payment, StacksFacilitator,
    TokenSymbol, STACKS_MAINNET,
};

struct AppState {
    facilitator: StacksFacilitator,
    recipient: String,
    price: String,
}

/// Root endpoint with information.
async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let price = format_amount(state.price.parse().unwrap_or_default(), TokenSymbol::Sbtc);

    Json(json!({
        "name": "x402 Stacks Example",
        "endpoints": {
            "/free": "Free endpoint",
            "/premium": format!("Premium endpoint ({price} sBTC)"),
        },
    }))
}

/// Free endpoint (no payment required).
async fn free_handler() -> impl IntoResponse {
    Json(json!({ "message": "This is free!" }))
}

/// Premium endpoint, gated behind an sBTC payment.
async fn premium_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some(payment_header) = headers.get("x-payment") else {
        // No payment header: challenge with requirements.
        return Ok(payment_required(&state, None).into_response());
    };

    let payment_str = payment_header
        .to_str()
        .map_err(|_| AppError::BadPayment("Invalid payment header encoding".into()))?;
    let claim = decode_payment_header(payment_str)
        .map_err(|e| AppError::BadPayment(e.to_string()))?;

    // Price and recipient come from server config; only the transaction id
    // and token are taken from the claim.
    let payment = Payment {
        tx_id: claim.tx_id,
        network: STACKS_MAINNET.to_string(),
        token: claim.token,
        amount: state.price.clone(),
        recipient: state.recipient.clone(),
    };

    let result = state.facilitator.verify(&payment).await;
    if !result.valid {
        return Ok(payment_required(&state, result.error.as_deref()).into_response());
    }

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Welcome to premium content!",
            "paymentVerified": true,
            "txId": result.tx_id,
            "data": {
                "secret": "The answer is 42",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
        })),
    )
        .into_response())
}

/// Builds the 402 challenge, restating what would satisfy the request.
fn payment_required(state: &AppState, reason: Option<&str>) -> impl IntoResponse {
    let requirements =
        create_payment_requirements(state.recipient.clone(), state.price.as_str(), TokenSymbol::Sbtc);

    let mut body = json!({
        "error": "Payment Required",
        "paymentRequirements": requirements,
    });
    if let Some(reason) = reason {
        body["reason"] = json!(reason);
    }

    (StatusCode::PAYMENT_REQUIRED, Json(body))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let recipient = std::env::var("PAY_TO")
        .unwrap_or_else(|_| "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS".to_string());
    let price = std::env::var("PRICE").unwrap_or_else(|_| "10000".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let facilitator = match std::env::var("HIRO_API") {
        Ok(base_url) => StacksFacilitator::with_base_url(base_url)?,
        Err(_) => StacksFacilitator::new(),
    };

    println!("🚀 Starting x402 Stacks example server");
    println!("   Pay to: {recipient}");
    println!(
        "   Price: {} sBTC",
        format_amount(price.parse().unwrap_or_default(), TokenSymbol::Sbtc)
    );
    println!("   Port: {port}");

    let state = Arc::new(AppState {
        facilitator,
        recipient,
        price,
    });

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/free", get(free_handler))
        .route("/premium", get(premium_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("✅ Server listening on http://{addr}");
    println!("\nTry:");
    println!("  curl http://localhost:{port}/");
    println!("  curl http://localhost:{port}/premium");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}

// Error handling
enum AppError {
    BadPayment(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadPayment(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
