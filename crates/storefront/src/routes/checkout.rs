//! Checkout hand-off route handlers.
//!
//! The storefront UI posts the cart and the customer's choices; the handlers
//! answer with the order message and the WhatsApp link that opens a chat with
//! the shop, prefilled with that message.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use dukkan_core::{
    CartLine, DeliveryMethod, EncodedOrderMessage, OrderChoices, PaymentMethod,
    compose_order_message, encode_order_message, whatsapp_link,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Recipient, shipping, address, and payment choices.
    pub order_choices: OrderChoices,
    /// Cart lines in display order.
    pub lines: Vec<CartLine>,
    /// Cart subtotal before delivery fees.
    pub total_amount: Decimal,
}

/// Response for `POST /checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Escaped order message.
    pub message: EncodedOrderMessage,
    /// Link that opens WhatsApp with the message prefilled.
    pub whatsapp_url: String,
}

/// Response for `POST /checkout/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Readable, unescaped order message.
    pub message: String,
}

/// A delivery option as shown on the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub id: i32,
    pub key: DeliveryMethod,
    pub title: String,
    pub turnaround: String,
    /// Formatted fee, or a note when the fee is quoted later.
    pub price_note: String,
}

/// A payment option as shown on the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOption {
    pub id: PaymentMethod,
    pub title: String,
}

/// Response for `GET /checkout/options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    pub delivery_methods: Vec<DeliveryOption>,
    pub payment_methods: Vec<PaymentOption>,
}

impl CheckoutOptions {
    fn current() -> Self {
        Self {
            delivery_methods: DeliveryMethod::ALL
                .into_iter()
                .map(|method| DeliveryOption {
                    id: method.id().as_i32(),
                    key: method,
                    title: method.title().to_string(),
                    turnaround: method.turnaround().to_string(),
                    price_note: method.price_note(),
                })
                .collect(),
            payment_methods: PaymentMethod::ALL
                .into_iter()
                .map(|method| PaymentOption {
                    id: method,
                    title: method.title().to_string(),
                })
                .collect(),
        }
    }
}

/// List the delivery and payment methods the checkout form offers.
#[instrument]
pub async fn options() -> Json<CheckoutOptions> {
    Json(CheckoutOptions::current())
}

/// Build the readable order message, for showing the customer before sending.
#[instrument(skip_all)]
pub async fn preview(
    payload: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>> {
    let request = read_request(payload)?;
    let message =
        compose_order_message(&request.order_choices, &request.lines, request.total_amount)?;
    Ok(Json(PreviewResponse { message }))
}

/// Build the escaped order message and the WhatsApp link for it.
#[instrument(skip_all, fields(lines = tracing::field::Empty))]
pub async fn checkout(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>> {
    let request = read_request(payload)?;
    tracing::Span::current().record("lines", request.lines.len());

    let message =
        encode_order_message(&request.order_choices, &request.lines, request.total_amount)?;
    let whatsapp_url = whatsapp_link(state.whatsapp_phone(), &message);

    tracing::info!(
        shipping_method = %request.order_choices.shipping_method.id,
        "Order message encoded"
    );

    Ok(Json(CheckoutResponse {
        message,
        whatsapp_url,
    }))
}

fn read_request(
    payload: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<CheckoutRequest> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if request.order_choices.shipping_method.kind().is_none() {
        tracing::debug!(
            shipping_method = %request.order_choices.shipping_method.id,
            "Unrecognized shipping method, address section omitted"
        );
    }

    Ok(request)
}
