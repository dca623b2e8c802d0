use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::BotError;

const ORDERS_URL: &str = "https://api.razorpay.com/v1/orders";

/// Body of a Razorpay order creation call. Amounts are in minor units
/// (paise); capture is always automatic for this bot.
#[derive(Debug, Serialize)]
pub struct OrderRequest {
    pub amount: u64,
    pub currency: String,
    pub payment_capture: bool,
}

#[derive(Debug, Deserialize)]
pub struct Order {
    pub id: String,
}

pub fn order_request(amount_minor_units: u64) -> OrderRequest {
    OrderRequest {
        amount: amount_minor_units,
        currency: "INR".to_string(),
        payment_capture: true,
    }
}

/// Hosted checkout page for an order id.
pub fn checkout_link(order_id: &str) -> String {
    format!("https://rzp.io/l/{}", order_id)
}

pub async fn create_order(
    client: &Client,
    key: &str,
    secret: &str,
    request: &OrderRequest,
) -> Result<Order, BotError> {
    let res = client
        .post(ORDERS_URL)
        .basic_auth(key, Some(secret))
        .json(request)
        .send()
        .await
        .map_err(|e| BotError::Gateway(format!("failed to reach Razorpay: {}", e)))?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_else(|_| "Unknown error".into());
        return Err(BotError::Gateway(format!(
            "Razorpay API error {}: {}",
            status, body
        )));
    }

    res.json::<Order>()
        .await
        .map_err(|e| BotError::Gateway(format!("unreadable Razorpay response: {}", e)))
}
