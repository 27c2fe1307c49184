use crate::datastructures::{
    config::ShiftConfig,
    error::OrderError,
    order::ShiftOrder,
    shift_type::ShiftType,
};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;

// SideShift reports amounts as decimal strings; older responses used plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn value(&self) -> Result<f64, OrderError> {
        match self {
            RawAmount::Number(n) if n.is_finite() => Ok(*n),
            RawAmount::Number(n) => Err(OrderError::InvalidAmount(n.to_string())),
            // f64::from_str also takes "NaN", "inf" and out-of-range exponents.
            RawAmount::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| OrderError::InvalidAmount(s.clone())),
        }
    }
}

#[derive(Deserialize)]
struct RawAddress {
    address: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrder {
    order_id: String,
    quote_id: String,
    deposit_method_id: String,
    settle_method_id: String,
    deposit_amount: RawAmount,
    deposit_address: RawAddress,
    settle_amount: RawAmount,
    settle_address: RawAddress,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Decodes a SideShift create-order response body.
///
/// The Monero leg is the deposit; the settle leg becomes the "btc" side of the
/// order. Responses for any other pair than the configured one are rejected.
pub fn parse_order(body: &str, config: &ShiftConfig) -> Result<ShiftOrder, OrderError> {
    let raw: RawOrder = serde_json::from_str(body)?;

    if !config.accepts_deposit(&raw.deposit_method_id) {
        warn!(
            "sideshift order {} has deposit method {}",
            raw.order_id, raw.deposit_method_id
        );
        return Err(OrderError::UnexpectedMethod {
            side: "deposit",
            expected: config.deposit_method.clone(),
            found: raw.deposit_method_id,
        });
    }
    if !config.accepts_settle(&raw.settle_method_id) {
        warn!(
            "sideshift order {} has settle method {}",
            raw.order_id, raw.settle_method_id
        );
        return Err(OrderError::UnexpectedMethod {
            side: "settle",
            expected: config.settle_method.clone(),
            found: raw.settle_method_id,
        });
    }

    let order = ShiftOrder::builder()
        .shift_type(ShiftType::SideShift)
        .btc_currency(raw.settle_method_id.to_uppercase())
        .btc_amount(raw.settle_amount.value()?)
        .btc_address(raw.settle_address.address)
        .xmr_amount(raw.deposit_amount.value()?)
        .xmr_address(raw.deposit_address.address)
        .quote_id(raw.quote_id)
        .order_id(raw.order_id)
        .created_at(raw.created_at)
        .expires_at(raw.expires_at)
        .build()?;

    debug!("decoded sideshift order {:?}", order);
    Ok(order)
}
