use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{error::OrderError, shift_type::ShiftType};

/// Read-only view of an order created with a shift provider.
///
/// The "btc" side is whatever asset is being bought with Monero; it is not
/// necessarily BTC. See [`CreateOrder::btc_currency`].
pub trait CreateOrder {
    fn tag(&self) -> &str;
    /// Ticker of the asset being bought.
    fn btc_currency(&self) -> &str;
    fn btc_amount(&self) -> f64;
    fn btc_address(&self) -> &str;
    fn quote_id(&self) -> &str;
    fn order_id(&self) -> &str;
    fn xmr_amount(&self) -> f64;
    fn xmr_address(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn expires_at(&self) -> DateTime<Utc>;
    /// Id to poll order status with. Some providers hand out a separate one.
    fn query_order_id(&self) -> &str;
    fn shift_type(&self) -> ShiftType;
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftOrder {
    tag: String,
    btc_currency: String,
    btc_amount: f64,
    btc_address: String,
    quote_id: String,
    order_id: String,
    xmr_amount: f64,
    xmr_address: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    query_order_id: String,
    #[serde(rename = "type")]
    shift_type: ShiftType,
}

impl ShiftOrder {
    pub fn builder() -> ShiftOrderBuilder {
        ShiftOrderBuilder::default()
    }

    /// Copies any [`CreateOrder`] implementation into an owned value.
    pub fn from_order(order: &dyn CreateOrder) -> Self {
        ShiftOrder {
            tag: order.tag().to_string(),
            btc_currency: order.btc_currency().to_string(),
            btc_amount: order.btc_amount(),
            btc_address: order.btc_address().to_string(),
            quote_id: order.quote_id().to_string(),
            order_id: order.order_id().to_string(),
            xmr_amount: order.xmr_amount(),
            xmr_address: order.xmr_address().to_string(),
            created_at: order.created_at(),
            expires_at: order.expires_at(),
            query_order_id: order.query_order_id().to_string(),
            shift_type: order.shift_type(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before the provider drops the order, never negative.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

impl CreateOrder for ShiftOrder {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn btc_currency(&self) -> &str {
        &self.btc_currency
    }

    fn btc_amount(&self) -> f64 {
        self.btc_amount
    }

    fn btc_address(&self) -> &str {
        &self.btc_address
    }

    fn quote_id(&self) -> &str {
        &self.quote_id
    }

    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn xmr_amount(&self) -> f64 {
        self.xmr_amount
    }

    fn xmr_address(&self) -> &str {
        &self.xmr_address
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    fn query_order_id(&self) -> &str {
        &self.query_order_id
    }

    fn shift_type(&self) -> ShiftType {
        self.shift_type
    }
}

#[derive(Default)]
pub struct ShiftOrderBuilder {
    tag: Option<String>,
    btc_currency: Option<String>,
    btc_amount: Option<f64>,
    btc_address: Option<String>,
    quote_id: Option<String>,
    order_id: Option<String>,
    xmr_amount: Option<f64>,
    xmr_address: Option<String>,
    created_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
    query_order_id: Option<String>,
    shift_type: Option<ShiftType>,
}

impl ShiftOrderBuilder {
    /// Defaults to the shift type's tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn btc_currency(mut self, btc_currency: impl Into<String>) -> Self {
        self.btc_currency = Some(btc_currency.into());
        self
    }

    pub fn btc_amount(mut self, btc_amount: f64) -> Self {
        self.btc_amount = Some(btc_amount);
        self
    }

    pub fn btc_address(mut self, btc_address: impl Into<String>) -> Self {
        self.btc_address = Some(btc_address.into());
        self
    }

    pub fn quote_id(mut self, quote_id: impl Into<String>) -> Self {
        self.quote_id = Some(quote_id.into());
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn xmr_amount(mut self, xmr_amount: f64) -> Self {
        self.xmr_amount = Some(xmr_amount);
        self
    }

    pub fn xmr_address(mut self, xmr_address: impl Into<String>) -> Self {
        self.xmr_address = Some(xmr_address.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Defaults to the order id.
    pub fn query_order_id(mut self, query_order_id: impl Into<String>) -> Self {
        self.query_order_id = Some(query_order_id.into());
        self
    }

    pub fn shift_type(mut self, shift_type: ShiftType) -> Self {
        self.shift_type = Some(shift_type);
        self
    }

    pub fn build(self) -> Result<ShiftOrder, OrderError> {
        let shift_type = self.shift_type.ok_or(OrderError::MissingField("type"))?;
        let order_id = self.order_id.ok_or(OrderError::MissingField("orderId"))?;

        Ok(ShiftOrder {
            tag: self.tag.unwrap_or_else(|| shift_type.tag().to_string()),
            btc_currency: self
                .btc_currency
                .ok_or(OrderError::MissingField("btcCurrency"))?,
            btc_amount: self.btc_amount.ok_or(OrderError::MissingField("btcAmount"))?,
            btc_address: self
                .btc_address
                .ok_or(OrderError::MissingField("btcAddress"))?,
            quote_id: self.quote_id.ok_or(OrderError::MissingField("quoteId"))?,
            query_order_id: self.query_order_id.unwrap_or_else(|| order_id.clone()),
            order_id,
            xmr_amount: self.xmr_amount.ok_or(OrderError::MissingField("xmrAmount"))?,
            xmr_address: self
                .xmr_address
                .ok_or(OrderError::MissingField("xmrAddress"))?,
            created_at: self.created_at.ok_or(OrderError::MissingField("createdAt"))?,
            expires_at: self.expires_at.ok_or(OrderError::MissingField("expiresAt"))?,
            shift_type,
        })
    }
}
