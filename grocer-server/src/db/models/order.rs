//! Order Model
//!
//! 订单创建后不再变更，商品名称/单位/价格在下单时快照，
//! 后续商品数据变化不影响历史订单。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order status (no state machine: orders are created confirmed and stay so)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

/// Snapshotted order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(with = "serde_helpers::record_id")]
    pub product_id: RecordId,
    pub name: String,
    pub unit: String,
    /// Unit price at order time
    pub price: f64,
    pub qty: i32,
    pub line_total: f64,
}

/// Customer order associated with a pickup slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub phone: String,
    #[serde(with = "serde_helpers::record_id")]
    pub slot_id: RecordId,
    pub items: Vec<OrderItem>,
    pub note: Option<String>,
    /// Server-computed total, rounded to 2 decimal places
    pub total: f64,
    pub status: OrderStatus,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

// =============================================================================
// API Request Types
// =============================================================================

/// One requested line in a create-order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    /// Product record id as string, e.g. "product:abc"
    pub product_id: String,
    pub qty: i32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub phone: String,
    /// Slot record id as string, e.g. "slot:xyz"
    pub slot_id: String,
    pub items: Vec<OrderItemInput>,
    pub note: Option<String>,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Confirmation returned to the customer after placing an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub total: f64,
    pub status: OrderStatus,
}
