//! Product Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// 商品 - 种子数据导入后不再变更 (无更新/删除接口)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Unit price, must be >= 0
    pub price: f64,
    /// Unit label e.g. "kg", "each", "1L"
    pub unit: String,
    #[serde(default = "default_stock")]
    pub stock: i32,
    pub image: Option<String>,
    /// Category e.g. "Produce", "Dairy"
    pub category: Option<String>,
    /// 是否可下单
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

fn default_stock() -> i32 {
    100
}

fn default_true() -> bool {
    true
}

/// Create payload (used by seeding)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub stock: Option<i32>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}
