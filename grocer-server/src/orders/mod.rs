//! 下单流程 (核心业务)
//!
//! 下单必须：校验时段容量、校验商品在售、服务端计算总价、
//! 预留时段容量。任一校验失败则整单拒绝，不产生任何写入。

pub mod money;

use chrono::Utc;
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::{Order, OrderCreate, OrderItem, OrderReceipt, OrderStatus};
use crate::db::repository::{
    OrderRepository, ProductRepository, RepoError, SlotRepository, parse_id,
};
use crate::utils::AppError;

/// Checkout error taxonomy
///
/// | 变体 | HTTP |
/// |------|------|
/// | InvalidIdentifier | 400 |
/// | SlotNotFound | 404 |
/// | SlotFull | 400 |
/// | ProductNotFound | 404 |
/// | Database | 500 |
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Invalid ID format: {0}")]
    InvalidIdentifier(String),

    #[error("Slot not found")]
    SlotNotFound,

    #[error("Selected slot is full")]
    SlotFull,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepoError> for CheckoutError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidId(id) => CheckoutError::InvalidIdentifier(id),
            other => CheckoutError::Database(other.to_string()),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match &err {
            CheckoutError::InvalidIdentifier(_) => AppError::validation(err.to_string()),
            CheckoutError::SlotNotFound => AppError::not_found(err.to_string()),
            CheckoutError::SlotFull => AppError::invalid(err.to_string()),
            CheckoutError::ProductNotFound(_) => AppError::not_found(err.to_string()),
            CheckoutError::Database(msg) => AppError::database(msg.clone()),
        }
    }
}

/// Checkout - 下单操作的领域对象
///
/// 持有三个仓库，按固定顺序执行校验和写入：
///
/// 1. 解析并加载时段，校验剩余容量
/// 2. 逐个加载商品 (要求在售)，快照名称/单位/价格并累计总价
/// 3. 预留容量 (带条件的原子递增，输掉竞态返回 SlotFull)
/// 4. 写入订单；写入失败时释放预留
#[derive(Clone)]
pub struct Checkout {
    slots: SlotRepository,
    products: ProductRepository,
    orders: OrderRepository,
}

impl Checkout {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            slots: SlotRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Place an order, or reject it leaving all state unchanged
    pub async fn place_order(&self, payload: OrderCreate) -> Result<OrderReceipt, CheckoutError> {
        // 1. Validate slot availability
        let slot_id = parse_id("slot", &payload.slot_id)?;
        let slot = self
            .slots
            .find_by_id(&slot_id)
            .await?
            .ok_or(CheckoutError::SlotNotFound)?;
        if slot.available() <= 0 {
            return Err(CheckoutError::SlotFull);
        }

        // 2. Verify products and compute total
        //    快照商品数据，后续商品变更不影响本订单
        let mut items = Vec::with_capacity(payload.items.len());
        let mut total = Decimal::ZERO;
        for item in &payload.items {
            let product_id = parse_id("product", &item.product_id)?;
            let product = self
                .products
                .find_in_stock_by_id(&product_id)
                .await?
                .ok_or_else(|| CheckoutError::ProductNotFound(item.product_id.clone()))?;

            let line_total = money::line_total(product.price, item.qty);
            total += line_total;

            items.push(OrderItem {
                product_id,
                name: product.name,
                unit: product.unit,
                price: product.price,
                qty: item.qty,
                line_total: money::to_f64(line_total),
            });
        }
        let total = money::to_f64(money::round(total));

        // 3. Reserve capacity. A lost race against a concurrent order
        //    surfaces here as SlotFull, before anything is written
        if !self.slots.reserve(&slot_id).await? {
            return Err(CheckoutError::SlotFull);
        }

        // 4. Persist the order; release the reservation if the write fails
        let order = Order {
            id: None,
            customer_name: payload.customer_name,
            phone: payload.phone,
            slot_id: slot_id.clone(),
            items,
            note: payload.note,
            total,
            status: OrderStatus::Confirmed,
            created_at: Utc::now().to_rfc3339(),
        };

        let created = match self.orders.create(order).await {
            Ok(created) => created,
            Err(e) => {
                let _ = self.slots.release(&slot_id).await;
                return Err(CheckoutError::Database(e.to_string()));
            }
        };

        let order_id = created
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default();

        tracing::info!(order_id = %order_id, total, "Order confirmed");

        Ok(OrderReceipt {
            order_id,
            total,
            status: OrderStatus::Confirmed,
        })
    }
}
