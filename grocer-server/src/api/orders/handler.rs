//! Order API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderReceipt};
use crate::orders::Checkout;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_quantity,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 请求体形状校验，业务校验 (时段/商品) 在 Checkout 里做
fn validate_payload(payload: &OrderCreate) -> Result<(), AppError> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;

    if payload.items.is_empty() {
        return Err(AppError::validation("items must not be empty"));
    }
    for item in &payload.items {
        validate_quantity(item.qty, "qty")?;
    }

    Ok(())
}

/// POST /orders - 下单
///
/// 校验时段容量和商品在售，服务端计算总价，预留时段容量。
/// 任一校验失败整单拒绝，不产生任何写入。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderReceipt>> {
    validate_payload(&payload)?;

    let checkout = Checkout::new(state.db.clone());
    let receipt = checkout.place_order(payload).await?;

    Ok(Json(receipt))
}
