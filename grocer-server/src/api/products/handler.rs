//! Product API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::ProductRepository;
use crate::utils::{AppError, AppResult};

/// GET /products - 获取所有在售商品
///
/// 下架商品 (in_stock = false) 不返回
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo
        .find_in_stock()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(products))
}
