//! Slot API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::SlotView;
use crate::db::repository::SlotRepository;
use crate::utils::{AppError, AppResult};

/// GET /slots - 获取所有取货时段
///
/// 附带派生字段 available = max(capacity - booked, 0)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SlotView>>> {
    let repo = SlotRepository::new(state.db.clone());
    let slots = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let views: Vec<SlotView> = slots.into_iter().map(SlotView::from).collect();

    Ok(Json(views))
}
