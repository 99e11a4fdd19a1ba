//! Seed API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Seed 结果响应
#[derive(Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
}

/// POST /seed - 幂等导入演示数据
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    crate::db::seed::seed(&state.db)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(SeedResponse {
        message: "Seed complete",
    }))
}
