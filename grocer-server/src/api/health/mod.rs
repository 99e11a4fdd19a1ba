//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 存活探针 |
//! | /test | GET | 后端/数据库连通性诊断 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "backend": "✅ Running",
//!   "database": "✅ Connected & Working",
//!   "connection_status": "Connected",
//!   "collections": ["order", "product", "slot"]
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
}

/// 存活探针响应
#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// 数据库诊断响应
#[derive(Serialize)]
pub struct TestResponse {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    connection_status: &'static str,
    /// 前 10 张表
    collections: Vec<String>,
}

/// GET / - 存活探针
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Grocer API running",
    })
}

/// GET /test - 数据库连通性诊断
///
/// 永远返回 200，连接问题在响应体里降级呈现
pub async fn test_database(State(state): State<ServerState>) -> Json<TestResponse> {
    let env_flag = |name: &str| {
        if std::env::var(name).is_ok() {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
    };

    let (database, connection_status, collections) = match list_tables(&state).await {
        Ok(tables) => ("✅ Connected & Working".to_string(), "Connected", tables),
        Err(e) => {
            let msg: String = e.to_string().chars().take(50).collect();
            (format!("⚠️  Connected but Error: {msg}"), "Connected", vec![])
        }
    };

    Json(TestResponse {
        backend: "✅ Running",
        database,
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        connection_status,
        collections,
    })
}

/// 查询数据库中的表名 (最多 10 张)
async fn list_tables(state: &ServerState) -> Result<Vec<String>, surrealdb::Error> {
    // BTreeMap 的 key 自带排序
    #[derive(serde::Deserialize)]
    struct DbInfo {
        #[serde(default)]
        tables: std::collections::BTreeMap<String, serde_json::Value>,
    }

    let mut result = state.db.query("INFO FOR DB").await?;
    let info: Option<DbInfo> = result.take(0)?;

    let mut tables: Vec<String> = info
        .map(|i| i.tables.into_keys().collect())
        .unwrap_or_default();

    tables.truncate(10);
    Ok(tables)
}
