//! Database Module
//!
//! Handles the embedded SurrealDB instance and seeding

pub mod models;
pub mod repository;
pub mod seed;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// 命名空间固定为 "grocer"，数据库名来自配置
const NAMESPACE: &str = "grocer";

/// Database service that owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the RocksDB-backed store at `db_path` and select the database
    pub async fn new(db_path: &str, db_name: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(db_name)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!("Database connection established (SurrealDB RocksDB, db={db_name})");

        Ok(Self { db })
    }
}
