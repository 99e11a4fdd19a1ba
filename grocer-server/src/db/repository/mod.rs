//! Repository Module
//!
//! Provides data access for the three SurrealDB tables behind small
//! per-entity repositories. The slot capacity check-and-increment lives
//! behind this seam (see [`slot::SlotRepository::reserve`]).

// Catalog
pub mod product;

// Pickup slots
pub mod slot;

// Orders
pub mod order;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use slot::SlotRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "product:abc".parse()?;
//   - 获取表名: id.table()
//   - CRUD: db.select(id) / db.create(table).content(...) 直接使用 RecordId
//
// API 传入的 ID 必须带表前缀；格式错误或表名不匹配返回 InvalidId。

/// Parse an id string, requiring the expected table prefix
pub fn parse_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let record_id: RecordId = id
        .parse()
        .map_err(|_| RepoError::InvalidId(id.to_string()))?;
    if record_id.table() != table {
        return Err(RepoError::InvalidId(id.to_string()));
    }
    Ok(record_id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Count the records of a table
    pub async fn count(&self, table: &str) -> RepoResult<usize> {
        #[derive(serde::Deserialize)]
        struct Count {
            count: usize,
        }

        let counts: Vec<Count> = self
            .db
            .query("SELECT count() FROM type::table($table) GROUP ALL")
            .bind(("table", table.to_string()))
            .await?
            .take(0)?;
        Ok(counts.first().map(|c| c.count).unwrap_or(0))
    }
}
