//! Grocer Server - 生鲜自提商店后端
//!
//! # 架构概述
//!
//! 本模块是 Grocer Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (product / slot / order 三张表)
//! - **下单** (`orders`): 时段容量校验、商品校验、服务端计算总价
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! grocer-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 下单流程 (核心业务)
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use orders::{Checkout, CheckoutError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境: 加载 .env 并初始化日志
///
/// 日志级别取 LOG_LEVEL，RUST_LOG 优先
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), None);
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/________  ________  _____
 / / __/ ___/ __ \/ ___/ _ \/ ___/
/ /_/ / /  / /_/ / /__/  __/ /
\____/_/   \____/\___/\___/_/
    "#
    );
}
