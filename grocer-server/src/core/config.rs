/// 服务器配置 - 进程启动时读取一次
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_URL | data/grocer.db | 数据库存储目录 |
/// | DATABASE_NAME | grocer | 数据库名称 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=/data/grocer PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub port: u16,
    /// 数据库存储目录 (嵌入式 SurrealDB)
    pub database_url: String,
    /// 数据库名称
    pub database_name: String,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "data/grocer.db".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "grocer".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_url: impl Into<String>, port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.port = port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
