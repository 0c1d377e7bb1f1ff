//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

/// 仅在 `database.ensure_schema = true` 时执行，不做迁移
const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    lastname TEXT NOT NULL,
    age BIGINT NOT NULL,
    birthdate TEXT NOT NULL
)
"#;

/// 进程级连接池，启动时创建，关闭时释放
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        info!(
            "Connecting to database: {}",
            redact_password(&config.url)
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 创建 users 表（已存在时不做任何事）
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        info!("Ensuring users table exists...");
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// 等待借出的连接归还后关闭连接池
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// 隐藏连接串中的密码，用于日志输出
fn redact_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };

    match credentials.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}
