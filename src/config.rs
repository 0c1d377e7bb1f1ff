//! 服务配置
//!
//! 配置来源按优先级从低到高：内置默认值 → TOML 配置文件 → 环境变量。

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 依次尝试的配置文件路径
const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL 连接串
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// 获取连接的超时时间（秒）
    pub acquire_timeout_seconds: u64,
    /// 启动时是否执行 CREATE TABLE IF NOT EXISTS
    pub ensure_schema: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)，RUST_LOG 优先
    pub level: String,
    /// 是否输出 ANSI 颜色
    pub ansi: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8084,
            timeout_seconds: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_seconds: 8,
            ensure_schema: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl HttpConfig {
    /// 监听地址，形如 `0.0.0.0:8084`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 用环境变量覆盖配置项
    ///
    /// `POSTGRES_URL` 优先于 `DATABASE_URL`。
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("POSTGRES_URL").or_else(|| lookup("DATABASE_URL")) {
            self.database.url = url;
        }

        if let Some(port) = lookup("HTTP_PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("HTTP_PORT 不是有效端口: {}", port)))?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }

        if self.database.url.is_empty() {
            return Err(ConfigError::Validation(
                "数据库连接串不能为空，请设置 POSTGRES_URL 或 database.url".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation("最大连接数必须大于0".to_string()));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Validation(format!(
                "最小连接数 {} 不能大于最大连接数 {}",
                self.database.min_connections, self.database.max_connections
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件（或默认值）和环境变量加载并验证配置
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = CONFIG_PATHS
        .iter()
        .find(|path| Path::new(path).exists())
        .map(Config::load_from_file)
        .transpose()?
        .unwrap_or_default();

    config.apply_env()?;
    config.validate()?;

    Ok(config)
}
