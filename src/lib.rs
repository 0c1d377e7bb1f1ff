//! # user-crud-api
//!
//! 基于 Axum + SQLx 的用户 CRUD 服务：
//! - `app`：用户模型、数据访问、服务与处理器
//! - `core`：统一错误、响应信封、请求日志中间件
//! - `infrastructure`：PostgreSQL 连接池与日志初始化
//! - `config`：TOML 配置文件与环境变量

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::user::handler::AppState;
pub use router::create_router;
