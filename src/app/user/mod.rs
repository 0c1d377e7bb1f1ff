//! 用户管理：模型、数据访问、服务、处理器

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
