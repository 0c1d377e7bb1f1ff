//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 写操作的响应信封 `{id, message}`
///
/// `id` 为 0、`message` 为空时省略对应字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

impl MessageResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }

    pub fn created(id: i64) -> Self {
        Self::new(id, "User created successfully")
    }

    pub fn updated(id: i64, rows_affected: u64) -> Self {
        Self::new(
            id,
            format!(
                "User updated successfully. Total rows/record affected {}",
                rows_affected
            ),
        )
    }

    pub fn deleted(id: i64, rows_affected: u64) -> Self {
        Self::new(
            id,
            format!(
                "User deleted successfully. Total rows/record affected {}",
                rows_affected
            ),
        )
    }
}
