//! 用户处理器

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};

use super::{model::User, service::UserService};
use crate::core::{error::CoreError, response::MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// 按 JSON 解码请求体，不检查 Content-Type
fn decode_user(body: &Bytes) -> Result<User, CoreError> {
    serde_json::from_slice(body)
        .map_err(|e| CoreError::BadRequest(format!("无法解析请求体: {}", e)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, CoreError> {
    let user = decode_user(&body)?;
    let response = state.user_service.create_user(user).await?;
    Ok(Json(response))
}

/// GET, OPTIONS /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// PUT, OPTIONS /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<MessageResponse>, CoreError> {
    let Path(id) = id?;
    let user = decode_user(&body)?;
    let response = state.user_service.update_user(id, user).await?;
    Ok(Json(response))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, CoreError> {
    let Path(id) = id?;
    let response = state.user_service.delete_user(id).await?;
    Ok(Json(response))
}
