//! 测试公共工具：内存版用户存储和路由构造

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use user_crud_api::{
    app::user::{model::User, repository::UserRepository, service::UserService},
    config::HttpConfig,
    create_router, AppState,
};

/// 内存中的 users 表，id 自增
#[derive(Default)]
pub struct MemoryUserRepository {
    rows: Mutex<BTreeMap<i64, User>>,
    next_id: Mutex<i64>,
    failing: bool,
}

impl MemoryUserRepository {
    /// 所有操作都返回连接池超时错误
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<User> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<i64, sqlx::Error> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;
        self.rows.lock().unwrap().insert(
            id,
            User {
                id,
                ..user.clone()
            },
        );
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<User>, sqlx::Error> {
        self.check()?;
        Ok(self.rows())
    }

    async fn update_by_id(&self, id: i64, user: &User) -> Result<u64, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = User {
                    id,
                    ..user.clone()
                };
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

pub fn app_with(repository: Arc<dyn UserRepository>) -> Router {
    let state = AppState {
        user_service: UserService::new(repository),
    };
    create_router(state, &HttpConfig::default())
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 请求体不带 Content-Type，或带任意指定的 Content-Type
pub fn body_request(method: &str, uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// 发送请求，返回状态码和 JSON 响应体（空响应体为 Null）
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
