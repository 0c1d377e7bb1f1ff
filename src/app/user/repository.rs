//! 用户数据访问
//!
//! 每个操作只执行一条 SQL，连接从连接池借出，语句结束后归还。

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::model::User;

const INSERT_USER: &str =
    "INSERT INTO users (name, lastname, age, birthdate) VALUES ($1, $2, $3, $4) RETURNING id::BIGINT";

// 按 id 排序，保证列表顺序稳定
const SELECT_ALL_USERS: &str = "SELECT id::BIGINT AS id, name, lastname, age::BIGINT AS age, birthdate \
     FROM users ORDER BY id";

const UPDATE_USER: &str =
    "UPDATE users SET name = $2, lastname = $3, age = $4, birthdate = $5 WHERE id = $1";

const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

/// 用户存储接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 插入一条用户记录，返回数据库生成的 id
    async fn insert(&self, user: &User) -> Result<i64, sqlx::Error>;

    /// 按 id 升序返回全部用户
    async fn select_all(&self) -> Result<Vec<User>, sqlx::Error>;

    /// 覆盖 id 对应记录的全部字段，返回受影响行数（不存在时为 0）
    async fn update_by_id(&self, id: i64, user: &User) -> Result<u64, sqlx::Error>;

    /// 删除 id 对应记录，返回受影响行数（不存在时为 0）
    async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error>;
}

/// 基于 PostgreSQL 连接池的实现
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: &User) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(INSERT_USER)
            .bind(&user.name)
            .bind(&user.lastname)
            .bind(user.age)
            .bind(&user.birthdate)
            .fetch_one(&self.pool)
            .await?;

        debug!("Inserted a single record {}", id);
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(SELECT_ALL_USERS)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn update_by_id(&self, id: i64, user: &User) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(UPDATE_USER)
            .bind(id)
            .bind(&user.name)
            .bind(&user.lastname)
            .bind(user.age)
            .bind(&user.birthdate)
            .execute(&self.pool)
            .await?;

        debug!("Total rows/record affected {}", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Total rows/record affected {}", result.rows_affected());
        Ok(result.rows_affected())
    }
}
