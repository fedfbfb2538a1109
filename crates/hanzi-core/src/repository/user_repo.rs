//! 用户仓储
//!
//! 提供用户记录的数据访问，注册路径依赖邮箱唯一约束避免并发重复

use sqlx::PgPool;

use crate::error::{CoreError, Result};
use crate::models::User;

/// 用户仓储
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 按邮箱查询用户（认证主路径）
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, registration_date, image_id
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 按 ID 查询用户
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, registration_date, image_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 创建用户
    ///
    /// 邮箱冲突时返回 EmailAlreadyRegistered。通过
    /// ON CONFLICT DO NOTHING 让唯一约束兜底，并发注册也不会产生重复行
    pub async fn create(&self, email: &str, name: &str, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, name, password_hash, registration_date, image_id
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| CoreError::EmailAlreadyRegistered(email.to_string()))
    }

    /// 删除用户，返回是否存在并被删除
    ///
    /// 进度、分数、成就记录随外键级联删除
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
