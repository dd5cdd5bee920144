use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Comment, NewComment};
use crate::repository::CommentRepository;

/// PostgreSQL repository for Comment operations
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn parse_id(id: &str) -> ServiceResult<Uuid> {
        Uuid::parse_str(id)
            .map_err(|_| ServiceError::InvalidInput(format!("malformed comment id '{}'", id)))
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_id(&self, id: &str) -> ServiceResult<Option<Comment>> {
        let id = Self::parse_id(id)?;
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, content, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn find_all_by_post_id(&self, post_id: i64) -> ServiceResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, content, created_at
            FROM comments
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn find_all_by_user_id(&self, user_id: i64) -> ServiceResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, content, created_at
            FROM comments
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn save(&self, new_comment: NewComment) -> ServiceResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, user_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_id, user_id, content, created_at
            "#,
        )
        .bind(new_comment.post_id)
        .bind(new_comment.user_id)
        .bind(new_comment.content)
        .bind(new_comment.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn delete_by_id(&self, id: &str) -> ServiceResult<()> {
        let id = Self::parse_id(id)?;
        // DELETE with no matching row is a successful no-op.
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
