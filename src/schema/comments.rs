//! Comment query and mutation schema

use async_graphql::{Context, Object, Result as GraphQLResult, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::CommentService;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::Comment> for Comment {
    fn from(comment: crate::models::Comment) -> Self {
        Comment {
            id: comment.id.to_string(),
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

#[derive(Default)]
pub struct CommentQuery;

#[Object]
impl CommentQuery {
    /// Look up a single comment by id. Unknown ids resolve to null.
    async fn get_by_id(&self, ctx: &Context<'_>, id: String) -> GraphQLResult<Option<Comment>> {
        let service = ctx
            .data::<CommentService>()
            .map_err(|_| "Comment service not available")?;

        let comment = service
            .get_by_id(&id)
            .await
            .map_err(|e| format!("Failed to get comment: {}", e))?;

        Ok(comment.map(Comment::from))
    }

    /// All comments on a post; empty when the post has none.
    async fn get_all_by_post_id(
        &self,
        ctx: &Context<'_>,
        post_id: i64,
    ) -> GraphQLResult<Vec<Comment>> {
        let service = ctx
            .data::<CommentService>()
            .map_err(|_| "Comment service not available")?;

        let comments = service
            .get_all_by_post_id(post_id)
            .await
            .map_err(|e| format!("Failed to get comments for post: {}", e))?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }

    /// All comments written by a user; empty when the user has none.
    async fn get_all_by_user_id(
        &self,
        ctx: &Context<'_>,
        user_id: i64,
    ) -> GraphQLResult<Vec<Comment>> {
        let service = ctx
            .data::<CommentService>()
            .map_err(|_| "Comment service not available")?;

        let comments = service
            .get_all_by_user_id(user_id)
            .await
            .map_err(|e| format!("Failed to get comments for user: {}", e))?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

#[derive(Default)]
pub struct CommentMutation;

#[Object]
impl CommentMutation {
    /// Create a comment. `createdAt` is optional and defaults to the time
    /// of the request.
    async fn create(
        &self,
        ctx: &Context<'_>,
        post_id: i64,
        user_id: i64,
        content: String,
        created_at: Option<DateTime<Utc>>,
    ) -> GraphQLResult<Comment> {
        let service = ctx
            .data::<CommentService>()
            .map_err(|_| "Comment service not available")?;

        let created = service
            .create(post_id, user_id, content, created_at)
            .await
            .map_err(|e| format!("Failed to create comment: {}", e))?;

        Ok(created.into())
    }

    /// Delete a comment by id. The id argument is echoed back whether or
    /// not a record existed.
    async fn delete_by_id(&self, ctx: &Context<'_>, id: String) -> GraphQLResult<String> {
        let service = ctx
            .data::<CommentService>()
            .map_err(|_| "Comment service not available")?;

        service
            .delete_by_id(&id)
            .await
            .map_err(|e| format!("Failed to delete comment: {}", e))?;

        Ok(id)
    }
}
