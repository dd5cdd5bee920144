/// Comment service - delegates every operation to the injected storage
/// adapter. The single rule above storage: a missing creation timestamp
/// defaults to the current time.
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::ServiceResult;
use crate::models::{Comment, NewComment};
use crate::repository::CommentRepository;

#[derive(Clone)]
pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    /// Get a comment by id. Unknown ids yield `None`, not an error.
    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Comment>> {
        self.repository.find_by_id(id).await
    }

    /// Get all comments on a post.
    pub async fn get_all_by_post_id(&self, post_id: i64) -> ServiceResult<Vec<Comment>> {
        self.repository.find_all_by_post_id(post_id).await
    }

    /// Get all comments written by a user.
    pub async fn get_all_by_user_id(&self, user_id: i64) -> ServiceResult<Vec<Comment>> {
        self.repository.find_all_by_user_id(user_id).await
    }

    /// Create a comment. A missing `created_at` defaults to the current
    /// time before the record is persisted.
    pub async fn create(
        &self,
        post_id: i64,
        user_id: i64,
        content: String,
        created_at: Option<DateTime<Utc>>,
    ) -> ServiceResult<Comment> {
        let new_comment = NewComment {
            post_id,
            user_id,
            content,
            created_at: created_at.unwrap_or_else(Utc::now),
        };

        let created = self.repository.save(new_comment).await?;
        tracing::info!(comment_id = %created.id, post_id, user_id, "Comment created");
        Ok(created)
    }

    /// Delete a comment by id. Deleting an absent id is a no-op.
    pub async fn delete_by_id(&self, id: &str) -> ServiceResult<()> {
        tracing::info!(comment_id = %id, "Attempting to delete comment");
        self.repository.delete_by_id(id).await
    }
}
