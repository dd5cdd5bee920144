/// Storage access layer
///
/// The `CommentRepository` trait is the storage adapter seam: the service
/// layer receives an implementation by constructor injection. Absent rows
/// surface as `None` or an empty vec, never as errors, and `delete_by_id`
/// is idempotent. Identifier assignment belongs to the storage engine.
pub mod comments;

pub use comments::PgCommentRepository;

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::{Comment, NewComment};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Point lookup by primary key. `None` when no record matches.
    async fn find_by_id(&self, id: &str) -> ServiceResult<Option<Comment>>;

    /// All records whose `post_id` equals the argument. Order is
    /// store-determined.
    async fn find_all_by_post_id(&self, post_id: i64) -> ServiceResult<Vec<Comment>>;

    /// All records whose `user_id` equals the argument.
    async fn find_all_by_user_id(&self, user_id: i64) -> ServiceResult<Vec<Comment>>;

    /// Insert a new record, assigning a fresh identifier. Returns the
    /// persisted record including the assigned id.
    async fn save(&self, new_comment: NewComment) -> ServiceResult<Comment>;

    /// Remove the record with that identifier. Deleting an absent id is a
    /// successful no-op.
    async fn delete_by_id(&self, id: &str) -> ServiceResult<()>;
}
