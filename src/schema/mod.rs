//! GraphQL schema

pub mod comments;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::services::CommentService;

/// Root query object
#[derive(MergedObject, Default)]
pub struct QueryRoot(comments::CommentQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
pub struct MutationRoot(comments::CommentMutation);

/// GraphQL App Schema type
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the comment service injected as context
/// data.
pub fn build_schema(service: CommentService) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(service)
    .finish()
}
