pub mod comments;

pub use comments::CommentService;
