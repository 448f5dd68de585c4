pub mod story;
pub mod comment;
pub mod score;

pub use story::Story;
pub use comment::Comment;
pub use score::effective_score;
