pub mod traits;
pub mod http;
pub mod file;

pub use traits::{FeedClient, QueryParams};
pub use http::HttpFeedClient;
pub use file::FileFeedClient;
