pub mod front_page;
pub mod reporter;

pub use front_page::{FrontPage, FrontPageService};
pub use reporter::{format_story, CommentIndex, OutputFormat, Reporter, SortOrder};
