use crate::domain::Story;
use crate::errors::TedditResult;
use crate::normalizer::{self, NormalizedFeed};
use crate::services::reporter::CommentIndex;
use crate::sources::{FeedClient, QueryParams};

/// Everything one run collected, ready to be rendered.
#[derive(Debug, Clone, Default)]
pub struct FrontPage {
    pub stories: Vec<Story>,
    pub skipped: usize,
    pub comments: CommentIndex,
}

pub struct FrontPageService<C: FeedClient> {
    client: C,
    limit: Option<u32>,
    comment_limit: Option<u32>,
    comments_url: String,
}

impl<C: FeedClient> FrontPageService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            limit: None,
            comment_limit: None,
            comments_url: crate::config::DEFAULT_COMMENTS_URL.to_string(),
        }
    }

    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Fetch up to `limit` top-level comments per story from `<base>/comments/<id>.json`
    pub fn with_comments(mut self, limit: Option<u32>, base_url: &str) -> Self {
        self.comment_limit = limit;
        self.comments_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch and normalize a single listing
    pub fn fetch_feed(&self, url: &str) -> TedditResult<NormalizedFeed> {
        let raw = self.client.fetch(url, &limit_params(self.limit))?;
        let feed = normalizer::parse(&raw)?;

        tracing::debug!(
            url,
            stories = feed.stories.len(),
            skipped = feed.skipped,
            "normalized feed"
        );

        Ok(feed)
    }

    /// Fetch every feed in order and merge them. The first failure aborts
    /// the run and nothing collected so far is returned.
    pub fn collect(&self, urls: &[String]) -> TedditResult<FrontPage> {
        let mut page = FrontPage::default();

        for url in urls {
            let feed = self.fetch_feed(url)?;
            page.stories.extend(feed.stories);
            page.skipped += feed.skipped;
        }

        if let Some(limit) = self.comment_limit {
            page.comments = self.fetch_comments(&page.stories, limit)?;
        }

        tracing::info!(
            feeds = urls.len(),
            stories = page.stories.len(),
            skipped = page.skipped,
            "front page collected"
        );

        Ok(page)
    }

    fn fetch_comments(&self, stories: &[Story], limit: u32) -> TedditResult<CommentIndex> {
        let mut index = CommentIndex::new();

        for id in stories.iter().filter_map(|s| s.id.as_deref()) {
            if index.contains_key(id) {
                continue;
            }

            let url = self.comments_url_for(id);
            let raw = self.client.fetch(&url, &limit_params(Some(limit)))?;
            let mut comments = normalizer::parse_comments(&raw)?;
            comments.truncate(limit as usize);

            index.insert(id.to_string(), comments);
        }

        Ok(index)
    }

    fn comments_url_for(&self, id: &str) -> String {
        format!("{}/comments/{}.json", self.comments_url, id)
    }
}

fn limit_params(limit: Option<u32>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(limit) = limit {
        params.insert("limit".to_string(), limit.to_string());
    }
    params
}
