use serde_json::{Map, Value};

use crate::domain::{Comment, Story};
use crate::errors::{TedditError, TedditResult};

/// Stories extracted from one listing, in source order, plus the number of
/// items dropped for lacking a title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFeed {
    pub stories: Vec<Story>,
    pub skipped: usize,
}

/// Normalize a listing payload: `{"data": {"children": [{"data": {...}}, ...]}}`
pub fn parse(raw: &str) -> TedditResult<NormalizedFeed> {
    let root: Value = serde_json::from_str(raw)?;
    let children = listing_children(&root)?;

    let mut feed = NormalizedFeed::default();

    for (index, child) in children.iter().enumerate() {
        match child_data(child).and_then(story_from_fields) {
            Some(story) => feed.stories.push(story),
            None => {
                tracing::debug!(index, "skipping listing item without a title");
                feed.skipped += 1;
            }
        }
    }

    Ok(feed)
}

/// Normalize a comment thread payload: `[<story listing>, <comment listing>]`
///
/// Items without a body ("more" placeholders and the like) are dropped.
/// Nested replies are not followed.
pub fn parse_comments(raw: &str) -> TedditResult<Vec<Comment>> {
    let root: Value = serde_json::from_str(raw)?;

    let listing = root
        .as_array()
        .and_then(|listings| listings.get(1))
        .ok_or_else(|| {
            TedditError::Parse("comment thread is not a [story, comments] array".to_string())
        })?;

    let comments = listing_children(listing)?
        .iter()
        .filter_map(child_data)
        .filter_map(|data| {
            let body = non_empty_str(data, "body")?;
            let author = str_or_default(data, "author");
            Some(Comment::new(author, body))
        })
        .collect();

    Ok(comments)
}

fn listing_children(listing: &Value) -> TedditResult<&Vec<Value>> {
    let data = listing
        .get("data")
        .ok_or_else(|| TedditError::Parse("missing \"data\" object".to_string()))?;

    data.get("children")
        .ok_or_else(|| TedditError::Parse("missing \"data.children\" array".to_string()))?
        .as_array()
        .ok_or_else(|| TedditError::Parse("\"data.children\" is not an array".to_string()))
}

fn child_data(child: &Value) -> Option<&Map<String, Value>> {
    child.get("data").and_then(Value::as_object)
}

fn story_from_fields(data: &Map<String, Value>) -> Option<Story> {
    let title = non_empty_str(data, "title")?;

    let story = Story::new(title)
        .with_category(str_or_default(data, "subreddit"))
        .with_upvotes(score(data))
        .with_author(str_or_default(data, "author"))
        .with_id(non_empty_str(data, "id"));

    Some(story)
}

fn non_empty_str(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn str_or_default(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn score(data: &Map<String, Value>) -> i64 {
    match data.get("score") {
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        None => 0,
    }
}
