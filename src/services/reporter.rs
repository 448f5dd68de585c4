use std::collections::HashMap;

use clap::ValueEnum;
use serde_json::json;

use crate::domain::{effective_score, Comment, Story};

/// Comment threads keyed by story id
pub type CommentIndex = HashMap<String, Vec<Comment>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Keep the feed's own order
    #[default]
    Source,
    /// Highest effective score first; ties keep feed order
    Score,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per story
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Reporter {
    order: SortOrder,
    format: OutputFormat,
    comments: CommentIndex,
}

impl Reporter {
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_comments(mut self, comments: CommentIndex) -> Self {
        self.comments = comments;
        self
    }

    /// Render every story, one line each, followed by its comments if any.
    pub fn render(&self, stories: &[Story]) -> Vec<String> {
        let mut lines = Vec::with_capacity(stories.len());

        for (story, score) in self.ordered(stories) {
            let comments = self.comments_for(story);

            match self.format {
                OutputFormat::Text => {
                    lines.push(format_story(story, score));
                    lines.extend(comments.iter().map(|c| format!("    {}", c.format())));
                }
                OutputFormat::Json => lines.push(json_story(story, score, comments)),
            }
        }

        lines
    }

    fn ordered<'a>(&self, stories: &'a [Story]) -> Vec<(&'a Story, i64)> {
        let mut scored: Vec<(&Story, i64)> = stories
            .iter()
            .map(|story| (story, effective_score(story)))
            .collect();

        if self.order == SortOrder::Score {
            // sort_by is stable, so equal scores stay in feed order
            scored.sort_by(|a, b| b.1.cmp(&a.1));
        }

        scored
    }

    fn comments_for(&self, story: &Story) -> &[Comment] {
        story
            .id
            .as_ref()
            .and_then(|id| self.comments.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Format: "{score} {title} ({category}) by {author}" with the title on one line
pub fn format_story(story: &Story, score: i64) -> String {
    let title = story.title.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{} {} ({}) by {}", score, title, story.category, story.author)
}

fn json_story(story: &Story, score: i64, comments: &[Comment]) -> String {
    let mut value = json!({
        "score": score,
        "title": story.title,
        "category": story.category,
        "author": story.author,
    });

    if !comments.is_empty() {
        value["comments"] = json!(comments);
    }

    value.to_string()
}
