use super::Story;

/// Effective score of a story, derived from its title.
///
/// The first matching rule wins:
/// 1. title contains "NSFW" (case-sensitive): upvotes / 10, truncated toward zero
/// 2. title contains "halloween" (case-insensitive): upvotes * 10
/// 3. otherwise: upvotes
pub fn effective_score(story: &Story) -> i64 {
    if story.title.contains("NSFW") {
        story.upvotes / 10
    } else if story.title.to_lowercase().contains("halloween") {
        story.upvotes.saturating_mul(10)
    } else {
        story.upvotes
    }
}
