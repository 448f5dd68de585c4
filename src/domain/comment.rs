use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub author: String,
    pub body: String,
}

impl Comment {
    pub fn new(author: String, body: String) -> Self {
        Self { author, body }
    }

    /// Format: "{author}: {body}" with the body collapsed onto one line
    pub fn format(&self) -> String {
        let body = self.body.split_whitespace().collect::<Vec<_>>().join(" ");
        format!("{}: {}", self.author, body)
    }
}
