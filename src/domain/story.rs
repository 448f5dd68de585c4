#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    pub category: String,
    pub upvotes: i64,
    pub author: String,
    pub id: Option<String>,
}

impl Story {
    pub fn new(title: String) -> Self {
        Self {
            title,
            category: String::new(),
            upvotes: 0,
            author: String::new(),
            id: None,
        }
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = category;
        self
    }

    pub fn with_upvotes(mut self, upvotes: i64) -> Self {
        self.upvotes = upvotes;
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }
}
