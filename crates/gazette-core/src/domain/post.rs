use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single blog post.
///
/// Posts are immutable once created: no update or delete path exists
/// anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_posts_get_distinct_ids() {
        let a = Post::new("First".into(), "body".into());
        let b = Post::new("First".into(), "body".into());
        assert_ne!(a.id, b.id);
    }
}
