use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Response object decoded from the posts api
pub trait ApiResponse {
    fn from_str(s: &str) -> Result<Self>
    where
        Self: Sized;
}

/// Post identifier. The api owns it, so it may be a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(id) => write!(f, "{}", id),
            PostId::Text(id) => f.write_str(id),
        }
    }
}

/// response type for GET /posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

pub type Posts = Vec<Post>;

/// request body for POST /posts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: &str, content: &str) -> Self {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

/// error body returned when a post is rejected
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// the server message, if it sent a non-empty one
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.is_empty())
    }
}

impl ApiResponse for Post {
    fn from_str(s: &str) -> Result<Self> {
        let post: Post = serde_json::from_str(s)?;
        Ok(post)
    }
}

impl ApiResponse for Posts {
    fn from_str(s: &str) -> Result<Self> {
        let posts: Posts = serde_json::from_str(s)?;
        Ok(posts)
    }
}

impl ApiResponse for ErrorBody {
    fn from_str(s: &str) -> Result<Self> {
        let body: ErrorBody = serde_json::from_str(s)?;
        Ok(body)
    }
}
