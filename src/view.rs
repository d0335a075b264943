use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::notice::{Notice, Severity};
use crate::post::NewPost;
use crate::render::escape;

/// The page elements the controller writes to
#[async_trait]
pub trait View: Send + Sync {
    /// replace the posts container content
    async fn set_posts_html(&self, html: &str);
    /// append markup to the posts container
    async fn append_posts_html(&self, html: &str);

    /// current values of the new post form
    async fn form_values(&self) -> NewPost;
    async fn reset_form(&self);

    /// set the notice text and severity class, and make it visible
    async fn show_notice(&self, text: &str, severity: Severity);
    async fn hide_notice(&self);
}

#[derive(Debug, Default)]
struct DocumentState {
    posts_html: String,
    form: NewPost,
    notice: Notice,
}

/// In-memory page
#[derive(Debug, Default)]
pub struct Document {
    state: RwLock<DocumentState>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn posts_html(&self) -> String {
        self.state.read().await.posts_html.clone()
    }

    pub async fn notice(&self) -> Notice {
        self.state.read().await.notice.clone()
    }

    pub async fn form(&self) -> NewPost {
        self.state.read().await.form.clone()
    }

    /// type into the form fields
    pub async fn fill_form(&self, title: &str, content: &str) {
        self.state.write().await.form = NewPost::new(title, content);
    }

    /// number of post items in the container
    pub async fn post_count(&self) -> usize {
        self.state
            .read()
            .await
            .posts_html
            .matches("<li class=\"post-item\">")
            .count()
    }

    /// Render the whole page
    pub async fn to_html(&self) -> String {
        let state = self.state.read().await;
        format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>Posts</title>
</head>
<body>
<form id="new-post-form">
<input type="text" id="post-title" value="{title}" required>
<textarea id="post-content" required>{content}</textarea>
<button type="submit">投稿</button>
</form>
<div id="message" class="{notice_class}">{notice_text}</div>
<ul id="posts-container">
{posts}</ul>
</body>
</html>
"#,
            title = escape(&state.form.title),
            content = escape(&state.form.content),
            notice_class = state.notice.class(),
            notice_text = escape(&state.notice.text),
            posts = state.posts_html,
        )
    }
}

#[async_trait]
impl View for Document {
    async fn set_posts_html(&self, html: &str) {
        self.state.write().await.posts_html = html.to_string();
    }

    async fn append_posts_html(&self, html: &str) {
        self.state.write().await.posts_html.push_str(html);
    }

    async fn form_values(&self) -> NewPost {
        self.form().await
    }

    async fn reset_form(&self) {
        self.state.write().await.form = NewPost::default();
    }

    async fn show_notice(&self, text: &str, severity: Severity) {
        let mut state = self.state.write().await;
        state.notice.text = text.to_string();
        state.notice.severity = Some(severity);
        state.notice.hidden = false;
    }

    async fn hide_notice(&self) {
        self.state.write().await.notice.hidden = true;
    }
}
