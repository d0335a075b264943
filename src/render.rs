//! Markup written into the posts container.

use crate::post::Post;

pub const LOADING: &str = "<p>投稿を読み込み中...</p>";
pub const EMPTY: &str = "<p>まだ投稿はありません。</p>";

/// escape text for use inside element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// one list item for a post
pub fn post_item(post: &Post) -> String {
    format!(
        "<li class=\"post-item\">\n    <h3>{}</h3>\n    <p>{}</p>\n    <small>ID: {}</small>\n</li>\n",
        escape(&post.title),
        escape(&post.content),
        escape(&post.id.to_string()),
    )
}

pub fn fetch_failed(message: &str) -> String {
    format!(
        "<p style=\"color: red;\">投稿の読み込みに失敗しました: {}</p>",
        escape(message)
    )
}
