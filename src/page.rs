use std::sync::Arc;

use tracing::{error, info};

use crate::client::{ApiError, Client};
use crate::notice::{show_message, Severity};
use crate::render;
use crate::view::View;

pub const SUBMITTED_MESSAGE: &str = "投稿が完了しました！";

/// Page controller: loads the post list and handles the new post form
pub struct Page<V: View + ?Sized> {
    client: Client,
    view: Arc<V>,
}

impl<V: View + ?Sized + 'static> Page<V> {
    pub fn new(client: Client, view: Arc<V>) -> Self {
        Page { client, view }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    /// Initial render once the page is ready
    pub async fn load(&self) -> Result<usize, ApiError> {
        self.fetch_and_render_posts().await
    }

    /// Fetch the posts and render them into the container.
    ///
    /// Failures are written into the container as well, so the returned
    /// error is informational. Returns the number of posts rendered.
    pub async fn fetch_and_render_posts(&self) -> Result<usize, ApiError> {
        self.view.set_posts_html(render::LOADING).await;

        let posts = match self.client.list_posts().await {
            Ok(posts) => posts,
            Err(err) => {
                error!("Error fetching posts: {}", err);
                self.view
                    .set_posts_html(&render::fetch_failed(&err.to_string()))
                    .await;
                return Err(err);
            }
        };

        self.view.set_posts_html("").await;
        if posts.is_empty() {
            self.view.set_posts_html(render::EMPTY).await;
            return Ok(0);
        }

        for post in posts.iter() {
            self.view.append_posts_html(&render::post_item(post)).await;
        }
        info!(count = posts.len(), "rendered posts");

        Ok(posts.len())
    }

    /// Submit the form contents as a new post
    pub async fn handle_form_submit(&self) -> Result<(), ApiError> {
        let new_post = self.view.form_values().await;

        match self.client.create_post(&new_post).await {
            Ok(()) => {
                show_message(&self.view, SUBMITTED_MESSAGE, Severity::Success).await;
                self.view.reset_form().await;
                // a failed refresh is rendered inline, the post itself went through
                let _ = self.fetch_and_render_posts().await;
                Ok(())
            }
            Err(err) => {
                error!("Error creating post: {}", err);
                show_message(&self.view, &format!("エラー: {}", err), Severity::Error).await;
                Err(err)
            }
        }
    }
}
