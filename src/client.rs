use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Method, RequestBuilder, Response, StatusCode,
};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::post::{ApiResponse, ErrorBody, NewPost, Posts};

/// Shown when a rejected post carries no usable error text
pub const REJECTED_FALLBACK: &str = "投稿に失敗しました。";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(StatusCode),
    #[error("{0}")]
    Rejected(String),
    #[error("failed to decode response: {0}")]
    Decode(#[source] anyhow::Error),
}

/// Posts API Client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

/// Initialization
impl Client {
    /// Create a new Client
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // create default headers
        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&config.user_agent)?,
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Client {
            client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Methods
impl Client {
    /// create request builder
    fn request_builder(&self, method: Method) -> RequestBuilder {
        self.client.request(method, self.base_url.clone())
    }

    /// Fetch the post collection. Any non-2xx status is a failure.
    pub async fn list_posts(&self) -> Result<Posts, ApiError> {
        debug!(url = %self.base_url, "fetching posts");
        let res: Response = self.request_builder(Method::GET).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let text = res.text().await?;
        Posts::from_str(&text).map_err(ApiError::Decode)
    }

    /// Submit a new post. Only `201 Created` counts as success.
    pub async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        debug!(url = %self.base_url, title = %post.title, "creating post");
        // `json` sets the application/json content type
        let res: Response = self.request_builder(Method::POST).json(post).send().await?;

        let status = res.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        debug!(%status, "post rejected");
        let text = res.text().await?;
        let message = ErrorBody::from_str(&text)
            .ok()
            .and_then(|body| body.message().map(str::to_string))
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());

        Err(ApiError::Rejected(message))
    }
}
