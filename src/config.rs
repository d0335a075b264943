use anyhow::Result;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/posts";

const USER_AGENT: &str = "postboard client";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub user_agent: String,
}

impl Config {
    /// Create a config pointing at a posts collection url
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Config {
            base_url: Url::parse(base_url)?,
            user_agent: USER_AGENT.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
