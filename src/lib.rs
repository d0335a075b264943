pub mod client;
pub mod config;
pub mod notice;
pub mod page;
pub mod post;
pub mod render;
pub mod view;

#[cfg(test)]
mod test_utils;

// -- re-exports
pub use client::{ApiError, Client};
pub use config::Config;
pub use page::Page;
pub use post::{NewPost, Post, PostId, Posts};
pub use view::{Document, View};
