use clap::{Parser, Subcommand};
use postboard::config::DEFAULT_BASE_URL;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Posts collection url
    #[arg(long, env = "POSTBOARD_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch the posts and print the rendered list
    List,

    /// Submit a new post, then print the refreshed list
    Post {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Write the whole page as an HTML document
    Render {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
