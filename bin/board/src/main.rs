mod args;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;
use postboard::{Client, Config, Document, Page};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Cli::parse();
    init_tracing(&args.log_level);

    let client = Client::new(Config::new(&args.base_url)?)?;
    tracing::debug!(url = %client.base_url(), "using posts api");
    let page = Page::new(client, Arc::new(Document::new()));
    let doc = Arc::clone(page.view());

    match args.command {
        Command::List => {
            let result = page.load().await;
            print!("{}", doc.posts_html().await);
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Post { title, content } => {
            doc.fill_form(&title, &content).await;
            let result = page.handle_form_submit().await;

            let notice = doc.notice().await;
            eprintln!("[{}] {}", notice.class(), notice.text);
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", doc.posts_html().await);
        }
        Command::Render { output } => {
            // the failure message is part of the page
            let _ = page.load().await;
            let html = doc.to_html().await;
            match output {
                Some(path) => tokio::fs::write(path, html).await?,
                None => print!("{}", html),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
