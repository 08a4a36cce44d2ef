mod args;

use crate::args::Args;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use secrecy::SecretString;
use stars_lib::{export, ExportConfig, OutputFormat};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = ExportConfig {
        username: args.username.clone(),
        token: args
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .map(SecretString::from),
        output: args.output_path().into(),
        format: OutputFormat::from(args.format),
        api_url: args.api_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    };

    let summary = export(&config).await?;

    println!(
        "Saved {} starred repositories to {}",
        summary.count.to_string().yellow(),
        summary.path.display()
    );

    Ok(())
}
