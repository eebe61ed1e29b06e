//! DingTalk robot notifier
//!
//! Usage:
//!   dingtalk-notify --webhook URL [--secret SEC...] text "deploy finished"
//!
//! The webhook and secret can also come from DINGTALK_WEBHOOK and
//! DINGTALK_SECRET.

use anyhow::Result;
use clap::Parser;
use dingtalk_notify::{run, Args};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let result = run(&args).await?;

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("ok (errcode={})", result.code());
    }
    Ok(())
}
