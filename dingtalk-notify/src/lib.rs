//! Command-line surface for the DingTalk robot client.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dingtalk_webhook::{
    ActionCardButton, ButtonOrientation, Client, ClientConfig, FeedCardLink, MessageDocument,
    OpenMode, SendResult, DEFAULT_TIMEOUT_SECS,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dingtalk-notify", version)]
#[command(about = "Send a message to a DingTalk group robot")]
pub struct Args {
    /// Robot webhook URL (including access_token)
    #[arg(long, env = "DINGTALK_WEBHOOK")]
    pub webhook: String,

    /// Signing secret (starts with SEC); omit if the robot is unsigned
    #[arg(long, env = "DINGTALK_SECRET", default_value = "", hide_env_values = true)]
    pub secret: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plain text message
    Text {
        content: String,
        /// Mobile number to mention (repeatable)
        #[arg(long = "at-mobile")]
        at_mobiles: Vec<String>,
        /// Mention everyone in the group
        #[arg(long)]
        at_all: bool,
    },
    /// Markdown message
    Markdown {
        #[arg(long)]
        title: String,
        text: String,
        #[arg(long = "at-mobile")]
        at_mobiles: Vec<String>,
        #[arg(long)]
        at_all: bool,
    },
    /// Hyperlink card
    Link {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        message_url: String,
        #[arg(long, default_value = "")]
        pic_url: String,
    },
    /// Action card with buttons: "label|url" or "label|url|browser"
    ActionCard {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// Lay buttons out horizontally
        #[arg(long)]
        horizontal: bool,
        #[arg(long = "button", value_parser = parse_button, required = true)]
        buttons: Vec<ActionCardButton>,
    },
    /// Feed card with links: "title|url|pic" or "title|url|pic|browser"
    FeedCard {
        #[arg(long = "link", value_parser = parse_feed_link, required = true)]
        links: Vec<FeedCardLink>,
    },
}

impl Args {
    /// Client configuration from the global flags.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.webhook, &self.secret).with_timeout_secs(self.timeout)
    }
}

impl Command {
    /// Builds the message this subcommand describes.
    pub fn to_document(&self) -> MessageDocument {
        match self {
            Self::Text {
                content,
                at_mobiles,
                at_all,
            } => MessageDocument::text(content, at_mobiles.clone(), *at_all),
            Self::Markdown {
                title,
                text,
                at_mobiles,
                at_all,
            } => MessageDocument::markdown(title, text, at_mobiles.clone(), *at_all),
            Self::Link {
                title,
                text,
                message_url,
                pic_url,
            } => MessageDocument::link(title, text, message_url, pic_url),
            Self::ActionCard {
                title,
                text,
                horizontal,
                buttons,
            } => {
                let orientation = if *horizontal {
                    ButtonOrientation::Horizontal
                } else {
                    ButtonOrientation::Vertical
                };
                MessageDocument::action_card(title, text, orientation, buttons)
            }
            Self::FeedCard { links } => MessageDocument::feed_card(links),
        }
    }
}

fn parse_open_mode(mode: Option<&str>) -> Result<OpenMode, String> {
    match mode {
        None | Some("app") => Ok(OpenMode::InApp),
        Some("browser") => Ok(OpenMode::Browser),
        Some(other) => Err(format!("unknown open mode '{other}' (expected app or browser)")),
    }
}

/// Parses `label|url[|app|browser]`.
pub fn parse_button(raw: &str) -> Result<ActionCardButton, String> {
    let parts: Vec<&str> = raw.split('|').collect();
    match parts.as_slice() {
        [title, url] | [title, url, _] if !title.is_empty() && !url.is_empty() => {
            let mode = parse_open_mode(parts.get(2).copied())?;
            Ok(ActionCardButton::new(*title, *url).with_open_mode(mode))
        }
        _ => Err(format!("expected 'label|url[|browser]', got '{raw}'")),
    }
}

/// Parses `title|url|pic[|app|browser]`.
pub fn parse_feed_link(raw: &str) -> Result<FeedCardLink, String> {
    let parts: Vec<&str> = raw.split('|').collect();
    match parts.as_slice() {
        [title, url, pic] | [title, url, pic, _] if !title.is_empty() && !url.is_empty() => {
            let mode = parse_open_mode(parts.get(3).copied())?;
            Ok(FeedCardLink::new(*title, *url, *pic).with_open_mode(mode))
        }
        _ => Err(format!("expected 'title|url|pic[|browser]', got '{raw}'")),
    }
}

/// Sends the message described by `args`.
///
/// A non-zero `errcode` is reported as an error so the process exits with
/// a failure status.
pub async fn run(args: &Args) -> Result<SendResult> {
    let client = Client::from_config(args.client_config()).context("invalid robot configuration")?;
    let document = args.command.to_document();

    info!(msgtype = document.msg_type(), signed = client.is_signed(), "Sending message");
    let result = client
        .send(&document)
        .await
        .context("failed to send message")?;

    if !result.is_success() {
        bail!(
            "robot rejected message: errcode={} errmsg={}",
            result.code(),
            result.message()
        );
    }
    Ok(result)
}
