//! Message documents for the five robot message types.
//!
//! Each constructor on [`MessageDocument`] maps caller input to the exact
//! wire shape the provider expects:
//!
//! ```text
//! text        { msgtype, text: { content }, at: { atMobiles, isAtAll } }
//! markdown    { msgtype, markdown: { title, text }, at: { atMobiles, isAtAll } }
//! link        { msgtype, link: { text, title, picUrl, messageUrl } }
//! actionCard  { msgtype, actionCard: { title, text, btnOrientation, btns: [{ title, actionURL }] } }
//! feedCard    { msgtype, feedCard: { links: [{ title, messageURL, picURL }] } }
//! ```
//!
//! Provider quirks stay inside the constructors: button orientation is sent
//! as `"0"`/`"1"`, and links that must open in the external browser are
//! wrapped in the client's `dingtalk://` scheme at build time.
//!
//! Mentions by user id (`atUserIds`) exist in the wire schema but are not
//! exposed; the field is never emitted.

use serde::{Serialize, Serializer};

use crate::error::{WebhookError, WebhookResult};

/// Prefix of the wrapper URL that hands a link off to the external browser.
const EXTERNAL_LINK_PREFIX: &str = "dingtalk://dingtalkclient/page/link?url=";

/// Wraps `url` so the chat client opens it in the device's browser instead
/// of its side panel.
#[must_use]
pub fn external_link(url: &str) -> String {
    format!(
        "{EXTERNAL_LINK_PREFIX}{}&pc_slide=false",
        urlencoding::encode(url)
    )
}

/// Where a button or feed link opens when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenMode {
    /// Inside the chat client's side panel.
    #[default]
    InApp,
    /// In the device's external browser.
    Browser,
}

impl OpenMode {
    /// Returns the URL to embed for this mode.
    #[must_use]
    pub fn resolve(self, url: &str) -> String {
        match self {
            Self::InApp => url.to_string(),
            Self::Browser => external_link(url),
        }
    }
}

/// Layout of action card buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl ButtonOrientation {
    /// The provider's string encoding of the orientation.
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Vertical => "0",
            Self::Horizontal => "1",
        }
    }
}

impl Serialize for ButtonOrientation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_value())
    }
}

/// A button on an action card, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCardButton {
    pub title: String,
    pub action_url: String,
    pub open_mode: OpenMode,
}

impl ActionCardButton {
    /// Creates a button that opens in the side panel.
    pub fn new(title: impl Into<String>, action_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action_url: action_url.into(),
            open_mode: OpenMode::InApp,
        }
    }

    /// Sets the open mode.
    #[must_use]
    pub fn with_open_mode(mut self, open_mode: OpenMode) -> Self {
        self.open_mode = open_mode;
        self
    }
}

/// An entry of a feed card, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCardLink {
    pub title: String,
    pub message_url: String,
    pub pic_url: String,
    pub open_mode: OpenMode,
}

impl FeedCardLink {
    /// Creates a link that opens in the side panel.
    pub fn new(
        title: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message_url: message_url.into(),
            pic_url: pic_url.into(),
            open_mode: OpenMode::InApp,
        }
    }

    /// Sets the open mode.
    #[must_use]
    pub fn with_open_mode(mut self, open_mode: OpenMode) -> Self {
        self.open_mode = open_mode;
        self
    }
}

/// Mention block shared by text and markdown messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct At {
    at_mobiles: Vec<String>,
    // Never populated; mention by user id is not part of the public API.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    at_user_ids: Vec<String>,
    is_at_all: bool,
}

impl At {
    fn new(at_mobiles: Vec<String>, is_at_all: bool) -> Self {
        Self {
            at_mobiles,
            at_user_ids: Vec::new(),
            is_at_all,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownContent {
    title: String,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkContent {
    text: String,
    title: String,
    pic_url: String,
    message_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCardContent {
    title: String,
    text: String,
    btn_orientation: ButtonOrientation,
    btns: Vec<ActionCardButtonBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionCardButtonBody {
    title: String,
    #[serde(rename = "actionURL")]
    action_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedCardContent {
    links: Vec<FeedCardLinkBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedCardLinkBody {
    title: String,
    #[serde(rename = "messageURL")]
    message_url: String,
    #[serde(rename = "picURL")]
    pic_url: String,
}

/// A message ready to be posted to a robot webhook.
///
/// Build one with the variant constructors; the payload types have no
/// public constructors of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "msgtype", rename_all = "camelCase")]
pub enum MessageDocument {
    Text {
        text: TextContent,
        at: At,
    },
    Markdown {
        markdown: MarkdownContent,
        at: At,
    },
    Link {
        link: LinkContent,
    },
    ActionCard {
        #[serde(rename = "actionCard")]
        action_card: ActionCardContent,
    },
    FeedCard {
        #[serde(rename = "feedCard")]
        feed_card: FeedCardContent,
    },
}

impl MessageDocument {
    /// Plain text message.
    pub fn text(content: impl Into<String>, at_mobiles: Vec<String>, is_at_all: bool) -> Self {
        Self::Text {
            text: TextContent {
                content: content.into(),
            },
            at: At::new(at_mobiles, is_at_all),
        }
    }

    /// Markdown message. `title` is what the conversation list shows.
    pub fn markdown(
        title: impl Into<String>,
        text: impl Into<String>,
        at_mobiles: Vec<String>,
        is_at_all: bool,
    ) -> Self {
        Self::Markdown {
            markdown: MarkdownContent {
                title: title.into(),
                text: text.into(),
            },
            at: At::new(at_mobiles, is_at_all),
        }
    }

    /// Hyperlink card. All fields are sent verbatim.
    pub fn link(
        title: impl Into<String>,
        text: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        Self::Link {
            link: LinkContent {
                text: text.into(),
                title: title.into(),
                pic_url: pic_url.into(),
                message_url: message_url.into(),
            },
        }
    }

    /// Action card with independently linked buttons.
    ///
    /// Buttons keep their order. A button with [`OpenMode::Browser`] has its
    /// URL wrapped by [`external_link`].
    pub fn action_card(
        title: impl Into<String>,
        text: impl Into<String>,
        orientation: ButtonOrientation,
        buttons: &[ActionCardButton],
    ) -> Self {
        let btns = buttons
            .iter()
            .map(|b| ActionCardButtonBody {
                title: b.title.clone(),
                action_url: b.open_mode.resolve(&b.action_url),
            })
            .collect();

        Self::ActionCard {
            action_card: ActionCardContent {
                title: title.into(),
                text: text.into(),
                btn_orientation: orientation,
                btns,
            },
        }
    }

    /// Feed card. Links keep their order and follow the same URL rule as
    /// action card buttons.
    pub fn feed_card(links: &[FeedCardLink]) -> Self {
        let links = links
            .iter()
            .map(|l| FeedCardLinkBody {
                title: l.title.clone(),
                message_url: l.open_mode.resolve(&l.message_url),
                pic_url: l.pic_url.clone(),
            })
            .collect();

        Self::FeedCard {
            feed_card: FeedCardContent { links },
        }
    }

    /// The `msgtype` discriminant sent on the wire.
    #[must_use]
    pub fn msg_type(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Markdown { .. } => "markdown",
            Self::Link { .. } => "link",
            Self::ActionCard { .. } => "actionCard",
            Self::FeedCard { .. } => "feedCard",
        }
    }

    /// Serializes the document to its JSON request body.
    pub fn to_json(&self) -> WebhookResult<String> {
        serde_json::to_string(self).map_err(WebhookError::Serialization)
    }

    /// Serializes the document to JSON bytes.
    pub fn to_vec(&self) -> WebhookResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(WebhookError::Serialization)
    }
}
