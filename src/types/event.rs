use serde::Deserialize;

/// Chat-backend webhook payload for a new message, as it appears on the wire.
/// Only the fields the relay acts on are modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelEvent {
    pub user: Sender,
    pub channel: Channel,
    pub message: Message,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub text: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
}
