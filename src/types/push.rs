use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// A browser push registration plus the session that created it. A user's
/// collection never holds two entries with the same endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscription {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Per-user notification state as stored by the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "mutedChannels", default)]
    pub muted_channels: Vec<String>,
    #[serde(default)]
    pub subscriptions: Vec<PushSubscription>,
}

/// The JSON document delivered to push endpoints. Absent fields are omitted
/// rather than serialized as null.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: String,
}

#[derive(Debug, Clone)]
pub struct VapidConfig {
    pub private_key: String,
    pub public_key: String,
    pub subject: String,
}
