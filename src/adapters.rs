use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::config;
use crate::ports;
use crate::ports::push::SendError;
use crate::types::push::{NotificationProfile, PushSubscription, VapidConfig};

/// Web Push delivery over the standard protocol: aes128gcm payload
/// encryption plus a VAPID signature derived from the server keypair.
#[derive(Clone)]
pub struct WebPushSender {
    vapid: VapidConfig,
    client: Arc<web_push::WebPushClient>,
}

impl WebPushSender {
    pub fn new(vapid: VapidConfig) -> Result<Self, web_push::WebPushError> {
        let client = web_push::WebPushClient::new()?;
        Ok(Self {
            vapid,
            client: Arc::new(client),
        })
    }
}

impl From<web_push::WebPushError> for SendError {
    fn from(err: web_push::WebPushError) -> Self {
        match err {
            // 410 from the push service: the registration is gone for good.
            web_push::WebPushError::EndpointNotValid => SendError::EndpointGone,
            other => SendError::Other(other.to_string()),
        }
    }
}

impl ports::push::PushSender for WebPushSender {
    type Fut<'a>
        = Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + 'a>>
    where
        Self: 'a;

    fn send<'a>(&'a self, subscription: &'a PushSubscription, payload: &'a [u8]) -> Self::Fut<'a> {
        Box::pin(async move {
            let subscription_info = web_push::SubscriptionInfo::new(
                subscription.endpoint.clone(),
                subscription.keys.p256dh.clone(),
                subscription.keys.auth.clone(),
            );
            let mut builder = web_push::WebPushMessageBuilder::new(&subscription_info)?;
            builder.set_payload(web_push::ContentEncoding::Aes128Gcm, payload);
            let mut signature_builder = web_push::VapidSignatureBuilder::from_base64(
                &self.vapid.private_key,
                web_push::URL_SAFE_NO_PAD,
                &subscription_info,
            )?;
            signature_builder.add_claim("sub", self.vapid.subject.as_str());
            builder.set_vapid_signature(signature_builder.build()?);
            self.client.send(builder.build()?).await?;
            Ok(())
        })
    }
}

/// JSON client for the profile service that owns the notification profiles.
#[derive(Clone)]
pub struct HttpProfileStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpProfileStore {
    pub fn new(config: &config::ProfileStoreConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

impl ports::profile::ProfileStore for HttpProfileStore {
    type Error = reqwest::Error;
    type GetFut<'a>
        = Pin<Box<dyn Future<Output = Result<NotificationProfile, reqwest::Error>> + Send + 'a>>
    where
        Self: 'a;
    type ListFut<'a>
        = Pin<Box<dyn Future<Output = Result<Vec<NotificationProfile>, reqwest::Error>> + Send + 'a>>
    where
        Self: 'a;
    type PutFut<'a>
        = Pin<Box<dyn Future<Output = Result<(), reqwest::Error>> + Send + 'a>>
    where
        Self: 'a;

    fn profile<'a>(&'a self, user_id: &'a str) -> Self::GetFut<'a> {
        Box::pin(async move {
            self.client
                .get(format!("{}/users/{user_id}", self.base_url))
                .bearer_auth(&self.api_key)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await
        })
    }

    fn profiles<'a>(&'a self, user_ids: &'a [String]) -> Self::ListFut<'a> {
        Box::pin(async move {
            let query: Vec<(&str, &str)> = user_ids.iter().map(|id| ("id", id.as_str())).collect();
            self.client
                .get(format!("{}/users", self.base_url))
                .query(&query)
                .bearer_auth(&self.api_key)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await
        })
    }

    fn put_subscriptions<'a>(
        &'a self,
        user_id: &'a str,
        subscriptions: &'a [PushSubscription],
    ) -> Self::PutFut<'a> {
        Box::pin(async move {
            self.client
                .put(format!("{}/users/{user_id}/subscriptions", self.base_url))
                .bearer_auth(&self.api_key)
                .json(&subscriptions)
                .send()
                .await?
                .error_for_status()?;
            Ok(())
        })
    }
}
