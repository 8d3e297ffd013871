use crate::ports::profile::ProfileStore;
use crate::ports::push::{PushSender, SendError};
use crate::types::event::ChannelEvent;
use crate::types::push::{NotificationPayload, NotificationProfile, PushSubscription};

pub(crate) mod vapid;

use futures::future::join_all;

/// Turns one authenticated channel event into push deliveries: resolves who
/// should hear about it, then pushes to every registered endpoint of every
/// recipient.
#[derive(Clone)]
pub(crate) struct Notifier<P, S> {
    profiles: P,
    sender: S,
}

impl<P, S> Notifier<P, S>
where
    P: ProfileStore,
    S: PushSender,
{
    pub(crate) fn new(profiles: P, sender: S) -> Self {
        Self { profiles, sender }
    }

    /// Errors only on profile-store failures; individual delivery failures
    /// never surface to the caller.
    pub(crate) async fn dispatch(&self, event: &ChannelEvent) -> Result<(), P::Error> {
        let recipients = self.resolve_recipients(event).await?;
        self.deliver(&recipients, event).await
    }

    /// Channel members minus the sender, minus anyone who muted the channel.
    pub(crate) async fn resolve_recipients(
        &self,
        event: &ChannelEvent,
    ) -> Result<Vec<String>, P::Error> {
        let candidates: Vec<String> = event
            .channel
            .members
            .iter()
            .map(|member| member.user_id.clone())
            .filter(|id| *id != event.user.id)
            .collect();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let profiles = self.profiles.profiles(&candidates).await?;
        Ok(profiles
            .into_iter()
            .filter(|profile| !profile.muted_channels.contains(&event.channel.id))
            .map(|profile| profile.user_id)
            .collect())
    }

    /// Dispatches one delivery per (recipient, subscription) pair. All
    /// deliveries run concurrently and independently; the future resolves
    /// once every one of them has settled.
    pub(crate) async fn deliver(
        &self,
        recipients: &[String],
        event: &ChannelEvent,
    ) -> Result<(), P::Error> {
        if recipients.is_empty() {
            return Ok(());
        }

        let profiles = self.profiles.profiles(recipients).await?;
        let payload = payload_from_event(event);
        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(err) => {
                eprintln!("failed to encode notification payload: {err}");
                return Ok(());
            }
        };

        let body = body.as_slice();
        let deliveries = profiles.iter().flat_map(|profile| {
            profile
                .subscriptions
                .iter()
                .map(move |subscription| self.deliver_one(profile, subscription, body))
        });
        join_all(deliveries).await;
        Ok(())
    }

    async fn deliver_one(
        &self,
        profile: &NotificationProfile,
        subscription: &PushSubscription,
        body: &[u8],
    ) {
        match self.sender.send(subscription, body).await {
            Ok(()) => {}
            Err(SendError::EndpointGone) => {
                eprintln!(
                    "push subscription expired for '{}', removing {}",
                    profile.user_id, subscription.endpoint
                );
                // Drops the dead endpoint from the fetch-time snapshot;
                // concurrent writers race with last-writer-wins.
                let remaining: Vec<PushSubscription> = profile
                    .subscriptions
                    .iter()
                    .filter(|existing| existing.endpoint != subscription.endpoint)
                    .cloned()
                    .collect();
                if let Err(err) = self
                    .profiles
                    .put_subscriptions(&profile.user_id, &remaining)
                    .await
                {
                    eprintln!(
                        "failed to drop expired subscription for '{}': {err}",
                        profile.user_id
                    );
                }
            }
            Err(err) => {
                eprintln!("push delivery error: {err} (user {})", profile.user_id);
            }
        }
    }
}

/// Builds the notification document for an event. The image comes from the
/// first attachment, preferring the full-size url over the thumbnail.
pub(crate) fn payload_from_event(event: &ChannelEvent) -> NotificationPayload {
    let image = event.message.attachments.first().and_then(|attachment| {
        attachment
            .image_url
            .clone()
            .or_else(|| attachment.thumb_url.clone())
    });
    NotificationPayload {
        title: event.user.name.clone(),
        body: event.message.text.clone(),
        icon: event.user.image.clone(),
        image,
        channel_id: event.channel.id.clone(),
    }
}
