use crate::ports::profile::ProfileStore;
use crate::types::push::PushSubscription;

/// Client-initiated add/remove of push subscriptions, deduplicated by
/// endpoint. Reads and writes go through the profile store as a whole
/// collection; see the port docs for the concurrency caveat.
#[derive(Clone)]
pub(crate) struct SubscriptionRegistry<P> {
    profiles: P,
}

impl<P> SubscriptionRegistry<P>
where
    P: ProfileStore,
{
    pub(crate) fn new(profiles: P) -> Self {
        Self { profiles }
    }

    /// Replaces any existing subscription with the same endpoint, then
    /// appends the new one tagged with the owning session.
    pub(crate) async fn register(
        &self,
        user_id: &str,
        session_id: &str,
        subscription: PushSubscription,
    ) -> Result<(), P::Error> {
        let profile = self.profiles.profile(user_id).await?;
        let mut subscriptions: Vec<PushSubscription> = profile
            .subscriptions
            .into_iter()
            .filter(|existing| existing.endpoint != subscription.endpoint)
            .collect();
        subscriptions.push(PushSubscription {
            session_id: Some(session_id.to_string()),
            ..subscription
        });
        self.profiles
            .put_subscriptions(user_id, &subscriptions)
            .await
    }

    /// Removing an endpoint that is not registered is a no-op success.
    pub(crate) async fn unregister(&self, user_id: &str, endpoint: &str) -> Result<(), P::Error> {
        let profile = self.profiles.profile(user_id).await?;
        let subscriptions: Vec<PushSubscription> = profile
            .subscriptions
            .into_iter()
            .filter(|existing| existing.endpoint != endpoint)
            .collect();
        self.profiles
            .put_subscriptions(user_id, &subscriptions)
            .await
    }
}
