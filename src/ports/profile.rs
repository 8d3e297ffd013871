use crate::types::push::{NotificationProfile, PushSubscription};

/// Access to the externally owned notification profiles. Writes replace the
/// whole subscription collection; there is no compare-and-swap, so concurrent
/// writers race with last-writer-wins semantics.
pub trait ProfileStore: Clone + Send + Sync + 'static {
    type Error: std::fmt::Display + Send + Sync + 'static;
    type GetFut<'a>: Future<Output = Result<NotificationProfile, Self::Error>> + Send + 'a
    where
        Self: 'a;
    type ListFut<'a>: Future<Output = Result<Vec<NotificationProfile>, Self::Error>> + Send + 'a
    where
        Self: 'a;
    type PutFut<'a>: Future<Output = Result<(), Self::Error>> + Send + 'a
    where
        Self: 'a;

    fn profile<'a>(&'a self, user_id: &'a str) -> Self::GetFut<'a>;
    fn profiles<'a>(&'a self, user_ids: &'a [String]) -> Self::ListFut<'a>;
    fn put_subscriptions<'a>(
        &'a self,
        user_id: &'a str,
        subscriptions: &'a [PushSubscription],
    ) -> Self::PutFut<'a>;
}
