//! Port doubles shared by the unit and router test suites.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ports::profile::ProfileStore;
use crate::ports::push::{PushSender, SendError};
use crate::types::event::{Channel, ChannelEvent, Member, Message, Sender};
use crate::types::push::{NotificationProfile, PushSubscription, SubscriptionKeys};

#[derive(Debug)]
pub(crate) struct TestStoreError(pub(crate) String);

impl std::fmt::Display for TestStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory stand-in for the profile service. Records every batch fetch and
/// every subscription write so tests can assert on downstream traffic.
#[derive(Clone, Default)]
pub(crate) struct TestProfileStore {
    pub(crate) profiles: Arc<Mutex<HashMap<String, NotificationProfile>>>,
    pub(crate) batch_fetches: Arc<Mutex<Vec<Vec<String>>>>,
    pub(crate) puts: Arc<Mutex<Vec<(String, Vec<PushSubscription>)>>>,
}

impl TestProfileStore {
    pub(crate) fn with_profiles(profiles: Vec<NotificationProfile>) -> Self {
        let store = Self::default();
        {
            let mut guard = store.profiles.lock().expect("profiles lock");
            for profile in profiles {
                guard.insert(profile.user_id.clone(), profile);
            }
        }
        store
    }

    pub(crate) fn subscriptions_of(&self, user_id: &str) -> Vec<PushSubscription> {
        self.profiles
            .lock()
            .expect("profiles lock")
            .get(user_id)
            .map(|profile| profile.subscriptions.clone())
            .unwrap_or_default()
    }
}

impl ProfileStore for TestProfileStore {
    type Error = TestStoreError;
    type GetFut<'a>
        = std::future::Ready<Result<NotificationProfile, TestStoreError>>
    where
        Self: 'a;
    type ListFut<'a>
        = std::future::Ready<Result<Vec<NotificationProfile>, TestStoreError>>
    where
        Self: 'a;
    type PutFut<'a>
        = std::future::Ready<Result<(), TestStoreError>>
    where
        Self: 'a;

    fn profile<'a>(&'a self, user_id: &'a str) -> Self::GetFut<'a> {
        let result = self
            .profiles
            .lock()
            .expect("profiles lock")
            .get(user_id)
            .cloned()
            .ok_or_else(|| TestStoreError(format!("no profile for '{user_id}'")));
        std::future::ready(result)
    }

    fn profiles<'a>(&'a self, user_ids: &'a [String]) -> Self::ListFut<'a> {
        self.batch_fetches
            .lock()
            .expect("fetches lock")
            .push(user_ids.to_vec());
        let guard = self.profiles.lock().expect("profiles lock");
        let found = user_ids
            .iter()
            .filter_map(|id| guard.get(id).cloned())
            .collect();
        std::future::ready(Ok(found))
    }

    fn put_subscriptions<'a>(
        &'a self,
        user_id: &'a str,
        subscriptions: &'a [PushSubscription],
    ) -> Self::PutFut<'a> {
        self.puts
            .lock()
            .expect("puts lock")
            .push((user_id.to_string(), subscriptions.to_vec()));
        if let Some(profile) = self
            .profiles
            .lock()
            .expect("profiles lock")
            .get_mut(user_id)
        {
            profile.subscriptions = subscriptions.to_vec();
        }
        std::future::ready(Ok(()))
    }
}

/// Push transport double. Endpoints can be marked gone (terminal failure) or
/// failing (transient failure); everything else succeeds.
#[derive(Clone, Default)]
pub(crate) struct TestPushSender {
    pub(crate) sent: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    gone_endpoints: Arc<Mutex<Vec<String>>>,
    failing_endpoints: Arc<Mutex<Vec<String>>>,
}

impl TestPushSender {
    pub(crate) fn mark_gone(&self, endpoint: &str) {
        self.gone_endpoints
            .lock()
            .expect("gone lock")
            .push(endpoint.to_string());
    }

    pub(crate) fn mark_failing(&self, endpoint: &str) {
        self.failing_endpoints
            .lock()
            .expect("failing lock")
            .push(endpoint.to_string());
    }

    pub(crate) fn sent_endpoints(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("sent lock")
            .iter()
            .map(|(endpoint, _)| endpoint.clone())
            .collect()
    }
}

impl PushSender for TestPushSender {
    type Fut<'a>
        = std::future::Ready<Result<(), SendError>>
    where
        Self: 'a;

    fn send<'a>(&'a self, subscription: &'a PushSubscription, payload: &'a [u8]) -> Self::Fut<'a> {
        self.sent
            .lock()
            .expect("sent lock")
            .push((subscription.endpoint.clone(), payload.to_vec()));
        let result = if self
            .gone_endpoints
            .lock()
            .expect("gone lock")
            .contains(&subscription.endpoint)
        {
            Err(SendError::EndpointGone)
        } else if self
            .failing_endpoints
            .lock()
            .expect("failing lock")
            .contains(&subscription.endpoint)
        {
            Err(SendError::Other("push service unavailable".to_string()))
        } else {
            Ok(())
        };
        std::future::ready(result)
    }
}

pub(crate) fn subscription(endpoint: &str) -> PushSubscription {
    PushSubscription {
        endpoint: endpoint.to_string(),
        keys: SubscriptionKeys {
            p256dh: "p256".to_string(),
            auth: "auth".to_string(),
        },
        session_id: None,
    }
}

pub(crate) fn profile(
    user_id: &str,
    muted_channels: &[&str],
    subscriptions: Vec<PushSubscription>,
) -> NotificationProfile {
    NotificationProfile {
        user_id: user_id.to_string(),
        muted_channels: muted_channels.iter().map(|id| id.to_string()).collect(),
        subscriptions,
    }
}

pub(crate) fn event(sender_id: &str, channel_id: &str, member_ids: &[&str]) -> ChannelEvent {
    ChannelEvent {
        user: Sender {
            id: sender_id.to_string(),
            name: Some("Sender".to_string()),
            image: Some("https://img.example/sender.png".to_string()),
        },
        channel: Channel {
            id: channel_id.to_string(),
            members: member_ids
                .iter()
                .map(|id| Member {
                    user_id: id.to_string(),
                })
                .collect(),
        },
        message: Message {
            text: Some("hello".to_string()),
            attachments: Vec::new(),
        },
    }
}
