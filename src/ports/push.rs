use crate::types::push::PushSubscription;

/// Outcome of a single delivery attempt. Only a gone endpoint is terminal;
/// everything else is a failure of this attempt alone.
#[derive(Debug)]
pub enum SendError {
    EndpointGone,
    Other(String),
}

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendError::EndpointGone => f.write_str("push endpoint is gone"),
            SendError::Other(detail) => f.write_str(detail),
        }
    }
}

pub trait PushSender: Clone + Send + Sync + 'static {
    type Fut<'a>: Future<Output = Result<(), SendError>> + Send + 'a
    where
        Self: 'a;

    fn send<'a>(&'a self, subscription: &'a PushSubscription, payload: &'a [u8]) -> Self::Fut<'a>;
}
