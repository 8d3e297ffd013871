use crate::config::AppConfig;
use crate::push::Notifier;
use crate::registry::SubscriptionRegistry;
use crate::token::ChatTokenIssuer;
use crate::webhook::WebhookVerifier;

/// Process-wide dependencies, built once at startup and injected into every
/// handler.
#[derive(Clone)]
pub(crate) struct AppState<P, S> {
    pub(crate) config: AppConfig,
    pub(crate) verifier: WebhookVerifier,
    pub(crate) tokens: ChatTokenIssuer,
    pub(crate) notifier: Notifier<P, S>,
    pub(crate) registry: SubscriptionRegistry<P>,
}
