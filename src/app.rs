use crate::adapters::{HttpProfileStore, WebPushSender};
use crate::config;
use crate::ports::profile::ProfileStore;
use crate::ports::push::PushSender;
use crate::push::Notifier;
use crate::registry::SubscriptionRegistry;
use crate::state;
use crate::token::ChatTokenIssuer;
use crate::webhook::WebhookVerifier;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

mod subscriptions;
mod token;
mod webhook;

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

pub fn app(config: config::AppConfig) -> Router {
    let sender = WebPushSender::new(config.vapid.clone())
        .unwrap_or_else(|err| panic!("failed to initialize web-push client: {err}"));
    let profiles = HttpProfileStore::new(&config.profile)
        .unwrap_or_else(|err| panic!("failed to initialize profile-service client: {err}"));
    app_with(config, profiles, sender)
}

pub(crate) fn app_with<P, S>(config: config::AppConfig, profiles: P, sender: S) -> Router
where
    P: ProfileStore,
    S: PushSender,
{
    let state = state::AppState {
        verifier: WebhookVerifier::new(&config.webhook_secret),
        tokens: ChatTokenIssuer::new(&config.chat_secret, config.chat_token_ttl),
        notifier: Notifier::new(profiles.clone(), sender),
        registry: SubscriptionRegistry::new(profiles),
        config,
    };
    Router::new()
        .route("/", get(root))
        .route("/webhook", post(webhook::receive_event))
        .route(
            "/subscriptions",
            post(subscriptions::register).delete(subscriptions::unregister),
        )
        .route("/push/public-key", get(subscriptions::public_key))
        .route("/token", get(token::mint_token))
        .route("/health", get(health))
        .with_state(state)
}

pub(crate) async fn root() -> &'static str {
    "API is running..."
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
