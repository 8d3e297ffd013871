use std::net::SocketAddr;

mod adapters;
mod app;
pub mod config;
mod ports;
mod push;
mod registry;
mod state;
#[cfg(test)]
mod testing;
mod token;
mod types;
mod webhook;

pub use app::app;
pub use push::vapid::{VapidCredentials, generate_vapid_credentials};

pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app(config)).await.expect("server error");
}
