pub use crate::types::push::VapidConfig;

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub chat_secret: String,
    pub webhook_secret: String,
    pub chat_token_ttl: std::time::Duration,
    pub vapid: VapidConfig,
    pub profile: ProfileStoreConfig,
}

#[derive(Clone)]
pub struct ProfileStoreConfig {
    pub base_url: String,
    pub api_key: String,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            chat_secret: "chat-secret".to_string(),
            webhook_secret: "webhook-secret".to_string(),
            chat_token_ttl: std::time::Duration::from_secs(3600),
            vapid: VapidConfig {
                private_key: "9pKJeIXAyyCj5M0QagsVvDYHlPF-cymJCbB5iHPsdEE".to_string(),
                public_key:
                    "BCRweRf_U5iQM4pKNucGRzM6OuLp8Hisa8yX0N2ePIf1oxKitvFT6qvuGgYoTxlMatMDaytXbZR3rVClc2w_p6U"
                        .to_string(),
                subject: "mailto:ops@example.com".to_string(),
            },
            profile: ProfileStoreConfig {
                base_url: "http://profiles.invalid".to_string(),
                api_key: "profile-api-key".to_string(),
            },
        }
    }
}
