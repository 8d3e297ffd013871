use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Checks that an inbound webhook body was signed by the chat backend with the
/// shared secret. Nothing downstream may run until this has passed.
#[derive(Clone)]
pub(crate) struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    pub(crate) fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    /// True iff `signature` is the hex-encoded HMAC-SHA256 digest of `body`
    /// under the shared secret. An absent or malformed header never verifies.
    pub(crate) fn verify(&self, body: &[u8], signature: Option<&str>) -> bool {
        let Some(signature) = signature else {
            return false;
        };
        let Ok(provided) = hex::decode(signature.trim()) else {
            return false;
        };
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(body);
        mac.verify_slice(&provided).is_ok()
    }
}
