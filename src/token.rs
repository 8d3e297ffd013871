use jwt_simple::algorithms::MACLike;
use jwt_simple::prelude::{Claims, Duration as JwtDuration, HS256Key};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum TokenError {
    InvalidTtl,
    Signing,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::InvalidTtl => f.write_str("token ttl must be greater than 0"),
            TokenError::Signing => f.write_str("failed to sign token"),
        }
    }
}

/// Claim set the chat backend expects in client tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ChatClaims {
    pub(crate) user_id: String,
}

/// Mints short-lived credentials that let a client connect to the chat
/// backend as a given user.
#[derive(Clone)]
pub(crate) struct ChatTokenIssuer {
    key: HS256Key,
    token_ttl: std::time::Duration,
}

impl ChatTokenIssuer {
    pub(crate) fn new(secret: &str, token_ttl: std::time::Duration) -> Self {
        Self {
            key: HS256Key::from_bytes(secret.as_bytes()),
            token_ttl,
        }
    }

    pub(crate) fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        let ttl_seconds = self.token_ttl.as_secs();
        if ttl_seconds == 0 {
            return Err(TokenError::InvalidTtl);
        }
        let claims = Claims::with_custom_claims(
            ChatClaims {
                user_id: user_id.to_string(),
            },
            JwtDuration::from_secs(ttl_seconds),
        );
        self.key
            .authenticate(claims)
            .map_err(|_| TokenError::Signing)
    }
}
