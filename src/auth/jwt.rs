use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::state::AppState;

/// JWT payload: the caller's email plus issue and expiry timestamps.
/// Nothing is stored server-side; signature and expiry decide validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let jwt = &state.config.jwt;
        Self {
            encoding: EncodingKey::from_secret(jwt.secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt.secret.as_bytes()),
            ttl: Duration::from_secs((jwt.ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(email = %email, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let validation = Validation::default();
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(email = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_with_secret(secret: &str) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs(2 * 60 * 60),
        }
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign("johnc@example.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "johnc@example.com");
        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let keys = keys_with_secret("dev-secret");
        let now = OffsetDateTime::now_utc().unix_timestamp();
        // Well past the validator's default leeway.
        let claims = Claims {
            sub: "johnc@example.com".into(),
            iat: (now - 4 * 60 * 60) as usize,
            exp: (now - 2 * 60 * 60) as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let good = keys_with_secret("one-secret");
        let other = keys_with_secret("another-secret");
        let token = good.sign("johnc@example.com").expect("sign");
        assert!(other.verify(&token).is_err());
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let keys = keys_with_secret("dev-secret");
        assert!(keys.verify("not-a-token").is_err());
    }
}
