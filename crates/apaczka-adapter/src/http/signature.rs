/*
[INPUT]:  Route, JSON payload text, expiry timestamp and API credentials
[OUTPUT]: Signed form bodies (hex-encoded HMAC-SHA256)
[POS]:    HTTP layer - request signing for every endpoint
[UPDATE]: When changing the signing algorithm or the body layout
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::client::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Signs request bodies for the Apaczka v2 gateway
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new request signer over the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Application id stamped into every signed body
    pub fn app_id(&self) -> &str {
        &self.credentials.app_id
    }

    /// Canonical message covered by the signature
    ///
    /// Format: "{app_id}:{route}:{payload_json}:{expires}"
    /// Field order and the colon separator are fixed by the gateway.
    pub fn string_to_sign(&self, route: &str, payload_json: &str, expires: i64) -> String {
        format!("{}:{route}:{payload_json}:{expires}", self.credentials.app_id)
    }

    /// HMAC-SHA256 over `message` keyed by the shared secret, lowercase hex
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.app_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Build the complete form body for one request
    ///
    /// Exactly four fields in this order: `app_id`, `request`, `expires`,
    /// `signature`. The JSON text goes into `request` verbatim - the gateway
    /// verifies the signature against the raw bytes, so percent-encoding the
    /// payload would break it.
    pub fn signed_body(&self, route: &str, payload_json: &str, expires: i64) -> String {
        let signature = self.sign(&self.string_to_sign(route, payload_json, expires));
        format!(
            "app_id={}&request={payload_json}&expires={expires}&signature={signature}",
            self.credentials.app_id
        )
    }
}
