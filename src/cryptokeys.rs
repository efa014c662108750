//! DNSSEC cryptokey wrappers. Keys are addressed by (zone, id).

use reqwest::Method;

use crate::client::{Client, NO_BODY};
use crate::error::Result;
use crate::naming::{key_id_segment, trim_domain};
use crate::types::Cryptokey;

impl Client {
    /// Lists the signing keys of a zone.
    pub async fn list_cryptokeys(&self, zone: &str) -> Result<Vec<Cryptokey>> {
        let path = format!("zones/{}/cryptokeys", trim_domain(zone));
        self.execute(Method::GET, &path, NO_BODY).await
    }

    /// Fetches one signing key, including its private key material.
    pub async fn get_cryptokey(&self, zone: &str, id: u64) -> Result<Cryptokey> {
        let path = format!(
            "zones/{}/cryptokeys/{}",
            trim_domain(zone),
            key_id_segment(id)
        );
        self.execute(Method::GET, &path, NO_BODY).await
    }

    /// Removes a signing key from a zone.
    pub async fn delete_cryptokey(&self, zone: &str, id: u64) -> Result<()> {
        let path = format!(
            "zones/{}/cryptokeys/{}",
            trim_domain(zone),
            key_id_segment(id)
        );
        self.execute_discard(Method::DELETE, &path, NO_BODY).await
    }
}
