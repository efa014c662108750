//! Zone CRUD wrappers.

use reqwest::Method;

use crate::client::{Client, NO_BODY};
use crate::error::Result;
use crate::naming::trim_domain;
use crate::types::{NotifyResult, Zone};

impl Client {
    /// Lists all zones the server knows about, without their rrsets.
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.execute(Method::GET, "zones", NO_BODY).await
    }

    /// Fetches one zone, including its rrsets.
    pub async fn get_zone(&self, zone: &str) -> Result<Zone> {
        let path = format!("zones/{}", trim_domain(zone));
        self.execute(Method::GET, &path, NO_BODY).await
    }

    /// Creates a zone and returns it as the server recorded it. The
    /// caller decides the kind, nameservers, and DNSSEC settings via the
    /// [`Zone`] fields it fills in.
    pub async fn create_zone(&self, zone: &Zone) -> Result<Zone> {
        self.execute(Method::POST, "zones", Some(zone)).await
    }

    /// Deletes a zone and everything in it.
    pub async fn delete_zone(&self, zone: &str) -> Result<()> {
        let path = format!("zones/{}", trim_domain(zone));
        self.execute_discard(Method::DELETE, &path, NO_BODY).await
    }

    /// Queues a NOTIFY to all of the zone's slaves.
    pub async fn notify_zone(&self, zone: &str) -> Result<NotifyResult> {
        let path = format!("zones/{}/notify", trim_domain(zone));
        self.execute(Method::PUT, &path, NO_BODY).await
    }
}
