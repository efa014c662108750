//! Read-only server configuration wrapper.

use reqwest::Method;

use crate::client::{Client, NO_BODY};
use crate::error::Result;
use crate::types::ConfigSetting;

impl Client {
    /// Lists the server's configuration settings. There is no mutation
    /// path; the API exposes these read-only.
    pub async fn list_config_settings(&self) -> Result<Vec<ConfigSetting>> {
        self.execute(Method::GET, "config", NO_BODY).await
    }
}
