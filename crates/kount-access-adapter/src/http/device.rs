/*
[INPUT]:  Session ids, device fingerprints, and uniq customer ids
[OUTPUT]: Device and customer lookup documents
[POS]:    HTTP layer - device lookup endpoints (GET)
[UPDATE]: When adding new lookup endpoints or changing query parameters
*/

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::http::params::{self, RequestParams};
use crate::http::{AccessClient, Result};

impl AccessClient {
    /// Get the device information collected for a session.
    ///
    /// GET /api/device?v={version}&s={session}
    pub async fn get_device(
        &self,
        session: &str,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        params::verify_session(session)?;

        let mut parameters = RequestParams::new();
        parameters.insert("v", self.api_version());
        parameters.insert("s", session);
        parameters.extend(additional_params);

        let url = self.endpoints().device.clone();
        debug!(url = %url, "device request");
        self.get_json(&url, &parameters).await
    }

    /// Get the devices that have been seen for a uniq customer id.
    ///
    /// GET /api/getdevices?v={version}&uniq={uniq}
    pub async fn get_devices(
        &self,
        uniq: &str,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        params::require_non_blank(uniq, "uniq")?;

        let mut parameters = RequestParams::new();
        parameters.insert("v", self.api_version());
        parameters.insert("uniq", uniq);
        parameters.extend(additional_params);

        let url = self.endpoints().get_devices.clone();
        debug!(url = %url, "getdevices request");
        self.get_json(&url, &parameters).await
    }

    /// Get the uniq customer ids that have been seen on a device.
    ///
    /// GET /api/getuniques?v={version}&d={deviceId}
    pub async fn get_uniques(
        &self,
        device_id: &str,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        params::require_non_blank(device_id, "device id")?;

        let mut parameters = RequestParams::new();
        parameters.insert("v", self.api_version());
        parameters.insert("d", device_id);
        parameters.extend(additional_params);

        let url = self.endpoints().get_uniques.clone();
        debug!(url = %url, "getuniques request");
        self.get_json(&url, &parameters).await
    }
}
