/*
[INPUT]:  Device fingerprints, uniq customer ids, and trusted states
[OUTPUT]: Trust state writes (no response body)
[POS]:    HTTP layer - device trust endpoints (POST)
[UPDATE]: When trust parameters or states change
*/

use std::collections::HashMap;

use tracing::debug;

use crate::http::params;
use crate::http::{AccessClient, Result};
use crate::types::TrustedState;

impl AccessClient {
    /// Set the trusted state of a device by device id.
    ///
    /// POST /api/devicetrustbydevice
    pub async fn set_device_trust_by_device(
        &self,
        device_id: &str,
        uniq: &str,
        trusted_state: TrustedState,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<()> {
        params::require_non_blank(device_id, "device id")?;
        params::require_non_blank(uniq, "uniq")?;

        let mut parameters = params::base_params(self.api_version(), None, None, None);
        parameters.extend(additional_params);
        parameters.insert("d", device_id);
        parameters.insert("uniq", uniq);
        parameters.insert("ts", trusted_state.as_str());

        let url = self.endpoints().device_trust_by_device.clone();
        debug!(url = %url, "devicetrustbydevice request");
        self.post_no_content(&url, &parameters).await
    }

    /// Set the trusted state of a device by session.
    ///
    /// POST /api/devicetrustbysession
    pub async fn set_device_trust_by_session(
        &self,
        session: &str,
        uniq: &str,
        trusted_state: TrustedState,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<()> {
        params::verify_session(session)?;
        params::require_non_blank(uniq, "uniq")?;

        let mut parameters = params::base_params(self.api_version(), Some(session), None, None);
        parameters.extend(additional_params);
        parameters.insert("uniq", uniq);
        parameters.insert("ts", trusted_state.as_str());

        let url = self.endpoints().device_trust_by_session.clone();
        debug!(url = %url, "devicetrustbysession request");
        self.post_no_content(&url, &parameters).await
    }
}
