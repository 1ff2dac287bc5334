/*
[INPUT]:  BehavioSec timing payloads and the collection host/environment
[OUTPUT]: Behavio data submission (no response body)
[POS]:    HTTP layer - behavio data endpoint (POST, separate host)
[UPDATE]: When the collection URL scheme or timing format changes
*/

use std::collections::HashMap;

use tracing::debug;

use crate::http::params;
use crate::http::{AccessClient, Result};

impl AccessClient {
    /// Send BehavioSec timing data collected for a session.
    ///
    /// POST https://{host}/{environment}/behavio/data
    /// `timing` is raw JSON text from a BehavioSec collection.
    pub async fn set_behavio_data(
        &self,
        host: &str,
        environment: &str,
        session: &str,
        timing: &str,
        uniq: &str,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<()> {
        params::verify_session(session)?;
        params::require_non_blank(host, "host")?;
        params::require_non_blank(environment, "environment")?;
        params::require_non_blank(timing, "timing data")?;
        params::verify_timing(timing)?;
        params::require_non_blank(uniq, "uniq customer identifier")?;

        let mut parameters = params::base_params(self.api_version(), Some(session), None, None);
        parameters.extend(additional_params);
        parameters.insert("m", self.merchant_id().to_string());
        parameters.insert("timing", timing);
        parameters.insert("uniq", uniq);

        let url = self.behavio_url(host, environment)?;
        debug!(url = %url, "behavio data request");
        self.post_no_content(&url, &parameters).await
    }
}
