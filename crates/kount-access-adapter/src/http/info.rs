/*
[INPUT]:  Info data-set flags, session ids, and optional credentials
[OUTPUT]: Combined info documents (device, velocity, decision, trust, behavio)
[POS]:    HTTP layer - combined info endpoint (POST)
[UPDATE]: When the info endpoint grows new data sets or validation rules
*/

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::http::params;
use crate::http::{AccessClient, AccessError, Result};
use crate::types::InfoDataSet;

impl AccessClient {
    /// Get device info, threshold decision, velocity, trusted device and/or
    /// BehavioSec data in one call. The returned data sets are selected by
    /// `info_flag`, built with [`InfoDataSet`].
    ///
    /// POST /api/info
    pub async fn get_info(
        &self,
        info_flag: u32,
        session: &str,
        uniq: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        params::verify_session(session)?;
        verify_info_params(info_flag, uniq, username, password)?;

        let mut parameters =
            params::base_params(self.api_version(), Some(session), username, password);
        parameters.extend(additional_params);
        parameters.insert("i", info_flag.to_string());
        if let Some(uniq) = uniq {
            parameters.insert("uniq", uniq);
        }

        let url = self.endpoints().info.clone();
        debug!(url = %url, info_flag, "info request");
        self.post_json(&url, &parameters).await
    }
}

fn verify_info_params(
    info_flag: u32,
    uniq: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    if !(1..=31).contains(&info_flag) {
        return Err(AccessError::invalid(format!(
            "invalid info flag ({info_flag}), must be an integer between 1 and 31 (including)"
        )));
    }

    // uniq is required for trusted and behavio requests
    if info_flag & (InfoDataSet::TRUSTED | InfoDataSet::BEHAVIOSEC) != 0
        && uniq.is_none_or(|value| value.trim().is_empty())
    {
        return Err(AccessError::invalid(
            "missing uniq, must be present for trusted and behavio requests",
        ));
    }

    // username and password are required for velocity and decision requests
    if info_flag & (InfoDataSet::VELOCITY | InfoDataSet::DECISION) != 0
        && (username.is_none_or(|value| value.trim().is_empty())
            || password.is_none_or(|value| value.trim().is_empty()))
    {
        return Err(AccessError::invalid(
            "missing username/password, must be present for velocity and decision requests",
        ));
    }

    Ok(())
}
