/*
[INPUT]:  Session ids and login credentials
[OUTPUT]: Velocity and threshold decision documents
[POS]:    HTTP layer - credential-scoring endpoints (POST)
[UPDATE]: When adding new scoring endpoints or changing form parameters
*/

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::http::params;
use crate::http::{AccessClient, Result};

impl AccessClient {
    /// Get the velocity data for the session's username and password.
    ///
    /// POST /api/velocity
    /// Credentials are SHA-256 hashed before transmission.
    pub async fn get_velocity(
        &self,
        session: &str,
        username: &str,
        password: &str,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        params::verify_session(session)?;

        let mut parameters = params::base_params(
            self.api_version(),
            Some(session),
            Some(username),
            Some(password),
        );
        parameters.extend(additional_params);

        let url = self.endpoints().velocity.clone();
        debug!(url = %url, "velocity request");
        self.post_json(&url, &parameters).await
    }

    /// Get the threshold decision and velocity data for the session's
    /// username and password.
    ///
    /// POST /api/decision
    pub async fn get_decision(
        &self,
        session: &str,
        username: &str,
        password: &str,
        additional_params: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        params::verify_session(session)?;

        let mut parameters = params::base_params(
            self.api_version(),
            Some(session),
            Some(username),
            Some(password),
        );
        parameters.extend(additional_params);

        let url = self.endpoints().decision.clone();
        debug!(url = %url, "decision request");
        self.post_json(&url, &parameters).await
    }
}
