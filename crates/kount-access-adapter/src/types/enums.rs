/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::AccessError;

/// Device reputation flag set by the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustedState {
    Trusted,
    NotTrusted,
    Banned,
}

impl TrustedState {
    /// Wire value sent in the `ts` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TrustedState::Trusted => "trusted",
            TrustedState::NotTrusted => "not_trusted",
            TrustedState::Banned => "banned",
        }
    }
}

impl fmt::Display for TrustedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrustedState {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "trusted" => Ok(TrustedState::Trusted),
            "not_trusted" => Ok(TrustedState::NotTrusted),
            "banned" => Ok(TrustedState::Banned),
            other => Err(AccessError::InvalidData(format!(
                "invalid trusted state ({other}), must be one of: trusted, not_trusted, banned"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(TrustedState::Trusted.as_str(), "trusted");
        assert_eq!(TrustedState::NotTrusted.as_str(), "not_trusted");
        assert_eq!(TrustedState::Banned.as_str(), "banned");
    }

    #[test]
    fn test_from_str_round_trip() {
        for state in [
            TrustedState::Trusted,
            TrustedState::NotTrusted,
            TrustedState::Banned,
        ] {
            assert_eq!(state.as_str().parse::<TrustedState>().unwrap(), state);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_states() {
        for bogus in ["", "TRUSTED", "blocked", "not trusted"] {
            let err = bogus.parse::<TrustedState>().unwrap_err();
            assert!(err.is_invalid_data());
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&TrustedState::NotTrusted).unwrap();
        assert_eq!(json, r#""not_trusted""#);
        let state: TrustedState = serde_json::from_str(r#""banned""#).unwrap();
        assert_eq!(state, TrustedState::Banned);
    }
}
