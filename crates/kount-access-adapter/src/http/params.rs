/*
[INPUT]:  Session/credential fields and caller-supplied extras
[OUTPUT]: Ordered form/query parameter lists with hashed credentials
[POS]:    HTTP layer - parameter assembly and input validation
[UPDATE]: When parameter names, hashing, or validation rules change
*/

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::http::{AccessError, Result};

/// Ordered parameter list with last-write-wins keys.
///
/// Built fresh for every request. Derived values (`d`, `uniq`, `ts`, `m`,
/// `timing`, `i`) are inserted after caller extras, so a colliding caller key
/// is always overwritten by the derived value.
#[derive(Debug, Default)]
pub(crate) struct RequestParams {
    entries: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, replacing any previous value for it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries.retain(|(existing, _)| *existing != key);
        self.entries.push((key, value.into()));
    }

    /// Merge caller-supplied extras. The caller's map is never mutated.
    pub fn extend(&mut self, extras: Option<&HashMap<String, String>>) {
        let Some(extras) = extras else {
            return;
        };
        let mut keys: Vec<&String> = extras.keys().collect();
        keys.sort();
        for key in keys {
            self.insert(key.clone(), extras[key].clone());
        }
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.entries
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Build the standard parameter set shared by every Access request.
///
/// The `ah` hash covers `{username}:{password}` with an absent side rendered
/// as the literal `null`, matching the wire values existing merchants send.
pub(crate) fn base_params(
    version: &str,
    session: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> RequestParams {
    let mut params = RequestParams::new();
    params.insert("v", version);
    if let Some(session) = session {
        params.insert("s", session);
    }
    if let Some(hash) = username.and_then(hash_value) {
        params.insert("uh", hash);
    }
    if let Some(hash) = password.and_then(hash_value) {
        params.insert("ph", hash);
    }
    if username.is_some() || password.is_some() {
        let combined = format!(
            "{}:{}",
            username.unwrap_or("null"),
            password.unwrap_or("null")
        );
        if let Some(hash) = hash_value(&combined) {
            params.insert("ah", hash);
        }
    }
    params
}

/// SHA-256 over UTF-8 bytes, rendered as lowercase hex.
///
/// Empty values produce no hash, and the corresponding parameter is skipped.
pub(crate) fn hash_value(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(hex::encode(Sha256::digest(value.as_bytes())))
}

/// Session ids from the data collector are always 32 characters.
pub(crate) fn verify_session(session: &str) -> Result<()> {
    if session.len() != 32 {
        return Err(AccessError::invalid(format!(
            "invalid session id ({session}), must be 32 characters in length"
        )));
    }
    Ok(())
}

pub(crate) fn require_non_blank(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AccessError::invalid(format!("missing {field}")));
    }
    Ok(())
}

/// Timing payloads arrive as raw JSON text; a leading `[` means an array is
/// expected, anything else must parse as an object.
pub(crate) fn verify_timing(timing: &str) -> Result<()> {
    let parsed: serde_json::Value = serde_json::from_str(timing)
        .map_err(|_| AccessError::invalid("timing is not valid json"))?;
    let shape_ok = if timing.starts_with('[') {
        parsed.is_array()
    } else {
        parsed.is_object()
    };
    if !shape_ok {
        return Err(AccessError::invalid("timing is not valid json"));
    }
    Ok(())
}
