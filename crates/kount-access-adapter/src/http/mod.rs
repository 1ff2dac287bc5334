/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and parsed API documents
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod behavio;
pub mod client;
pub mod device;
pub mod error;
pub mod info;
mod params;
pub mod trust;
pub mod velocity;

pub use error::{AccessError, Result};

pub use client::{AccessClient, ClientConfig, DEFAULT_API_VERSION};
