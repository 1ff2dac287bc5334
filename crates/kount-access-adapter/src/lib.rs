/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Access adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AccessClient,
    AccessError,
    ClientConfig,
    Result,
    DEFAULT_API_VERSION,
};

// Re-export all types
pub use types::*;
