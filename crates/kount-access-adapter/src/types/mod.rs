/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums and builders for API communication
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod data_set;
pub mod enums;

pub use data_set::*;
pub use enums::*;
