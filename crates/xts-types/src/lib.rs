#![forbid(unsafe_code)]
#![doc = "Common types, error codes, and constants for xts-rs."]

pub mod error;

pub use error::*;
