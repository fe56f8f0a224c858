//! lens-api — shared protocol types, endpoint policy and the HTTP client
//! for the scamlens analysis service.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod platform;
pub mod protocol;
