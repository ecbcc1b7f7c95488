//! FPL Draft API access and payload types.

pub mod http;
pub mod types;
