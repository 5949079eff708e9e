//! Outbound HTTP integrations.

mod shlink_client;

pub use shlink_client::{API_KEY_HEADER, ShlinkHttpClient};
