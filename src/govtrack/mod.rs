//! GovTrack v2 API access.

mod client;
mod types;

pub use client::{ClientConfig, GovTrackClient, DEFAULT_BASE_URL};
