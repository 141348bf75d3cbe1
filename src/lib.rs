//! Async client for the Wargaming World of Tanks statistics API.
//!
//! The library resolves account and clan names to their numeric
//! identifiers and fetches enveloped statistics records (profile info,
//! per-vehicle stats, achievements, clan info) from the regional
//! `api.worldoftanks.*` hosts.

pub mod api;
pub mod config;
pub mod types;

pub use api::WotApiClient;
pub use config::{ClientConfig, Region};
pub use types::{Envelope, WotApiError, WotApiResponse};
