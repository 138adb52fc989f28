//! API access for the Deezer catalog.
//!
//! - [`url`]: URL construction (object paths, query encoding, access token)
//! - [`client`]: [`DeezerClient`], the HTTP client built on top of it

pub mod client;
pub mod url;

pub use client::DeezerClient;
