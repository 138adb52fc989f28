//! # Deezer Catalog
//!
//! A Rust client for the public Deezer catalog API (`api.deezer.com`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deezer_catalog::{ClientConfig, DeezerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeezerClient::new(ClientConfig::default())?;
//!
//!     // Fetch a record by id
//!     let track = client.get_track(3135556).await?;
//!     println!("Track: {} by {}", track.title(), track.artists_string(", "));
//!
//!     // The global chart holds four typed lists
//!     let chart = client.get_chart().await?;
//!     println!("Top album: {}", chart.albums[0].title());
//!
//!     // Field-filtered search
//!     let results = client
//!         .advanced_search(&[("artist", "Lou Doillon"), ("album", "Lay Low")], None, None, None)
//!         .await?;
//!     println!("{} results", results.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - [`api::url`] - builds `scheme://host/type[/id][/relation]?query` URLs
//! - [`converters`] - maps JSON onto records through the [`ResourceKind`] table
//! - [`models`] - one record struct per kind, unknown fields kept in `extra`

pub mod api;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;

pub use api::DeezerClient;
pub use config::{ClientConfig, Scheme};
pub use converters::{to_resource, Mapped, Resource, ResourceKind};
pub use error::{DeezerError, Result};
pub use models::{Album, Artist, Chart, ChartSection, Comment, Genre, Playlist, Radio, Track, User};
