//! Data models for Deezer API responses.
//!
//! Each record kind has a struct of known fields plus an `extra` map that
//! keeps every field the struct does not name.

pub mod album;
pub mod artist;
pub mod chart;
pub mod comment;
pub mod common;
pub mod genre;
pub mod playlist;
pub mod radio;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use chart::{Chart, ChartSection};
pub use comment::Comment;
pub use common::{Extra, Image, ReleaseDate};
pub use genre::Genre;
pub use playlist::Playlist;
pub use radio::Radio;
pub use track::Track;
pub use user::User;
