//! Chart record.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::artist::Artist;
use super::common::{data_list, Extra};
use super::playlist::Playlist;
use super::track::Track;

/// Top tracks, albums, artists and playlists of a chart.
///
/// Each sequence keeps the order of the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    /// Top tracks.
    #[serde(default, deserialize_with = "data_list")]
    pub tracks: Vec<Track>,

    /// Top albums.
    #[serde(default, deserialize_with = "data_list")]
    pub albums: Vec<Album>,

    /// Top artists.
    #[serde(default, deserialize_with = "data_list")]
    pub artists: Vec<Artist>,

    /// Top playlists.
    #[serde(default, deserialize_with = "data_list")]
    pub playlists: Vec<Playlist>,

    /// Fields without a dedicated struct field, e.g. `podcasts`.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Sub-lists of a chart that can be fetched on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSection {
    /// `chart/0/tracks`.
    Tracks,
    /// `chart/0/albums`.
    Albums,
    /// `chart/0/artists`.
    Artists,
    /// `chart/0/playlists`.
    Playlists,
}

impl ChartSection {
    /// Get the relation path segment.
    pub fn relation(&self) -> &'static str {
        match self {
            ChartSection::Tracks => "tracks",
            ChartSection::Albums => "albums",
            ChartSection::Artists => "artists",
            ChartSection::Playlists => "playlists",
        }
    }
}
