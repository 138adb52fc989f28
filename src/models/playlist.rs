//! Playlist record.

use serde::{Deserialize, Serialize};

use super::common::{data_list, sized_images, Extra, Image};
use super::track::Track;
use super::user::User;

/// A playlist and, when fetched directly, its tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Deezer playlist ID.
    pub id: i64,

    /// Playlist title.
    #[serde(default)]
    pub title: Option<String>,

    /// Playlist description.
    #[serde(default)]
    pub description: Option<String>,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u64>,

    /// Whether the playlist is public.
    #[serde(default)]
    pub public: Option<bool>,

    /// Whether this is the owner's "loved tracks" playlist.
    #[serde(default)]
    pub is_loved_track: Option<bool>,

    /// Whether the playlist is collaborative.
    #[serde(default)]
    pub collaborative: Option<bool>,

    /// Number of tracks.
    #[serde(default)]
    pub nb_tracks: Option<u32>,

    /// Number of fans.
    #[serde(default)]
    pub fans: Option<u64>,

    /// Deezer page of the playlist.
    #[serde(default)]
    pub link: Option<String>,

    /// Share link.
    #[serde(default)]
    pub share: Option<String>,

    /// Picture URL (no size suffix).
    #[serde(default)]
    pub picture: Option<String>,

    /// 56x56 picture.
    #[serde(default)]
    pub picture_small: Option<String>,

    /// 250x250 picture.
    #[serde(default)]
    pub picture_medium: Option<String>,

    /// 500x500 picture.
    #[serde(default)]
    pub picture_big: Option<String>,

    /// 1000x1000 picture.
    #[serde(default)]
    pub picture_xl: Option<String>,

    /// Checksum of the track list.
    #[serde(default)]
    pub checksum: Option<String>,

    /// API URL of the track list.
    #[serde(default)]
    pub tracklist: Option<String>,

    /// Rank in a chart.
    #[serde(default)]
    pub position: Option<u32>,

    /// Creator, as returned by `playlist/{id}`.
    #[serde(default)]
    pub creator: Option<User>,

    /// Owner, as returned in chart and search listings.
    #[serde(default)]
    pub user: Option<User>,

    /// Tracks in the playlist.
    #[serde(default, deserialize_with = "data_list")]
    pub tracks: Vec<Track>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Playlist {
    /// Get the playlist title, or an empty string.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Get the owner, whichever field the API used.
    pub fn owner(&self) -> Option<&User> {
        self.creator.as_ref().or(self.user.as_ref())
    }

    /// Get the available pictures, smallest first.
    ///
    /// Falls back to the first track's album covers.
    pub fn images(&self) -> Vec<Image> {
        let images = sized_images([
            self.picture_small.as_ref(),
            self.picture_medium.as_ref(),
            self.picture_big.as_ref(),
            self.picture_xl.as_ref(),
        ]);
        if !images.is_empty() {
            return images;
        }
        self.tracks
            .first()
            .and_then(|t| t.album.as_ref())
            .map(|a| a.images())
            .unwrap_or_default()
    }
}
