//! Track record.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::artist::Artist;
use super::common::{data_list, Extra};

/// A full track record.
///
/// Contains nested album and artist data when the API provides it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Deezer track ID.
    pub id: i64,

    /// Whether the track is readable in the player.
    #[serde(default)]
    pub readable: Option<bool>,

    /// Full title.
    #[serde(default)]
    pub title: Option<String>,

    /// Title without version.
    #[serde(default)]
    pub title_short: Option<String>,

    /// Version, e.g. "(Remastered)".
    #[serde(default)]
    pub title_version: Option<String>,

    /// International Standard Recording Code.
    #[serde(default)]
    pub isrc: Option<String>,

    /// Deezer page of the track.
    #[serde(default)]
    pub link: Option<String>,

    /// Share link.
    #[serde(default)]
    pub share: Option<String>,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u64>,

    /// Position on its disc.
    #[serde(default)]
    pub track_position: Option<u32>,

    /// Disc number.
    #[serde(default)]
    pub disk_number: Option<u32>,

    /// Popularity rank.
    #[serde(default)]
    pub rank: Option<u64>,

    /// Release date as "YYYY-MM-DD".
    #[serde(default)]
    pub release_date: Option<String>,

    /// Whether the track contains explicit lyrics.
    #[serde(default)]
    pub explicit_lyrics: Option<bool>,

    /// URL of a 30 second preview.
    #[serde(default)]
    pub preview: Option<String>,

    /// Beats per minute.
    #[serde(default)]
    pub bpm: Option<f64>,

    /// Replay gain.
    #[serde(default)]
    pub gain: Option<f64>,

    /// MD5 of the cover image.
    #[serde(default)]
    pub md5_image: Option<String>,

    /// Rank in a chart.
    #[serde(default)]
    pub position: Option<u32>,

    /// Contributing artists.
    #[serde(default, deserialize_with = "data_list")]
    pub contributors: Vec<Artist>,

    /// Main artist.
    #[serde(default)]
    pub artist: Option<Artist>,

    /// Album containing this track.
    #[serde(default)]
    pub album: Option<Album>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Track {
    /// Get the track title, or an empty string.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Get the main artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artist.as_ref().and_then(|a| a.name.as_deref())
    }

    /// Get all artist names joined by a separator.
    ///
    /// The main artist comes first, followed by contributors not already
    /// listed.
    pub fn artists_string(&self, separator: &str) -> String {
        let mut names: Vec<&str> = self.primary_artist().into_iter().collect();
        for contributor in &self.contributors {
            let name = contributor.name();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names.join(separator)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration.unwrap_or(0);
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}
