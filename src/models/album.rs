//! Album record.
//!
//! Albums nest their artist, contributors, genres and tracks; each nested
//! object decodes into its own record type.

use serde::{Deserialize, Serialize};

use super::artist::Artist;
use super::common::{data_list, sized_images, Extra, Image, ReleaseDate};
use super::genre::Genre;
use super::track::Track;

/// A full album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Deezer album ID.
    pub id: i64,

    /// Album title.
    #[serde(default)]
    pub title: Option<String>,

    /// Universal Product Code.
    #[serde(default)]
    pub upc: Option<String>,

    /// Deezer page of the album.
    #[serde(default)]
    pub link: Option<String>,

    /// Share link.
    #[serde(default)]
    pub share: Option<String>,

    /// Cover URL (no size suffix).
    #[serde(default)]
    pub cover: Option<String>,

    /// 56x56 cover.
    #[serde(default)]
    pub cover_small: Option<String>,

    /// 250x250 cover.
    #[serde(default)]
    pub cover_medium: Option<String>,

    /// 500x500 cover.
    #[serde(default)]
    pub cover_big: Option<String>,

    /// 1000x1000 cover.
    #[serde(default)]
    pub cover_xl: Option<String>,

    /// MD5 of the cover image.
    #[serde(default)]
    pub md5_image: Option<String>,

    /// Main genre ID.
    #[serde(default)]
    pub genre_id: Option<i64>,

    /// Genres of the album.
    #[serde(default, deserialize_with = "data_list")]
    pub genres: Vec<Genre>,

    /// Record label.
    #[serde(default)]
    pub label: Option<String>,

    /// Number of tracks.
    #[serde(default)]
    pub nb_tracks: Option<u32>,

    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u64>,

    /// Number of fans.
    #[serde(default)]
    pub fans: Option<u64>,

    /// Release date as "YYYY-MM-DD".
    #[serde(default)]
    pub release_date: Option<String>,

    /// Record type: "album", "single", "ep" or "compile".
    #[serde(default)]
    pub record_type: Option<String>,

    /// Whether the album is available for streaming.
    #[serde(default)]
    pub available: Option<bool>,

    /// API URL of the track list.
    #[serde(default)]
    pub tracklist: Option<String>,

    /// Whether the album contains explicit lyrics.
    #[serde(default)]
    pub explicit_lyrics: Option<bool>,

    /// Rank in a chart.
    #[serde(default)]
    pub position: Option<u32>,

    /// Contributing artists.
    #[serde(default, deserialize_with = "data_list")]
    pub contributors: Vec<Artist>,

    /// Main artist.
    #[serde(default)]
    pub artist: Option<Artist>,

    /// Tracks in the album.
    #[serde(default, deserialize_with = "data_list")]
    pub tracks: Vec<Track>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Album {
    /// Get the album title, or an empty string.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Get the primary artist name.
    ///
    /// Prefers a contributor with the "Main" role, then the `artist` field.
    pub fn primary_artist(&self) -> Option<&str> {
        self.contributors
            .iter()
            .find(|c| c.role.as_deref() == Some("Main"))
            .or(self.artist.as_ref())
            .and_then(|a| a.name.as_deref())
    }

    /// Get the parsed release date.
    pub fn release(&self) -> ReleaseDate {
        ReleaseDate::parse(self.release_date.as_deref().unwrap_or(""))
    }

    /// Get the available covers, smallest first.
    pub fn images(&self) -> Vec<Image> {
        sized_images([
            self.cover_small.as_ref(),
            self.cover_medium.as_ref(),
            self.cover_big.as_ref(),
            self.cover_xl.as_ref(),
        ])
    }

    /// Get total duration of the listed tracks in seconds.
    pub fn tracks_duration(&self) -> u64 {
        self.tracks.iter().filter_map(|t| t.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_album_nested_records() {
        let album: Album = serde_json::from_value(json!({
            "id": 302127,
            "title": "Discovery",
            "release_date": "2001-03-07",
            "record_type": "album",
            "genres": {"data": [{"id": 113, "name": "Dance", "type": "genre"}]},
            "artist": {"id": 27, "name": "Daft Punk", "type": "artist"},
            "tracks": {"data": [
                {"id": 3135553, "title": "One More Time", "duration": 320},
                {"id": 3135554, "title": "Aerodynamic", "duration": 212}
            ]},
            "type": "album"
        }))
        .unwrap();

        assert_eq!(album.title(), "Discovery");
        assert_eq!(album.genres[0].name.as_deref(), Some("Dance"));
        assert_eq!(album.primary_artist(), Some("Daft Punk"));
        assert_eq!(album.tracks.len(), 2);
        assert_eq!(album.tracks[1].title(), "Aerodynamic");
        assert_eq!(album.tracks_duration(), 532);
        assert_eq!(album.release().year, 2001);
    }

    #[test]
    fn test_album_missing_optionals() {
        let album: Album = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(album.title.is_none());
        assert!(album.tracks.is_empty());
        assert!(album.artist.is_none());
        assert!(album.images().is_empty());
    }

    #[test]
    fn test_album_main_contributor_wins() {
        let album: Album = serde_json::from_value(json!({
            "id": 1,
            "artist": {"id": 2, "name": "Artist"},
            "contributors": [
                {"id": 3, "name": "Featured", "role": "Featured"},
                {"id": 4, "name": "Lead", "role": "Main"}
            ]
        }))
        .unwrap();
        assert_eq!(album.primary_artist(), Some("Lead"));
    }
}
