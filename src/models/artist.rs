//! Artist record.

use serde::{Deserialize, Serialize};

use super::common::{sized_images, Extra, Image};

/// An artist, either fetched directly or nested in another record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Deezer artist ID.
    pub id: i64,

    /// Artist name.
    #[serde(default)]
    pub name: Option<String>,

    /// Deezer page of the artist.
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

    /// Number of albums.
    #[serde(default)]
    pub nb_album: Option<u64>,

    /// Number of fans.
    #[serde(default)]
    pub nb_fan: Option<u64>,

    /// Whether a smart radio exists for the artist.
    #[serde(default)]
    pub radio: Option<bool>,

    /// API URL of the artist's top tracks.
    #[serde(default)]
    pub tracklist: Option<String>,

    /// Role in a contributor list, e.g. "Main".
    #[serde(default)]
    pub role: Option<String>,

    /// Rank in a chart.
    #[serde(default)]
    pub position: Option<u32>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Artist {
    /// Get the artist name, or an empty string.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Get the available pictures, smallest first.
    pub fn images(&self) -> Vec<Image> {
        sized_images([
            self.picture_small.as_ref(),
            self.picture_medium.as_ref(),
            self.picture_big.as_ref(),
            self.picture_xl.as_ref(),
        ])
    }

    /// Get the largest picture available.
    pub fn largest_image(&self) -> Option<Image> {
        self.images().into_iter().max_by_key(|img| img.width * img.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artist_from_json() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 27,
            "name": "Daft Punk",
            "picture_small": "https://e-cdns-images.dzcdn.net/images/artist/small.jpg",
            "picture_xl": "https://e-cdns-images.dzcdn.net/images/artist/xl.jpg",
            "nb_fan": 4000000,
            "radio": true,
            "type": "artist"
        }))
        .unwrap();

        assert_eq!(artist.id, 27);
        assert_eq!(artist.name(), "Daft Punk");
        assert_eq!(artist.radio, Some(true));
        assert_eq!(artist.extra.get("type"), Some(&json!("artist")));
        assert_eq!(artist.largest_image().unwrap().width, 1000);
    }

    #[test]
    fn test_artist_requires_id() {
        let result = serde_json::from_value::<Artist>(json!({"name": "Nobody"}));
        assert!(result.is_err());
    }
}
