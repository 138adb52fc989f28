//! Radio record.

use serde::{Deserialize, Serialize};

use super::common::{sized_images, Extra, Image};

/// A Deezer radio (mix).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Radio {
    /// Deezer radio ID.
    pub id: i64,

    /// Radio title.
    #[serde(default)]
    pub title: Option<String>,

    /// Radio description.
    #[serde(default)]
    pub description: Option<String>,

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

    /// API URL of the radio's tracks.
    #[serde(default)]
    pub tracklist: Option<String>,

    /// MD5 of the picture.
    #[serde(default)]
    pub md5_image: Option<String>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Radio {
    /// Get the radio title, or an empty string.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
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
}
