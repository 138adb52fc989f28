//! Genre record.

use serde::{Deserialize, Serialize};

use super::common::{sized_images, Extra, Image};

/// A music genre. The name is localized by `Accept-Language`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    /// Deezer genre ID. `0` is "All".
    pub id: i64,

    /// Localized genre name.
    #[serde(default)]
    pub name: Option<String>,

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

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Genre {
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
