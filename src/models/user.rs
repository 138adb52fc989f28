//! User record.

use serde::{Deserialize, Serialize};

use super::common::{sized_images, Extra, Image};

/// A Deezer user. Private fields only appear for the token owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Deezer user ID.
    pub id: i64,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Last name.
    #[serde(default)]
    pub lastname: Option<String>,

    /// First name.
    #[serde(default)]
    pub firstname: Option<String>,

    /// E-mail address.
    #[serde(default)]
    pub email: Option<String>,

    /// Subscription status.
    #[serde(default)]
    pub status: Option<i64>,

    /// Birthday as "YYYY-MM-DD".
    #[serde(default)]
    pub birthday: Option<String>,

    /// Sign-up date.
    #[serde(default)]
    pub inscription_date: Option<String>,

    /// Gender code.
    #[serde(default)]
    pub gender: Option<String>,

    /// Profile page.
    #[serde(default)]
    pub link: Option<String>,

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

    /// Country code.
    #[serde(default)]
    pub country: Option<String>,

    /// Language code.
    #[serde(default)]
    pub lang: Option<String>,

    /// Whether this is a kid account.
    #[serde(default)]
    pub is_kid: Option<bool>,

    /// API URL of the user's flow.
    #[serde(default)]
    pub tracklist: Option<String>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    /// Get the display name, or an empty string.
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
}
