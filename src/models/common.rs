//! Common types shared across all models.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields of a record that have no dedicated struct field.
pub type Extra = Map<String, Value>;

/// Release date structure.
///
/// Not all fields may be available; year is always present when known,
/// but month and day may be unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReleaseDate {
    /// Year of release.
    pub year: i32,

    /// Month of release (1-12), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,

    /// Day of release (1-31), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
}

impl ReleaseDate {
    /// Parse a date string in "YYYY-MM-DD" format.
    pub fn parse(date_str: &str) -> Self {
        if date_str.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = date_str.split('-').collect();

        Self {
            year: parts.first().and_then(|s| s.parse().ok()).unwrap_or(0),
            month: parts.get(1).and_then(|s| s.parse().ok()),
            day: parts.get(2).and_then(|s| s.parse().ok()),
        }
    }
}

/// Image with URL and dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels.
    pub height: u32,

    /// Width in pixels.
    pub width: u32,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, height: u32, width: u32) -> Self {
        Self {
            url: url.into(),
            height,
            width,
        }
    }
}

/// Square edge lengths of the `_small`, `_medium`, `_big` and `_xl` variants.
const IMAGE_SIZES: [u32; 4] = [56, 250, 500, 1000];

/// Collect the present image variants, smallest first.
pub(crate) fn sized_images(urls: [Option<&String>; 4]) -> Vec<Image> {
    urls.into_iter()
        .zip(IMAGE_SIZES)
        .filter_map(|(url, size)| url.map(|u| Image::new(u.as_str(), size, size)))
        .collect()
}

/// Either a bare array or the API's paged `{"data": [...]}` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrPage<T> {
    List(Vec<T>),
    Page { data: Vec<T> },
}

/// Deserialize a list field that may come paged or bare; `null` is empty.
pub(crate) fn data_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let list = Option::<ListOrPage<T>>::deserialize(deserializer)?;
    Ok(match list {
        Some(ListOrPage::List(items)) | Some(ListOrPage::Page { data: items }) => items,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "data_list")]
        items: Vec<u32>,
    }

    #[test]
    fn test_parse_release_date_full() {
        let date = ReleaseDate::parse("2023-05-15");
        assert_eq!(date.year, 2023);
        assert_eq!(date.month, Some(5));
        assert_eq!(date.day, Some(15));
    }

    #[test]
    fn test_parse_release_date_year_only() {
        let date = ReleaseDate::parse("2020");
        assert_eq!(date.year, 2020);
        assert_eq!(date.month, None);
        assert_eq!(date.day, None);
    }

    #[test]
    fn test_parse_release_date_empty() {
        let date = ReleaseDate::parse("");
        assert_eq!(date.year, 0);
    }

    #[test]
    fn test_sized_images_skips_missing() {
        let small = "s".to_string();
        let xl = "x".to_string();
        let images = sized_images([Some(&small), None, None, Some(&xl)]);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].height, 56);
        assert_eq!(images[1].width, 1000);
    }

    #[test]
    fn test_data_list_accepts_both_shapes() {
        let bare: Holder = serde_json::from_value(json!({"items": [1, 2]})).unwrap();
        assert_eq!(bare.items, vec![1, 2]);

        let paged: Holder =
            serde_json::from_value(json!({"items": {"data": [3], "total": 1}})).unwrap();
        assert_eq!(paged.items, vec![3]);

        let missing: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(missing.items.is_empty());

        let null: Holder = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(null.items.is_empty());
    }
}
