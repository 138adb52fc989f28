//! Comment record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Extra;
use super::user::User;
use crate::converters::{resource_from_typed, Resource};
use crate::error::Result;

/// A user comment on an album, artist or playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Deezer comment ID.
    pub id: i64,

    /// Comment text.
    #[serde(default)]
    pub text: Option<String>,

    /// Unix timestamp of the comment.
    #[serde(default)]
    pub date: Option<i64>,

    /// Author of the comment.
    #[serde(default)]
    pub author: Option<User>,

    /// Commented object, kept raw. Its kind is given by its `type` field;
    /// see [`Comment::object_resource`].
    #[serde(default)]
    pub object: Option<Value>,

    /// Fields without a dedicated struct field.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Comment {
    /// Decode the commented object by its `type` field.
    pub fn object_resource(&self) -> Option<Result<Resource>> {
        self.object.as_ref().map(resource_from_typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ResourceKind;
    use crate::error::DeezerError;
    use serde_json::json;

    #[test]
    fn test_comment_object_by_type() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 2772704,
            "text": "Great album",
            "author": {"id": 10, "name": "someone"},
            "object": {"id": 302127, "title": "Discovery", "type": "album"}
        }))
        .unwrap();

        let object = comment.object_resource().unwrap().unwrap();
        assert_eq!(object.kind(), ResourceKind::Album);
        assert_eq!(object.as_album().unwrap().id, 302127);
        assert_eq!(comment.author.unwrap().name(), "someone");
    }

    #[test]
    fn test_comment_object_without_type() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 1,
            "object": {"id": 27}
        }))
        .unwrap();
        assert!(matches!(
            comment.object_resource(),
            Some(Err(DeezerError::UnexpectedShape(_)))
        ));

        let bare: Comment = serde_json::from_value(json!({"id": 2})).unwrap();
        assert!(bare.object_resource().is_none());
    }
}
