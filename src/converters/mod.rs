//! JSON to model converters.
//!
//! This module maps raw Deezer API JSON onto the typed records in
//! [`crate::models`]. The set of record kinds is closed: every kind name
//! resolves through [`KIND_NAMES`] and every kind decodes through one arm
//! of [`decode_resource`].

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{DeezerError, Result};
use crate::models::{Album, Artist, Chart, Comment, Genre, Playlist, Radio, Track, User};

/// API error code for rate limiting.
const ERROR_CODE_QUOTA: i64 = 4;

/// API error code for a missing object.
const ERROR_CODE_NO_DATA: i64 = 800;

/// Kinds of records the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Album,
    Artist,
    Chart,
    Comment,
    Genre,
    Playlist,
    Radio,
    Track,
    User,
}

/// Name of each kind as used in URLs and in the `type` field of records.
pub const KIND_NAMES: [(ResourceKind, &str); 9] = [
    (ResourceKind::Album, "album"),
    (ResourceKind::Artist, "artist"),
    (ResourceKind::Chart, "chart"),
    (ResourceKind::Comment, "comment"),
    (ResourceKind::Genre, "genre"),
    (ResourceKind::Playlist, "playlist"),
    (ResourceKind::Radio, "radio"),
    (ResourceKind::Track, "track"),
    (ResourceKind::User, "user"),
];

impl ResourceKind {
    /// Get the kind name used in URLs.
    pub fn as_str(&self) -> &'static str {
        KIND_NAMES
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DeezerError;

    fn from_str(s: &str) -> Result<Self> {
        KIND_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(kind, _)| *kind)
            .ok_or_else(|| DeezerError::InvalidObjectType(s.to_string()))
    }
}

/// A decoded record of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Album(Album),
    Artist(Artist),
    Chart(Chart),
    Comment(Comment),
    Genre(Genre),
    Playlist(Playlist),
    Radio(Radio),
    Track(Track),
    User(User),
}

impl Resource {
    /// Get the kind of this record.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Album(_) => ResourceKind::Album,
            Resource::Artist(_) => ResourceKind::Artist,
            Resource::Chart(_) => ResourceKind::Chart,
            Resource::Comment(_) => ResourceKind::Comment,
            Resource::Genre(_) => ResourceKind::Genre,
            Resource::Playlist(_) => ResourceKind::Playlist,
            Resource::Radio(_) => ResourceKind::Radio,
            Resource::Track(_) => ResourceKind::Track,
            Resource::User(_) => ResourceKind::User,
        }
    }

    /// Get the record ID. Charts have none.
    pub fn id(&self) -> Option<i64> {
        match self {
            Resource::Album(a) => Some(a.id),
            Resource::Artist(a) => Some(a.id),
            Resource::Chart(_) => None,
            Resource::Comment(c) => Some(c.id),
            Resource::Genre(g) => Some(g.id),
            Resource::Playlist(p) => Some(p.id),
            Resource::Radio(r) => Some(r.id),
            Resource::Track(t) => Some(t.id),
            Resource::User(u) => Some(u.id),
        }
    }

    /// Get the title or name used to display the record.
    pub fn label(&self) -> Option<&str> {
        match self {
            Resource::Album(a) => a.title.as_deref(),
            Resource::Artist(a) => a.name.as_deref(),
            Resource::Chart(_) => None,
            Resource::Comment(c) => c.text.as_deref(),
            Resource::Genre(g) => g.name.as_deref(),
            Resource::Playlist(p) => p.title.as_deref(),
            Resource::Radio(r) => r.title.as_deref(),
            Resource::Track(t) => t.title.as_deref(),
            Resource::User(u) => u.name.as_deref(),
        }
    }

    pub fn as_album(&self) -> Option<&Album> {
        match self {
            Resource::Album(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_artist(&self) -> Option<&Artist> {
        match self {
            Resource::Artist(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_chart(&self) -> Option<&Chart> {
        match self {
            Resource::Chart(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Resource::Comment(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_genre(&self) -> Option<&Genre> {
        match self {
            Resource::Genre(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_playlist(&self) -> Option<&Playlist> {
        match self {
            Resource::Playlist(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_radio(&self) -> Option<&Radio> {
        match self {
            Resource::Radio(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Resource::Track(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Resource::User(u) => Some(u),
            _ => None,
        }
    }
}

/// Result of mapping a payload: one record or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mapped {
    One(Resource),
    Many(Vec<Resource>),
}

impl Mapped {
    /// Flatten into a list; a single record becomes a one-element list.
    pub fn into_vec(self) -> Vec<Resource> {
        match self {
            Mapped::One(resource) => vec![resource],
            Mapped::Many(resources) => resources,
        }
    }
}

/// Fail with the matching error if `json` is an API error payload.
///
/// The API reports errors as `{"error": {"type", "message", "code"}}`
/// with a 200 status.
pub fn check_api_error(json: &Value) -> Result<()> {
    let Some(error) = json.get("error") else {
        return Ok(());
    };

    let kind = error
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("Exception")
        .to_string();
    let message = error
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown error")
        .to_string();
    let code = error.get("code").and_then(|c| c.as_i64());

    error!("Deezer API error: {} ({:?})", message, code);

    match code {
        Some(ERROR_CODE_QUOTA) => Err(DeezerError::QuotaExceeded),
        Some(ERROR_CODE_NO_DATA) => Err(DeezerError::NoDataApi(message)),
        _ => Err(DeezerError::ApiError {
            kind,
            message,
            code,
        }),
    }
}

fn shape_name(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Sub-lists of which a chart object must carry at least one.
const CHART_SECTIONS: [&str; 4] = ["tracks", "albums", "artists", "playlists"];

/// Get the kind named by the `type` field of an object, if it names one.
fn own_kind(json: &Value) -> Option<ResourceKind> {
    json.get("type")
        .and_then(|t| t.as_str())
        .and_then(|t| t.parse().ok())
}

/// Decode a global chart object.
///
/// Fails unless the object carries at least one chart section.
pub fn decode_chart(json: Value) -> Result<Chart> {
    check_api_error(&json)?;
    if !CHART_SECTIONS.iter().any(|section| json.get(section).is_some()) {
        return Err(DeezerError::UnexpectedShape(format!(
            "expected chart object with one of {}, got {}",
            CHART_SECTIONS.join("/"),
            shape_name(&json)
        )));
    }
    Ok(serde_json::from_value(json)?)
}

/// Decode one JSON object as a record of `kind`.
pub fn decode_resource(kind: ResourceKind, json: Value) -> Result<Resource> {
    if !json.is_object() {
        return Err(DeezerError::UnexpectedShape(format!(
            "expected {} object, got {}",
            kind,
            shape_name(&json)
        )));
    }

    Ok(match kind {
        ResourceKind::Album => Resource::Album(serde_json::from_value(json)?),
        ResourceKind::Artist => Resource::Artist(serde_json::from_value(json)?),
        ResourceKind::Chart => Resource::Chart(decode_chart(json)?),
        ResourceKind::Comment => Resource::Comment(serde_json::from_value(json)?),
        ResourceKind::Genre => Resource::Genre(serde_json::from_value(json)?),
        ResourceKind::Playlist => Resource::Playlist(serde_json::from_value(json)?),
        ResourceKind::Radio => Resource::Radio(serde_json::from_value(json)?),
        ResourceKind::Track => Resource::Track(serde_json::from_value(json)?),
        ResourceKind::User => Resource::User(serde_json::from_value(json)?),
    })
}

/// Decode an object by its own `type` field, falling back to `kind`.
fn decode_item(kind: ResourceKind, json: Value) -> Result<Resource> {
    match own_kind(&json) {
        Some(own) if own != kind => {
            debug!("Decoding {} object requested as {}", own, kind);
            decode_resource(own, json)
        }
        _ => decode_resource(kind, json),
    }
}

fn decode_many(kind: ResourceKind, items: Vec<Value>) -> Result<Mapped> {
    let resources = items
        .into_iter()
        .map(|item| decode_item(kind, item))
        .collect::<Result<Vec<_>>>()?;
    debug!("Decoded {} {} records", resources.len(), kind);
    Ok(Mapped::Many(resources))
}

/// Map a decoded payload onto records of `kind`.
///
/// Arrays and paged `{"data": [...]}` objects yield [`Mapped::Many`] in
/// source order; any other object yields [`Mapped::One`]. An object whose
/// `type` field names a kind is decoded as that kind; `kind` covers objects
/// without one.
pub fn to_resource(kind: ResourceKind, json: Value) -> Result<Mapped> {
    check_api_error(&json)?;

    match json {
        Value::Array(items) => decode_many(kind, items),
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => decode_many(kind, items),
            Some(data) => {
                object.insert("data".to_string(), data);
                decode_item(kind, Value::Object(object)).map(Mapped::One)
            }
            None => decode_item(kind, Value::Object(object)).map(Mapped::One),
        },
        other => Err(DeezerError::UnexpectedShape(format!(
            "expected object or array for {}, got {}",
            kind,
            shape_name(&other)
        ))),
    }
}

/// Decode an object by the kind named in its own `type` field.
pub fn resource_from_typed(json: &Value) -> Result<Resource> {
    let kind = json
        .get("type")
        .and_then(|t| t.as_str())
        .ok_or_else(|| DeezerError::UnexpectedShape("object without a type field".to_string()))?
        .parse::<ResourceKind>()?;
    decode_resource(kind, json.clone())
}

/// Decode one record of a statically known type.
pub fn decode_record<T: DeserializeOwned>(json: Value) -> Result<T> {
    check_api_error(&json)?;
    if !json.is_object() {
        return Err(DeezerError::UnexpectedShape(format!(
            "expected object, got {}",
            shape_name(&json)
        )));
    }
    Ok(serde_json::from_value(json)?)
}

/// Decode a list of records from a bare array or a paged `data` wrapper.
pub fn decode_list<T: DeserializeOwned>(json: Value) -> Result<Vec<T>> {
    check_api_error(&json)?;
    let items = match json {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(DeezerError::UnexpectedShape(
                    "expected a data list".to_string(),
                ))
            }
        },
        other => {
            return Err(DeezerError::UnexpectedShape(format!(
                "expected array, got {}",
                shape_name(&other)
            )))
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(DeezerError::from))
        .collect()
}
