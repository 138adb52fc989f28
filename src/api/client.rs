//! Deezer catalog API client.
//!
//! Every operation is one GET request: the URL comes from [`super::url`]
//! and the response goes through [`crate::converters`].

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::url::{self as urls, SEARCH};
use crate::config::{ClientConfig, Scheme};
use crate::converters::{self, Mapped, Resource, ResourceKind};
use crate::error::Result;
use crate::models::{Album, Artist, Chart, ChartSection, Comment, Genre, Playlist, Radio, Track, User};

/// ID of the global chart.
const GLOBAL_CHART_ID: &str = "0";

/// Public Deezer API client.
///
/// # Example
///
/// ```rust,no_run
/// use deezer_catalog::{ClientConfig, DeezerClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = DeezerClient::new(ClientConfig::default().with_language("fr"))?;
///     let album = client.get_album(302127).await?;
///     println!("Album: {}", album.title());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeezerClient {
    client: Client,
    config: ClientConfig,
}

impl DeezerClient {
    /// Create a client from a configuration.
    ///
    /// Fails if the configured language is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(language) = &config.language {
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(language)?);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.config.access_token.as_deref()
    }

    /// Replace the access token used by subsequent requests.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.config.access_token = token;
    }

    /// Get the URL scheme.
    pub fn scheme(&self) -> Scheme {
        self.config.scheme
    }

    /// Get the API host.
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Get the stored application id.
    pub fn app_id(&self) -> Option<&str> {
        self.config.app_id.as_deref()
    }

    /// Get the stored application secret.
    pub fn app_secret(&self) -> Option<&str> {
        self.config.app_secret.as_deref()
    }

    /// Join `path` to the API origin.
    pub fn url(&self, path: &str) -> String {
        urls::url(&self.config, path)
    }

    /// Build the URL of an API object. See [`urls::object_url`].
    pub fn object_url(
        &self,
        object_type: &str,
        object_id: Option<&str>,
        relation: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<String> {
        urls::object_url(&self.config, object_type, object_id, relation, params)
    }

    /// Make a GET request and decode the JSON body.
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let data: Value = response.json().await?;
        converters::check_api_error(&data)?;

        Ok(data)
    }

    async fn get_object_json(
        &self,
        object_type: &str,
        object_id: Option<&str>,
        relation: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let url = self.object_url(object_type, object_id, relation, params)?;
        self.get_json(&url).await
    }

    /// Fetch one record by ID.
    async fn get_by_id<T: DeserializeOwned>(&self, kind: ResourceKind, object_id: i64) -> Result<T> {
        if let Err(e) = urls::validate_id(object_id) {
            warn!("Rejected {} id {}", kind, object_id);
            return Err(e);
        }
        let id = object_id.to_string();
        let json = self
            .get_object_json(kind.as_str(), Some(id.as_str()), None, &[])
            .await?;
        converters::decode_record(json)
    }

    /// Fetch the list behind a relation of a record.
    async fn get_relation<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        object_id: i64,
        relation: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        urls::validate_id(object_id)?;
        let id = object_id.to_string();
        let json = self
            .get_object_json(kind.as_str(), Some(id.as_str()), Some(relation), params)
            .await?;
        let items: Vec<T> = converters::decode_list(json)?;
        debug!("Fetched {} items from {}/{}/{}", items.len(), kind, id, relation);
        Ok(items)
    }

    /// Fetch any object and map it through the kind table.
    ///
    /// `kind` decides the record type; `relation` and `params` shape the URL.
    pub async fn get_resource(
        &self,
        kind: ResourceKind,
        object_id: Option<i64>,
        relation: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Mapped> {
        if let Some(object_id) = object_id {
            urls::validate_id(object_id)?;
        }
        let id = object_id.map(|id| id.to_string());
        let json = self
            .get_object_json(kind.as_str(), id.as_deref(), relation, params)
            .await?;
        converters::to_resource(kind, json)
    }

    /// Get an album by ID.
    pub async fn get_album(&self, album_id: i64) -> Result<Album> {
        self.get_by_id(ResourceKind::Album, album_id).await
    }

    /// Get an artist by ID.
    pub async fn get_artist(&self, artist_id: i64) -> Result<Artist> {
        self.get_by_id(ResourceKind::Artist, artist_id).await
    }

    /// Get a comment by ID.
    pub async fn get_comment(&self, comment_id: i64) -> Result<Comment> {
        self.get_by_id(ResourceKind::Comment, comment_id).await
    }

    /// Get a genre by ID.
    pub async fn get_genre(&self, genre_id: i64) -> Result<Genre> {
        self.get_by_id(ResourceKind::Genre, genre_id).await
    }

    /// Get a playlist by ID.
    pub async fn get_playlist(&self, playlist_id: i64) -> Result<Playlist> {
        self.get_by_id(ResourceKind::Playlist, playlist_id).await
    }

    /// Get a radio by ID.
    pub async fn get_radio(&self, radio_id: i64) -> Result<Radio> {
        self.get_by_id(ResourceKind::Radio, radio_id).await
    }

    /// Get a track by ID.
    pub async fn get_track(&self, track_id: i64) -> Result<Track> {
        self.get_by_id(ResourceKind::Track, track_id).await
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.get_by_id(ResourceKind::User, user_id).await
    }

    /// Get the user owning the access token.
    pub async fn get_current_user(&self) -> Result<User> {
        let json = self
            .get_object_json(ResourceKind::User.as_str(), Some("me"), None, &[])
            .await?;
        converters::decode_record(json)
    }

    /// Get all genres.
    pub async fn get_genres(&self) -> Result<Vec<Genre>> {
        let json = self
            .get_object_json(ResourceKind::Genre.as_str(), None, None, &[])
            .await?;
        converters::decode_list(json)
    }

    /// Get all radios.
    pub async fn get_radios(&self) -> Result<Vec<Radio>> {
        let json = self
            .get_object_json(ResourceKind::Radio.as_str(), None, None, &[])
            .await?;
        converters::decode_list(json)
    }

    /// Get the top radios.
    pub async fn get_radios_top(&self) -> Result<Vec<Radio>> {
        let json = self
            .get_object_json(ResourceKind::Radio.as_str(), Some("top"), None, &[])
            .await?;
        converters::decode_list(json)
    }

    /// Get the global chart.
    pub async fn get_chart(&self) -> Result<Chart> {
        let json = self
            .get_object_json(ResourceKind::Chart.as_str(), Some(GLOBAL_CHART_ID), None, &[])
            .await?;
        converters::decode_chart(json)
    }

    async fn get_chart_section<T: DeserializeOwned>(&self, section: ChartSection) -> Result<Vec<T>> {
        let json = self
            .get_object_json(
                ResourceKind::Chart.as_str(),
                Some(GLOBAL_CHART_ID),
                Some(section.relation()),
                &[],
            )
            .await?;
        converters::decode_list(json)
    }

    /// Get the top tracks of the global chart.
    pub async fn get_chart_tracks(&self) -> Result<Vec<Track>> {
        self.get_chart_section(ChartSection::Tracks).await
    }

    /// Get the top albums of the global chart.
    pub async fn get_chart_albums(&self) -> Result<Vec<Album>> {
        self.get_chart_section(ChartSection::Albums).await
    }

    /// Get the top artists of the global chart.
    pub async fn get_chart_artists(&self) -> Result<Vec<Artist>> {
        self.get_chart_section(ChartSection::Artists).await
    }

    /// Get the top playlists of the global chart.
    pub async fn get_chart_playlists(&self) -> Result<Vec<Playlist>> {
        self.get_chart_section(ChartSection::Playlists).await
    }

    /// Get the tracks of an album.
    pub async fn get_album_tracks(&self, album_id: i64) -> Result<Vec<Track>> {
        self.get_relation(ResourceKind::Album, album_id, "tracks", &[])
            .await
    }

    /// Get an artist's top tracks.
    pub async fn get_artist_top(&self, artist_id: i64, limit: u32) -> Result<Vec<Track>> {
        let limit = limit.to_string();
        self.get_relation(ResourceKind::Artist, artist_id, "top", &[("limit", limit.as_str())])
            .await
    }

    /// Get an artist's albums.
    pub async fn get_artist_albums(&self, artist_id: i64) -> Result<Vec<Album>> {
        self.get_relation(ResourceKind::Artist, artist_id, "albums", &[])
            .await
    }

    /// Get artists related to an artist.
    pub async fn get_artist_related(&self, artist_id: i64) -> Result<Vec<Artist>> {
        self.get_relation(ResourceKind::Artist, artist_id, "related", &[])
            .await
    }

    /// Get the tracks of a playlist.
    pub async fn get_playlist_tracks(&self, playlist_id: i64) -> Result<Vec<Track>> {
        self.get_relation(ResourceKind::Playlist, playlist_id, "tracks", &[])
            .await
    }

    /// Get the tracks of a radio.
    pub async fn get_radio_tracks(&self, radio_id: i64) -> Result<Vec<Track>> {
        self.get_relation(ResourceKind::Radio, radio_id, "tracks", &[])
            .await
    }

    /// Get the artists of a genre.
    pub async fn get_genre_artists(&self, genre_id: i64) -> Result<Vec<Artist>> {
        self.get_relation(ResourceKind::Genre, genre_id, "artists", &[])
            .await
    }

    /// Get the playlists of a user.
    pub async fn get_user_playlists(&self, user_id: i64) -> Result<Vec<Playlist>> {
        self.get_relation(ResourceKind::User, user_id, "playlists", &[])
            .await
    }

    /// Search the catalog.
    ///
    /// `relation` narrows the search to one kind (`album`, `artist`, ...)
    /// and decides the kind of the returned records; without it the API
    /// searches tracks.
    pub async fn search(
        &self,
        query: &str,
        relation: Option<&str>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Resource>> {
        let relation = relation.filter(|r| !r.is_empty());
        let kind = match relation {
            Some(relation) => relation.parse::<ResourceKind>()?,
            None => ResourceKind::Track,
        };

        let index = index.map(|i| i.to_string());
        let limit = limit.map(|l| l.to_string());
        let mut params = vec![("q", query)];
        if let Some(index) = index.as_deref() {
            params.push(("index", index));
        }
        if let Some(limit) = limit.as_deref() {
            params.push(("limit", limit));
        }

        let json = self.get_object_json(SEARCH, None, relation, &params).await?;
        let results = converters::to_resource(kind, json)?.into_vec();
        debug!("Search {:?} returned {} {} records", query, results.len(), kind);
        Ok(results)
    }

    /// Search with field filters, e.g. `[("artist", "Lou Doillon")]`.
    ///
    /// Terms are combined in the given order into `field:"value"` pairs.
    pub async fn advanced_search(
        &self,
        terms: &[(&str, &str)],
        relation: Option<&str>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Resource>> {
        let query = urls::advanced_query(terms);
        self.search(&query, relation, index, limit).await
    }
}

impl Default for DeezerClient {
    fn default() -> Self {
        let config = ClientConfig::default();
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_default();
        Self { client, config }
    }
}
