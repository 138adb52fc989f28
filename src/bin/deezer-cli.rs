use clap::{Parser, Subcommand, ValueEnum};
use deezer_catalog::{ChartSection, ClientConfig, DeezerClient, DeezerError, ResourceKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deezer-cli")]
#[command(about = "CLI for the Deezer catalog API", long_about = None)]
struct Cli {
    /// Access token appended to every request
    #[arg(long, env = "DEEZER_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Accept-Language header, e.g. "fr" or "ja"
    #[arg(long, env = "DEEZER_LANGUAGE")]
    language: Option<String>,

    /// API host
    #[arg(long, env = "DEEZER_HOST", default_value = deezer_catalog::config::DEFAULT_HOST)]
    host: String,

    /// Application id
    #[arg(long, env = "DEEZER_APP_ID")]
    app_id: Option<String>,

    /// Application secret
    #[arg(long, env = "DEEZER_APP_SECRET")]
    app_secret: Option<String>,

    /// Use http instead of https
    #[arg(long)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL of an API object without requesting it
    Url {
        /// Object type (album, artist, search, ...)
        object_type: String,

        /// Object id
        id: Option<String>,

        /// Relation, e.g. "tracks"
        relation: Option<String>,

        /// Query parameters as key=value
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
    },
    /// Fetch one record by id
    Get {
        #[arg(value_enum)]
        kind: Kind,

        /// Object id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Fetch the user owning the access token
    Me,
    /// Fetch the global chart or one of its sections
    Chart {
        #[arg(value_enum)]
        section: Option<Section>,
    },
    /// List all genres
    Genres,
    /// List all radios
    Radios,
    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Kind of records to search (album, artist, ...); tracks by default
        #[arg(short, long)]
        relation: Option<String>,

        /// Offset of the first result
        #[arg(short, long)]
        index: Option<u32>,

        /// Limit results
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Search with field filters
    AdvancedSearch {
        /// Terms as field=value, e.g. artist="Lou Doillon"
        #[arg(short, long = "term", value_parser = parse_pair, required = true)]
        terms: Vec<(String, String)>,

        /// Kind of records to search; tracks by default
        #[arg(short, long)]
        relation: Option<String>,

        /// Limit results
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    Album,
    Artist,
    Comment,
    Genre,
    Playlist,
    Radio,
    Track,
    User,
}

impl From<Kind> for ResourceKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Album => ResourceKind::Album,
            Kind::Artist => ResourceKind::Artist,
            Kind::Comment => ResourceKind::Comment,
            Kind::Genre => ResourceKind::Genre,
            Kind::Playlist => ResourceKind::Playlist,
            Kind::Radio => ResourceKind::Radio,
            Kind::Track => ResourceKind::Track,
            Kind::User => ResourceKind::User,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Section {
    Tracks,
    Albums,
    Artists,
    Playlists,
}

impl From<Section> for ChartSection {
    fn from(s: Section) -> Self {
        match s {
            Section::Tracks => ChartSection::Tracks,
            Section::Albums => ChartSection::Albums,
            Section::Artists => ChartSection::Artists,
            Section::Playlists => ChartSection::Playlists,
        }
    }
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), DeezerError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn as_str_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::default()
        .with_host(cli.host)
        .with_ssl(!cli.insecure);
    if let Some(token) = cli.access_token {
        config = config.with_access_token(token);
    }
    if let Some(language) = cli.language {
        config = config.with_language(language);
    }
    if let (Some(app_id), Some(app_secret)) = (cli.app_id, cli.app_secret) {
        config = config.with_app_credentials(app_id, app_secret);
    }

    let client = DeezerClient::new(config)?;

    match &cli.command {
        Commands::Url {
            object_type,
            id,
            relation,
            params,
        } => {
            let url = client.object_url(
                object_type,
                id.as_deref(),
                relation.as_deref(),
                &as_str_pairs(params),
            )?;
            println!("{}", url);
        }
        Commands::Get { kind, id } => {
            let mapped = client
                .get_resource((*kind).into(), Some(*id), None, &[])
                .await?;
            print_json(&mapped)?;
        }
        Commands::Me => print_json(&client.get_current_user().await?)?,
        Commands::Chart { section } => match section.map(ChartSection::from) {
            None => print_json(&client.get_chart().await?)?,
            Some(ChartSection::Tracks) => print_json(&client.get_chart_tracks().await?)?,
            Some(ChartSection::Albums) => print_json(&client.get_chart_albums().await?)?,
            Some(ChartSection::Artists) => print_json(&client.get_chart_artists().await?)?,
            Some(ChartSection::Playlists) => print_json(&client.get_chart_playlists().await?)?,
        },
        Commands::Genres => print_json(&client.get_genres().await?)?,
        Commands::Radios => print_json(&client.get_radios().await?)?,
        Commands::Search {
            query,
            relation,
            index,
            limit,
        } => {
            let results = client
                .search(query, relation.as_deref(), *index, *limit)
                .await?;
            for (i, result) in results.iter().enumerate() {
                println!(
                    "{}. {} (ID: {})",
                    i + 1,
                    result.label().unwrap_or("?"),
                    result.id().map(|id| id.to_string()).unwrap_or_default()
                );
            }
        }
        Commands::AdvancedSearch {
            terms,
            relation,
            limit,
        } => {
            let results = client
                .advanced_search(&as_str_pairs(terms), relation.as_deref(), None, *limit)
                .await?;
            for (i, result) in results.iter().enumerate() {
                println!(
                    "{}. {} (ID: {})",
                    i + 1,
                    result.label().unwrap_or("?"),
                    result.id().map(|id| id.to_string()).unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}
