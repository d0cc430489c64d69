//! Domain entities for the Matchday catalog domain
//!
//! Wire field names are the Spanish ones the document store has always
//! used (`nombre`, `descripcion`, `imagenUrl`, `fechaCreacion`, ...); the
//! Rust structs map onto them with serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback map position for new teams: the Madrid city centre.
pub const DEFAULT_LATITUDE: f64 = 40.4167;
pub const DEFAULT_LONGITUDE: f64 = -3.70325;

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

/// League entity
///
/// `id` stays empty until the first persist, when the repository copies
/// the allocated document id onto it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct League {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "imagen", default)]
    pub image_url: String,
}

impl League {
    /// Create a not-yet-persisted league
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}

/// Team entity
///
/// `id` is generated eagerly so it can be embedded before the first
/// write. `league_id` is expected to reference an existing league but is
/// never enforced; dangling references render as an unknown-league label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "imagenUrl", default)]
    pub image_url: String,
    /// Set once at creation; milliseconds since the epoch on the wire.
    #[serde(
        rename = "fechaCreacion",
        with = "chrono::serde::ts_milliseconds",
        default = "Utc::now"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "autorId", default)]
    pub author_id: String,
    #[serde(rename = "latitud", default = "default_latitude")]
    pub latitude: f64,
    #[serde(rename = "longitud", default = "default_longitude")]
    pub longitude: f64,
    #[serde(rename = "ligaId", default)]
    pub league_id: String,
}

impl Default for Team {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            created_at: Utc::now(),
            author_id: String::new(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            league_id: String::new(),
        }
    }
}

/// A form image value: either already a remote URL, or a local handle
/// (`file://`, `content://`, or a bare path) that must be uploaded before
/// the document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Remote(String),
    Local(String),
}

impl ImageRef {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ImageRef::Remote(raw.to_string())
        } else {
            ImageRef::Local(raw.to_string())
        }
    }
}
