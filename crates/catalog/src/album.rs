//! Album record type and the built-in seed catalog.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// JSON field names, in declaration order
pub const FIELD_NAMES: &[&str] = &["id", "title", "artist", "year", "price"];

/// A single record album.
///
/// Fields missing from an incoming JSON object, or set to `null`, fall back
/// to their zero value; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Caller-supplied identifier, not checked for uniqueness
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    /// Release year as free text
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Album {
    /// Build an album from its parts
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            year: year.into(),
            price,
        }
    }

    /// Decode an album from a request body.
    ///
    /// Only the first JSON value in `bytes` is read; anything after it is
    /// ignored. A `null` body yields an empty album. Object keys match the
    /// field names case-insensitively, and a later key overwrites an earlier
    /// one mapping to the same field. Any other top-level value is rejected.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let first = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| Err(serde_json::Error::custom("empty request body")))?;

        match first {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => serde_json::from_value(Value::Object(fold_keys(fields))),
            _ => Err(serde_json::Error::custom("expected a JSON object")),
        }
    }
}

/// Rename keys that match a field name ignoring ASCII case, dropping the rest.
fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    for (key, value) in fields {
        if let Some(name) = FIELD_NAMES.iter().find(|name| name.eq_ignore_ascii_case(&key)) {
            folded.insert(name.to_string(), value);
        }
    }
    folded
}

/// The records every default store starts with, in seed order.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", "1977", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", "1987", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            "1997",
            39.99,
        ),
    ]
}
