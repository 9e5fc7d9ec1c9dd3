//! Fetches the raw catalog. This is the gallery's only asynchronous step.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::models::RawRecord;

/// Where the catalog JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(String),
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched over HTTP, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Fetches and parses the catalog body.
    ///
    /// Each returned slot lines up with the array position in the body, so ids
    /// derived from it follow load order. Entries that are not JSON objects come
    /// back as `None`.
    pub async fn fetch(&self) -> Result<Vec<Option<RawRecord>>, LoadError> {
        let body = match self {
            Self::File(path) => tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?,
            Self::Http(url) => fetch_http(url).await?,
        };

        let records = parse_records(&body)?;
        info!(records = records.len(), source = %self, "Fetched catalog records");
        Ok(records)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
        }
    }
}

async fn fetch_http(url: &str) -> Result<Vec<u8>, LoadError> {
    let request_error = |source| LoadError::Request {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(request_error)?;
    debug!(bytes = bytes.len(), url, "Received catalog body");
    Ok(bytes.to_vec())
}

/// Parses a catalog body: a top-level JSON array of record objects.
pub fn parse_records(body: &[u8]) -> Result<Vec<Option<RawRecord>>, LoadError> {
    let value: Value = serde_json::from_slice(body)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                warn!(index, kind = json_kind(&entry), "Skipping catalog entry that is not an object");
                return None;
            }
            // Every field of RawRecord is optional, so any object deserializes.
            serde_json::from_value::<RawRecord>(entry)
                .map_err(|err| warn!(index, error = ?err, "Skipping unreadable catalog entry"))
                .ok()
        })
        .collect();

    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
