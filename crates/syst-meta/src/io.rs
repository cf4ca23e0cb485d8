//! Reading and writing collections as JSON or TOML documents.

use std::fmt;
use std::path::Path;

use syst_types::SystMetaData;
use tracing::debug;

use crate::error::{MetaDataError, Result};

/// On-disk encodings of a [`SystMetaData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaDataFormat {
    Json,
    Toml,
}

impl MetaDataFormat {
    /// Pick the format from a file extension (`.json` or `.toml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(MetaDataError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for MetaDataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

pub fn parse(text: &str, format: MetaDataFormat) -> Result<SystMetaData> {
    let parsed = match format {
        MetaDataFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        MetaDataFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| MetaDataError::Parse {
        format: format.to_string(),
        message,
    })
}

pub fn render(md: &SystMetaData, format: MetaDataFormat) -> Result<String> {
    match format {
        MetaDataFormat::Json => serde_json::to_string_pretty(md)
            .map_err(|e| MetaDataError::Serialization(e.to_string())),
        MetaDataFormat::Toml => {
            check_toml_opts(md)?;
            toml::to_string_pretty(md).map_err(|e| MetaDataError::Serialization(e.to_string()))
        }
    }
}

/// First option, in header order, holding a null anywhere inside its value.
fn check_toml_opts(md: &SystMetaData) -> Result<()> {
    for header in md.iter() {
        if let Some((key, _)) = header.opts.iter().find(|(_, value)| contains_null(value)) {
            return Err(MetaDataError::UnrepresentableOpt {
                id: header.syst_param_id.clone(),
                key: key.clone(),
                format: MetaDataFormat::Toml.to_string(),
            });
        }
    }
    Ok(())
}

fn contains_null(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.iter().any(contains_null),
        serde_json::Value::Object(fields) => fields.values().any(contains_null),
        _ => false,
    }
}

/// Load a collection, choosing the format from the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<SystMetaData> {
    let path = path.as_ref();
    let format = MetaDataFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let md = parse(&text, format)?;
    debug!(path = %path.display(), headers = md.len(), "loaded metadata");
    Ok(md)
}

/// Write a collection, choosing the format from the file extension.
pub fn save(md: &SystMetaData, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = MetaDataFormat::from_path(path)?;
    std::fs::write(path, render(md, format)?)?;
    debug!(path = %path.display(), headers = md.len(), "saved metadata");
    Ok(())
}
