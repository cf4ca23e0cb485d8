use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MetaDataError, Result};

/// Rule settings for [`HeaderValidator`](crate::validation::HeaderValidator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject collections in which two headers share a non-empty pretty name.
    pub require_unique_pretty_names: bool,
    /// Minimum number of variations a splineable parameter must declare.
    pub min_spline_points: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_unique_pretty_names: true,
            min_spline_points: 3,
        }
    }
}

impl ValidationConfig {
    /// Only the checks no collection can sensibly fail: ids present and
    /// unique, values finite.
    pub fn lenient() -> Self {
        Self {
            require_unique_pretty_names: false,
            min_spline_points: 0,
        }
    }
}

/// Settings for [`MetadataMerger`](crate::merge::MetadataMerger).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// When an input is invalid, run the validator again in verbose mode so
    /// the individual findings reach the log before the merge fails.
    pub verbose_recheck: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            verbose_recheck: true,
        }
    }
}

/// Top-level configuration file.
///
/// ```toml
/// [validation]
/// require_unique_pretty_names = false
/// min_spline_points = 4
///
/// [merge]
/// verbose_recheck = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystConfig {
    pub validation: ValidationConfig,
    pub merge: MergeConfig,
}

impl SystConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| MetaDataError::Parse {
            format: "toml".into(),
            message: e.to_string(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
