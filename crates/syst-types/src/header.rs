use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::ParamId;

/// Closed interval `[low, high]` of values a parameter may take.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidityRange {
    pub low: f64,
    pub high: f64,
}

impl ValidityRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns `true` if `low <= high`.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Returns `true` if `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Descriptor for a single systematic parameter.
///
/// Only [`ParamHeader::syst_param_id`] matters when collections are merged;
/// the remaining fields are payload that validation may inspect but merging
/// carries through untouched.
///
/// Field order matters for TOML output: plain values must precede tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamHeader {
    /// Human-readable name, e.g. `"MaCCQE"`.
    #[serde(default)]
    pub pretty_name: String,
    pub syst_param_id: ParamId,
    /// The parameter produces event weights rather than modified kinematics.
    #[serde(default)]
    pub is_weight_systematic_variation: bool,
    /// The parameter is a fixed correction with a single central value.
    #[serde(default)]
    pub is_correction: bool,
    /// Responses to this parameter may be interpolated with a spline.
    #[serde(default)]
    pub is_splineable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_param_value: Option<f64>,
    /// Parameter values at which responses are evaluated.
    #[serde(default)]
    pub param_variations: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_validity_range: Option<ValidityRange>,
    /// Free-form options attached by the producer of the header.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub opts: BTreeMap<String, serde_json::Value>,
}

impl ParamHeader {
    /// A header with the given id and every other field empty.
    pub fn new(id: impl Into<ParamId>) -> Self {
        Self {
            syst_param_id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &ParamId {
        &self.syst_param_id
    }

    pub fn with_pretty_name(mut self, name: impl Into<String>) -> Self {
        self.pretty_name = name.into();
        self
    }

    pub fn with_variations(mut self, variations: impl IntoIterator<Item = f64>) -> Self {
        self.param_variations = variations.into_iter().collect();
        self
    }

    pub fn with_central_value(mut self, value: f64) -> Self {
        self.central_param_value = Some(value);
        self
    }

    pub fn with_validity_range(mut self, low: f64, high: f64) -> Self {
        self.param_validity_range = Some(ValidityRange::new(low, high));
        self
    }

    pub fn with_opt(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.opts.insert(key.into(), value.into());
        self
    }

    /// Mark the header as a correction.
    pub fn as_correction(mut self) -> Self {
        self.is_correction = true;
        self
    }

    pub fn splineable(mut self) -> Self {
        self.is_splineable = true;
        self
    }

    pub fn weight_variation(mut self) -> Self {
        self.is_weight_systematic_variation = true;
        self
    }
}
