use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use syst_types::{ParamHeader, ParamId, SystMetaData};
use tracing::{debug, warn};

use crate::config::ValidationConfig;

/// Decides whether a single collection is internally consistent.
///
/// `verbose` asks the validator to surface its findings (through logging or
/// otherwise); the answer must not depend on it.
pub trait MetaDataValidator {
    fn is_valid(&self, md: &SystMetaData, verbose: bool) -> bool;
}

impl<F> MetaDataValidator for F
where
    F: Fn(&SystMetaData, bool) -> bool,
{
    fn is_valid(&self, md: &SystMetaData, verbose: bool) -> bool {
        self(md, verbose)
    }
}

/// Result of validating one collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationReport {
    pub header_count: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations of the given kind.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }
}

/// A single rule broken by one header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Violation {
    /// Position of the offending header in the collection.
    pub index: usize,
    pub param_id: ParamId,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    EmptyId,
    DuplicateId,
    DuplicatePrettyName,
    NonFiniteValue,
    MissingCentralValue,
    NoVariations,
    InvertedRange,
    OutOfRange,
    TooFewSplinePoints,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyId => "empty-id",
            Self::DuplicateId => "duplicate-id",
            Self::DuplicatePrettyName => "duplicate-pretty-name",
            Self::NonFiniteValue => "non-finite-value",
            Self::MissingCentralValue => "missing-central-value",
            Self::NoVariations => "no-variations",
            Self::InvertedRange => "inverted-range",
            Self::OutOfRange => "out-of-range",
            Self::TooFewSplinePoints => "too-few-spline-points",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule-based validator for parameter header collections.
///
/// Headers are checked in stored order, so the first of two headers sharing
/// an id is accepted and the second is reported.
#[derive(Clone, Debug, Default)]
pub struct HeaderValidator {
    config: ValidationConfig,
}

impl HeaderValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check every header and collect all violations.
    pub fn validate(&self, md: &SystMetaData) -> ValidationReport {
        let mut violations = Vec::new();
        let mut first_by_id: HashMap<&ParamId, usize> = HashMap::new();
        let mut first_by_name: HashMap<&str, usize> = HashMap::new();

        for (index, header) in md.headers.iter().enumerate() {
            let mut found = Vec::new();

            if header.syst_param_id.is_blank() {
                found.push((ViolationKind::EmptyId, "parameter id is empty".to_string()));
            } else if let Some(first) = first_by_id.get(&header.syst_param_id) {
                found.push((
                    ViolationKind::DuplicateId,
                    format!(
                        "parameter id {} already used by header {first}",
                        header.syst_param_id.quoted()
                    ),
                ));
            } else {
                first_by_id.insert(&header.syst_param_id, index);
            }

            if self.config.require_unique_pretty_names && !header.pretty_name.is_empty() {
                match first_by_name.get(header.pretty_name.as_str()) {
                    Some(first) => found.push((
                        ViolationKind::DuplicatePrettyName,
                        format!(
                            "pretty name {:?} already used by header {first}",
                            header.pretty_name
                        ),
                    )),
                    None => {
                        first_by_name.insert(&header.pretty_name, index);
                    }
                }
            }

            self.check_values(header, &mut found);

            violations.extend(found.into_iter().map(|(kind, description)| Violation {
                index,
                param_id: header.syst_param_id.clone(),
                kind,
                description,
            }));
        }

        ValidationReport {
            header_count: md.len(),
            violations,
        }
    }

    fn check_values(&self, header: &ParamHeader, found: &mut Vec<(ViolationKind, String)>) {
        let central = header.central_param_value;
        let variations = &header.param_variations;

        if central.is_some_and(|v| !v.is_finite()) || variations.iter().any(|v| !v.is_finite()) {
            found.push((
                ViolationKind::NonFiniteValue,
                "central value and variations must be finite".into(),
            ));
        }

        if header.is_correction && central.is_none() {
            found.push((
                ViolationKind::MissingCentralValue,
                "correction has no central value".into(),
            ));
        }

        if !header.is_correction && variations.is_empty() {
            found.push((
                ViolationKind::NoVariations,
                "parameter declares no variations".into(),
            ));
        }

        if let Some(range) = header.param_validity_range {
            if !range.is_ordered() {
                found.push((
                    ViolationKind::InvertedRange,
                    format!("validity range [{}, {}] is inverted", range.low, range.high),
                ));
            } else {
                let outside: Vec<f64> = central
                    .into_iter()
                    .chain(variations.iter().copied())
                    .filter(|v| v.is_finite() && !range.contains(*v))
                    .collect();
                if !outside.is_empty() {
                    found.push((
                        ViolationKind::OutOfRange,
                        format!(
                            "values {outside:?} outside validity range [{}, {}]",
                            range.low, range.high
                        ),
                    ));
                }
            }
        }

        if header.is_splineable && variations.len() < self.config.min_spline_points {
            found.push((
                ViolationKind::TooFewSplinePoints,
                format!(
                    "splineable parameter needs at least {} variations, has {}",
                    self.config.min_spline_points,
                    variations.len()
                ),
            ));
        }
    }
}

impl MetaDataValidator for HeaderValidator {
    fn is_valid(&self, md: &SystMetaData, verbose: bool) -> bool {
        let report = self.validate(md);
        if verbose {
            for v in &report.violations {
                warn!(
                    index = v.index,
                    id = %v.param_id.quoted(),
                    kind = %v.kind,
                    "{}",
                    v.description
                );
            }
            debug!(
                headers = report.header_count,
                violations = report.violations.len(),
                "metadata validated"
            );
        }
        report.is_valid()
    }
}
