use std::collections::HashSet;

use syst_types::{ParamId, SystMetaData};
use tracing::debug;

use crate::config::MergeConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::MergeError;
use crate::validation::{HeaderValidator, MetaDataValidator};

/// Outcome of a successful merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeSummary {
    /// Headers appended from the source collection.
    pub appended: usize,
    /// Length of the target collection after the merge.
    pub total: usize,
}

/// Merges parameter header collections, refusing invalid inputs and
/// cross-collection id collisions.
///
/// The target is only mutated once every check has passed, so a failed merge
/// leaves it exactly as it was.
pub struct MetadataMerger<V = HeaderValidator, D = TracingDiagnostics> {
    validator: V,
    diagnostics: D,
    config: MergeConfig,
}

impl Default for MetadataMerger {
    fn default() -> Self {
        Self::new(HeaderValidator::default(), TracingDiagnostics)
    }
}

impl<V: MetaDataValidator, D: Diagnostics> MetadataMerger<V, D> {
    pub fn new(validator: V, diagnostics: D) -> Self {
        Self {
            validator,
            diagnostics,
            config: MergeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MergeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Append every header of `source` to `target`.
    ///
    /// Fails with [`MergeError::InvalidInput`] if either collection is
    /// invalid on its own, and with [`MergeError::IdentifierCollision`] at the
    /// first `source` header whose id is already present. `source` headers
    /// keep their relative order after the existing `target` headers.
    pub fn merge(
        &self,
        target: &mut SystMetaData,
        source: &SystMetaData,
    ) -> Result<MergeSummary, MergeError> {
        let target_quiet = self.validator.is_valid(target, false);
        let source_quiet = self.validator.is_valid(source, false);

        if !(target_quiet && source_quiet) {
            let (target_valid, source_valid) = if self.config.verbose_recheck {
                (
                    self.validator.is_valid(target, true),
                    self.validator.is_valid(source, true),
                )
            } else {
                (target_quiet, source_quiet)
            };
            self.diagnostics.report(&format!(
                "attempting to merge two parameter header sets but one \
                 (target is valid: {target_valid}, source is valid: {source_valid}) is invalid"
            ));
            return Err(MergeError::InvalidInput {
                target_valid,
                source_valid,
            });
        }

        if let Some(id) = first_collision(target, source) {
            self.diagnostics.report(&format!(
                "attempting to merge two parameter header sets, but a parameter id \
                 collision has been found for id: {}",
                id.quoted()
            ));
            return Err(MergeError::IdentifierCollision { id: id.clone() });
        }

        target.headers.extend(source.headers.iter().cloned());

        let summary = MergeSummary {
            appended: source.len(),
            total: target.len(),
        };
        debug!(
            appended = summary.appended,
            total = summary.total,
            "merged parameter headers"
        );
        Ok(summary)
    }

    /// Fold `inputs` left to right into a new collection.
    ///
    /// Each input is merged in turn, so a collision reports the first id seen
    /// again in input order. No inputs yields an empty collection.
    pub fn merge_all<'a, I>(&self, inputs: I) -> Result<SystMetaData, MergeError>
    where
        I: IntoIterator<Item = &'a SystMetaData>,
    {
        let mut merged = SystMetaData::new();
        for input in inputs {
            self.merge(&mut merged, input)?;
        }
        Ok(merged)
    }
}

/// Merge `source` into `target` with the default validator, reporting
/// failures through `tracing`.
pub fn extend_syst_meta_data(
    target: &mut SystMetaData,
    source: &SystMetaData,
) -> Result<MergeSummary, MergeError> {
    let merger: MetadataMerger = MetadataMerger::default();
    merger.merge(target, source)
}

/// First id of `source`, in stored order, that is already taken.
///
/// Ids within `target` are assumed distinct.
fn first_collision<'a>(target: &SystMetaData, source: &'a SystMetaData) -> Option<&'a ParamId> {
    let mut used: HashSet<&ParamId> = target.ids().collect();
    source.ids().find(|id| !used.insert(*id))
}
