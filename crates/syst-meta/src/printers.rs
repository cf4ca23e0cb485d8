//! Human-readable rendering of headers, collections, and validation reports.

use std::fmt;

use syst_types::{ParamHeader, SystMetaData};

use crate::validation::ValidationReport;

/// One-line description of a header.
///
/// ```
/// use syst_meta::printers::HeaderSummary;
/// use syst_types::ParamHeader;
///
/// let header = ParamHeader::new("xsec_1")
///     .with_pretty_name("MaCCQE")
///     .with_variations([-1.0, 0.0, 1.0])
///     .splineable();
/// assert_eq!(
///     HeaderSummary(&header).to_string(),
///     "\"xsec_1\" MaCCQE [--S] variations=3"
/// );
/// ```
pub struct HeaderSummary<'a>(pub &'a ParamHeader);

impl fmt::Display for HeaderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0;
        write!(f, "{}", h.syst_param_id.quoted())?;
        if !h.pretty_name.is_empty() {
            write!(f, " {}", h.pretty_name)?;
        }
        write!(
            f,
            " [{}{}{}]",
            if h.is_weight_systematic_variation { 'W' } else { '-' },
            if h.is_correction { 'C' } else { '-' },
            if h.is_splineable { 'S' } else { '-' },
        )?;
        if let Some(central) = h.central_param_value {
            write!(f, " central={central}")?;
        }
        write!(f, " variations={}", h.param_variations.len())?;
        if let Some(range) = h.param_validity_range {
            write!(f, " range=[{}, {}]", range.low, range.high)?;
        }
        if !h.opts.is_empty() {
            write!(f, " opts={}", h.opts.len())?;
        }
        Ok(())
    }
}

/// Multi-line listing of a collection, one header per line.
pub struct MetaDataSummary<'a>(pub &'a SystMetaData);

impl fmt::Display for MetaDataSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let md = self.0;
        let noun = if md.len() == 1 { "header" } else { "headers" };
        write!(f, "{} parameter {noun}", md.len())?;
        for (index, header) in md.iter().enumerate() {
            write!(f, "\n  [{index}] {}", HeaderSummary(header))?;
        }
        Ok(())
    }
}

/// Verdict line followed by one line per violation.
pub struct ReportSummary<'a>(pub &'a ValidationReport);

impl fmt::Display for ReportSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        if report.is_valid() {
            return write!(f, "valid ({} headers)", report.header_count);
        }
        write!(
            f,
            "invalid: {} violation(s) in {} headers",
            report.violations.len(),
            report.header_count
        )?;
        for v in &report.violations {
            write!(
                f,
                "\n  [{}] {} {}: {}",
                v.index,
                v.param_id.quoted(),
                v.kind,
                v.description
            )?;
        }
        Ok(())
    }
}
