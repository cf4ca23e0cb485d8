//! Validation and collision-checked merging of systematic parameter metadata.
//!
//! The central operation is [`MetadataMerger::merge`]: it appends one
//! [`SystMetaData`](syst_types::SystMetaData) onto another, but only after
//! both inputs pass an injected [`MetaDataValidator`] and no parameter id
//! appears in both. Failures are reported to an injected [`Diagnostics`] sink
//! and returned as a [`MergeError`]; the target is never partially extended.
//!
//! # Quick Start
//!
//! ```rust
//! use syst_meta::{CollectingDiagnostics, HeaderValidator, MergeError, MetadataMerger};
//! use syst_types::{ParamHeader, SystMetaData};
//!
//! let merger = MetadataMerger::new(HeaderValidator::default(), CollectingDiagnostics::new());
//!
//! let mut flux = SystMetaData::from_headers(vec![
//!     ParamHeader::new("flux_1").with_variations([-1.0, 1.0]),
//! ]);
//! let xsec = SystMetaData::from_headers(vec![
//!     ParamHeader::new("xsec_1").with_variations([-1.0, 1.0]),
//! ]);
//!
//! merger.merge(&mut flux, &xsec).unwrap();
//! assert_eq!(flux.len(), 2);
//!
//! let err = merger.merge(&mut flux, &xsec).unwrap_err();
//! assert!(matches!(err, MergeError::IdentifierCollision { .. }));
//! assert_eq!(flux.len(), 2);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod merge;
pub mod printers;
pub mod validation;

pub use config::{MergeConfig, SystConfig, ValidationConfig};
pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};
pub use error::{MergeError, MetaDataError};
pub use io::MetaDataFormat;
pub use merge::{extend_syst_meta_data, MergeSummary, MetadataMerger};
pub use printers::{HeaderSummary, MetaDataSummary, ReportSummary};
pub use validation::{HeaderValidator, MetaDataValidator, ValidationReport, Violation, ViolationKind};
