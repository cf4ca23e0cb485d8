//! Foundation types for systematic parameter metadata.
//!
//! A systematic parameter describes one source of systematic uncertainty
//! (a flux normalisation, a cross-section dial, a detector response knob).
//! Each parameter is described by a [`ParamHeader`] keyed by a [`ParamId`],
//! and a coherent configuration of parameters is a [`SystMetaData`].
//!
//! # Key Types
//!
//! - [`ParamId`] — String identifier, unique within a valid collection
//! - [`ParamHeader`] — Descriptor for one systematic parameter
//! - [`ValidityRange`] — Closed interval of allowed parameter values
//! - [`SystMetaData`] — Ordered collection of parameter headers

pub mod header;
pub mod id;
pub mod metadata;

pub use header::{ParamHeader, ValidityRange};
pub use id::ParamId;
pub use metadata::SystMetaData;
