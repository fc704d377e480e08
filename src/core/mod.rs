//! Extraction engine: Python parsing and test-call extraction.
//!
//! The pipeline has three phases. This module owns the first:
//! turning one Python dialect test file into an ordered list of
//! [`extract::ExtractedCall`] records plus the dialect name. The records
//! are then labelled by `crate::rules` and rendered by `crate::emit`.

pub mod extract;
pub mod parser;

pub use extract::{CallKind, ExtractedCall, Extraction, SqlEntry, extract_from_source};
