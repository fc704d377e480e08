//! Phase 1: Extraction - origin test-call collection.
//!
//! Turns a parsed Python test file into an ordered list of
//! [`ExtractedCall`] records. Classification (`crate::rules`) and
//! rendering (`crate::emit`) both consume these records read-only.

pub mod call;
pub mod resolver;
pub mod visitor;

pub use call::{CallKind, ExtractedCall, SqlEntry};
pub use resolver::LoopEnv;
pub use visitor::{Extraction, TEST_METHOD_PREFIX, extract_from_source};
