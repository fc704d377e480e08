//! Phase 3: Emission - TypeScript test file rendering.
//!
//! `escape` picks a parseable string-literal variant per emitted string;
//! `render` builds classified test cases and renders the file text.

pub mod escape;
pub mod render;

pub use escape::ts_string;
pub use render::{
    CaseBody, EmitOptions, TestCase, TestGroup, build_groups, case_counts, emit_file,
};
