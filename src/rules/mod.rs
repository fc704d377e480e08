//! Phase 2: Classification - portability rules.
//!
//! `catalog` holds the pattern tables as data; `classify` is the ordered
//! decision procedure over them. Both are pure: same record, same label.

pub mod catalog;
pub mod classify;

pub use catalog::CROSS_DIALECT_REASON;
pub use classify::{
    UNSUPPORTED_ERROR_REASON, classify_read_entry, classify_record, classify_write_entry,
};
