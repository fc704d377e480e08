//! Testport - ports sqlglot dialect test suites to TypeScript
//!
//! Testport is a CLI tool and library for converting the Python sqlglot
//! dialect test suite into vitest test files for sqlglot-ts. It extracts
//! test assertions from Python sources, decides which assertions port
//! cleanly, and emits one TypeScript test file per dialect.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (Python parsing and call extraction)
//! - `emit`: TypeScript test file rendering
//! - `rules`: Portability classification rules and pattern catalogues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
pub mod rules;
pub mod utils;
