//! Common utilities for sift.
//!
//! This crate provides shared infrastructure used by the lexer, the indexer
//! and the command line:
//! - **Warning System** - deduplicated, colored diagnostics on stderr
//! - **URL Resolution** - joining extracted links against a document base

pub mod url;
pub mod warning;
