//! Common utilities for the Marten tokenizer.
//!
//! This crate provides shared infrastructure used by the tokenizer and its drivers:
//! - **Warning System** - colored, deduplicated terminal output for parse errors

pub mod warning;
