//! Tokenizer warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The tokenizer routes its parse errors through here when warnings are enabled.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable problem (prints once per unique message).
///
/// Returns `true` if the warning was printed, `false` if the same
/// component/message pair had already been reported.
///
/// # Example
/// ```
/// use marten_common::warning::warn_once;
///
/// let _ = warn_once("Doc Example", "eof-in-tag at position 4");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Marten {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call before tokenizing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}
