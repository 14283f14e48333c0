//! Diagnostics with colored terminal output.
//!
//! Messages are deduplicated so a crawl over thousands of pages with the same
//! broken markup reports each distinct problem once. Used by the lexer and the
//! indexer; the command line can mute output entirely.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already reported (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but nothing is printed.
static MUTED: AtomicBool = AtomicBool::new(false);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Report a diagnostic for `component` (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("HTML Lexer", "unterminated <script> section");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let first = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if first && !MUTED.load(Ordering::Relaxed) {
        let line = format!("[sift {component}] warning: {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Suppress (or re-enable) printing. Deduplication bookkeeping continues.
pub fn set_muted(muted: bool) {
    MUTED.store(muted, Ordering::Relaxed);
}

/// Clear all recorded warnings (call when starting a new batch of documents)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
