//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The tokenizer itself never logs; front ends use this to report things like
//! input that ended inside a tag.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed with ANSI colors.
static COLOR: AtomicBool = AtomicBool::new(true);

/// Enable or disable colored warning output.
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Warn about a problem in the given component (prints once per unique message)
///
/// # Example
/// ```
/// sprig_common::warning::warn_once("tokenizer", "input ended inside a tag");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let line = format!("[sprig {component}] ⚠ {message}");
    if record(format!("[{component}] {message}")) {
        if COLOR.load(Ordering::Relaxed) {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }
}

/// Clear all recorded warnings (call before processing a new input)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Record a warning key, returning true the first time it is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates() {
        let key = "[test] dedup".to_string();
        assert!(record(key.clone()));
        assert!(!record(key.clone()));
        clear_warnings();
        assert!(record(key));
    }
}
