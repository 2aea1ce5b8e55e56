//! Deduplicated engine warnings.
//!
//! Layout drivers tend to repeat the same mistake on every frame (removing a
//! float that was never attached, for example). These helpers report each
//! distinct message once through [`log::warn!`] until the set is cleared.
//!
//! Messages are `'static`, so the set holds at most one entry per call site.
//! Ids and other per-occurrence details go in a separate, undeduplicated log
//! record.

use std::collections::HashSet;

use parking_lot::Mutex;

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<(&'static str, &'static str)>>> = Mutex::new(None);

/// Warn about a recoverable misuse (emitted once per unique message).
///
/// Returns `true` when the message was emitted, `false` when it had already
/// been reported since the last [`clear_warnings`].
///
/// # Example
/// ```ignore
/// warn_once("layer", "removing a float that is not attached");
/// ```
pub fn warn_once(component: &'static str, message: &'static str) -> bool {
    let should_emit = WARNED
        .lock()
        .get_or_insert_with(HashSet::new)
        .insert((component, message));

    if should_emit {
        log::warn!(target: "stratum", "[{component}] {message}");
    }
    should_emit
}

/// Clear all recorded warnings (call when a new document is laid out)
pub fn clear_warnings() {
    if let Some(set) = WARNED.lock().as_mut() {
        set.clear();
    }
}
