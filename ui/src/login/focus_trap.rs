/// Selector for everything Tab can land on inside the login page
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Where focus should wrap to when Tab is pressed.
///
/// Returns `None` when the browser's own tab order should be left alone,
/// i.e. unless focus sits on the last element (Tab) or the first
/// (Shift+Tab).
pub fn wrap_target(len: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, backwards) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}
