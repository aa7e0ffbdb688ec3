//! DOM Helpers
//!
//! Small wrappers over `web_sys` used by the views.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scroll the element with `id` into view
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("[DOM] no section #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Toggle the `dark` class on `<html>` so `dark:` class variants apply
pub fn apply_theme_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::warn!("[DOM] failed to set theme class: {:?}", e);
    }
}
