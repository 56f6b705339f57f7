//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, KeyboardEvent, MediaQueryListEvent, Storage, Window};

use crate::config::PREFERS_DARK_QUERY;
use crate::core::error::MediaQueryError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Keyboard Shortcuts
// =============================================================================

/// Whether an event target is a text field the user is typing into.
pub fn is_text_field(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
}

/// Single-key shortcut rule: the key matches case-insensitively, no
/// Ctrl/Meta/Alt modifier is held and focus is not in a text field.
fn shortcut_matches(key: &str, shortcut: &str, modified: bool, in_text_field: bool) -> bool {
    key.eq_ignore_ascii_case(shortcut) && !modified && !in_text_field
}

/// Whether a window keydown triggers the single-key `shortcut`.
pub fn is_shortcut(ev: &KeyboardEvent, shortcut: &str) -> bool {
    shortcut_matches(
        &ev.key(),
        shortcut,
        ev.ctrl_key() || ev.meta_key() || ev.alt_key(),
        is_text_field(ev.target()),
    )
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Whether the system prefers a dark color scheme.
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Register a callback for system color-scheme changes.
///
/// The callback receives `true` when the system switched to dark.
///
/// # Note
/// The closure is leaked using `forget()`; the listener lives as long as
/// the page.
pub fn on_color_scheme_change(callback: impl Fn(bool) + 'static) -> Result<(), MediaQueryError> {
    let mql = window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .ok_or(MediaQueryError::Unavailable(PREFERS_DARK_QUERY))?;

    let closure = Closure::wrap(Box::new(move |ev: MediaQueryListEvent| {
        callback(ev.matches());
    }) as Box<dyn Fn(MediaQueryListEvent)>);

    mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|_| MediaQueryError::ListenerFailed)?;

    closure.forget();
    Ok(())
}

// =============================================================================
// Document
// =============================================================================

/// Set the `lang` attribute of the root `<html>` element.
pub fn set_document_lang(lang: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", lang);
    }
}

/// Set or remove the `data-theme` attribute of the root `<html>` element.
pub fn set_document_theme(theme: Option<&str>) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = match theme {
            Some(value) => root.set_attribute("data-theme", value),
            None => root.remove_attribute("data-theme"),
        };
    }
}

fn set_meta_content(document: &Document, selector: &str, content: &str) {
    if let Some(meta) = document.query_selector(selector).ok().flatten() {
        let _ = meta.set_attribute("content", content);
    }
}

/// Set the title and the description meta tags, including their Open Graph
/// counterparts. Missing meta tags are skipped.
pub fn set_document_meta(title: &str, description: Option<&str>) {
    let Some(document) = document() else { return };
    document.set_title(title);
    set_meta_content(&document, "meta[property=\"og:title\"]", title);
    if let Some(description) = description {
        set_meta_content(&document, "meta[name=\"description\"]", description);
        set_meta_content(&document, "meta[property=\"og:description\"]", description);
    }
}

/// Reload the page, restarting the application from scratch.
pub fn reload_page() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
