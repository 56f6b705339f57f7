//! Color theme toggle.
//!
//! Flips between dark and light from a header button or the `T` key. An
//! explicit choice is persisted and stops the theme from following the
//! system preference.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::config::THEME_TOGGLE_KEY;
use crate::theme::{self, Theme};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/toggle.module.css");

fn set_theme(ctx: AppContext, theme: Theme) {
    if let Err(e) = theme::save_theme(theme) {
        log::warn!("theme: {}", e);
    }
    ctx.theme.set(theme);
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toggle = move || set_theme(ctx, ctx.theme.get_untracked().toggled());

    let handle = window_event_listener(ev::keydown, move |ev| {
        if dom::is_shortcut(&ev, THEME_TOGGLE_KEY) {
            toggle();
        }
    });
    on_cleanup(move || handle.remove());

    let label = move || {
        let target = ctx.theme.get().toggled();
        let lang = ctx.lang.get();
        ctx.catalog.with_value(|c| c.theme_label(lang, target))
    };

    view! {
        <button
            class=css::toggle
            title="Toggle theme (T)"
            on:click=move |_| toggle()
        >
            {label}
        </button>
    }
}
