//! Display language toggle.
//!
//! Flips between English and Chinese from a header button or the `L` key.
//! The choice is persisted; the shell reacts to the change by rebooting the
//! terminal in the new language.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::config::LANG_TOGGLE_KEY;
use crate::i18n::{self, Lang};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/toggle.module.css");

/// Select `lang`, persisting it when localStorage allows.
fn set_lang(ctx: AppContext, lang: Lang) {
    if let Err(e) = i18n::save_lang(lang) {
        log::warn!("lang: {}", e);
    }
    ctx.lang.set(lang);
}

#[component]
pub fn LangToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toggle = move || set_lang(ctx, ctx.lang.get_untracked().toggled());

    let handle = window_event_listener(ev::keydown, move |ev| {
        if dom::is_shortcut(&ev, LANG_TOGGLE_KEY) {
            toggle();
        }
    });
    on_cleanup(move || handle.remove());

    // Label names the language the button switches to.
    let label = move || match ctx.lang.get() {
        Lang::En => "中文",
        Lang::Zh => "EN",
    };

    view! {
        <button
            class=css::toggle
            title="Toggle language (L)"
            on:click=move |_| toggle()
        >
            {label}
        </button>
    }
}
