//! Terminal input component with history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::core::{Key, KeyResponse};

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Single-line command input.
///
/// Enter and the arrow keys go to `on_key` along with the current text; the
/// response decides whether the field is rewritten and whether the browser's
/// default handling is suppressed. All other keys edit the field normally,
/// as does everything typed while an IME composition is open.
///
/// `input_ref` is owned by the caller so it can refocus the field.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    input_ref: NodeRef<leptos::html::Input>,
    on_key: Callback<(Key, String), KeyResponse>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let key = Key::from_keydown(&ev.key(), ev.is_composing());
        if key == Key::Other {
            return;
        }

        let response = on_key.run((key, input_value.get_untracked()));
        if response.prevent_default {
            ev.prevent_default();
        }
        if let Some(text) = response.replace_input {
            set_input_value.set(text);
            move_cursor_to_end();
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
