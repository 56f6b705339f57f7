//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::{Key, KeyResponse, SessionEffect};
use crate::models::InputMode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Handlers
// ============================================================================

/// Reload the page after `delay_ms`. Nothing cancels a reboot once it starts.
fn schedule_reboot(delay_ms: u32) {
    log::info!("reboot: reloading in {} ms", delay_ms);
    let _ = Timeout::new(delay_ms, dom::reload_page).forget();
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.terminal.session;

    let prompt = Signal::derive(move || session.with(|s| s.prompt().to_string()));
    let input_enabled = move || session.with(|s| s.input_mode() == InputMode::Enabled);
    let on_key = create_key_callback(ctx);

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let handle_click = move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || session.with(|s| s.output().to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show when=input_enabled fallback=|| ()>
                <div class=css::inputArea>
                    <Input prompt=prompt input_ref=input_ref on_key=on_key />
                </div>
            </Show>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_key_callback(ctx: AppContext) -> Callback<(Key, String), KeyResponse> {
    Callback::new(move |(key, input): (Key, String)| {
        let response = ctx
            .terminal
            .session
            .try_update(|session| session.handle_key(key, &input))
            .unwrap_or_default();

        if let Some(SessionEffect::Reboot { delay_ms }) = response.effect {
            schedule_reboot(delay_ms);
        }
        response
    })
}
