//! Main shell component.
//!
//! Container that owns the screen chrome, runs the boot sequence once and
//! restarts it whenever the display language changes.

use leptos::prelude::*;

use super::boot;
use super::terminal::Terminal;
use crate::app::AppContext;
use crate::components::lang::LangToggle;
use crate::components::theme::ThemeToggle;
use crate::core::TerminalSession;
use crate::theme::{self, Theme};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when the output changes.
fn setup_autoscroll_effect(
    session: RwSignal<TerminalSession>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Keep the document in sync with the language and reboot on change.
///
/// The first run only applies the document attributes; the initial boot
/// is started separately.
fn setup_lang_effect(ctx: AppContext) {
    Effect::new(move |prev: Option<()>| {
        let lang = ctx.lang.get();
        dom::set_document_lang(lang.html_lang());
        let (title, description) =
            ctx.catalog.with_value(|c| (c.title(lang), c.description(lang)));
        dom::set_document_meta(&title, description.as_deref());
        if prev.is_some() {
            log::info!("lang: switched to '{}', rebooting", lang.code());
            boot::reset(ctx);
        }
    });
}

/// Mirror the theme onto `<html data-theme>` and follow the system color
/// scheme until the visitor picks a theme explicitly.
fn setup_theme_effect(ctx: AppContext) {
    Effect::new(move || {
        dom::set_document_theme(ctx.theme.get().data_attr());
    });

    let follow_system = move |dark: bool| {
        if !theme::has_stored_theme() {
            ctx.theme.set(Theme::from_prefers_dark(dark));
        }
    };
    if let Err(e) = dom::on_color_scheme_change(follow_system) {
        log::warn!("theme: {}", e);
    }
}

// ============================================================================
// Shell Component
// ============================================================================

/// Shell component.
///
/// This is a container component that:
/// - Handles boot sequence initialization
/// - Restarts the boot sequence on language changes
/// - Applies the color theme to the document
/// - Provides global UI effects (CRT overlay, scanlines)
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    setup_autoscroll_effect(ctx.terminal.session, output_ref);
    setup_lang_effect(ctx);
    setup_theme_effect(ctx);

    view! {
        <div class=css::screen>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <header class=css::header>
                <LangToggle />
                <ThemeToggle />
            </header>

            <div class=css::main>
                <Terminal output_ref=output_ref />
            </div>
        </div>
    }
}
