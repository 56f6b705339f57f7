//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::Shell;
use crate::core::{PendingTask, TerminalSession, VirtualFs};
use crate::i18n::{self, Catalog, Lang};
use crate::theme::{self, Theme};

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// All terminal data lives in one [`TerminalSession`]; the only other piece
/// of state is the slot holding the pending boot timer.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy (they're just handles into the arena).
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Filesystem, history, output log, boot state and input mode.
    pub session: RwSignal<TerminalSession>,
    /// The boot timer, if one is scheduled. Timers are not `Send`, so this
    /// lives in local storage.
    pub boot_task: StoredValue<PendingTask<Timeout>, LocalStorage>,
}

impl TerminalState {
    /// Creates a terminal state over the built-in files.
    ///
    /// The session starts with input disabled; the boot driver enables it.
    pub fn new(prompt: String) -> Self {
        Self {
            session: RwSignal::new(TerminalSession::new(VirtualFs::builtin(), prompt)),
            boot_task: StoredValue::new_local(PendingTask::new()),
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Terminal state**: the session and its boot timer
/// - **Language**: the selected display language
/// - **Theme**: the color theme applied to `<html data-theme>`
/// - **Catalog**: translated boot lines, prompts, titles and labels
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,

    /// Current display language. Changing it restarts the boot sequence.
    pub lang: RwSignal<Lang>,

    pub theme: RwSignal<Theme>,

    pub catalog: StoredValue<Catalog>,
}

impl AppContext {
    /// Creates the context, reading the persisted language and theme.
    pub fn new() -> Self {
        let catalog = Catalog::builtin();
        let lang = i18n::load_lang();
        let theme = theme::load_theme();
        log::info!(
            "app: starting with language '{}', theme '{}'",
            lang.code(),
            theme.code()
        );
        Self {
            terminal: TerminalState::new(catalog.prompt(lang)),
            lang: RwSignal::new(lang),
            theme: RwSignal::new(theme),
            catalog: StoredValue::new(catalog),
        }
    }

    /// Boot lines for the current language.
    pub fn boot_lines(&self) -> Vec<String> {
        let lang = self.lang.get_untracked();
        self.catalog.with_value(|c| c.boot_lines(lang))
    }

    /// Prompt for the current language.
    pub fn prompt(&self) -> String {
        let lang = self.lang.get_untracked();
        self.catalog.with_value(|c| c.prompt(lang))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, then renders the Shell.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! { <Shell /> }
}
