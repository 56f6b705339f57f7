//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Identity block for the `whoami` command.
pub const WHOAMI_TEXT: &str = include_str!("../assets/text/whoami.txt");

/// Translation catalog consumed by the language collaborator.
pub const I18N_CATALOG: &str = include_str!("../assets/i18n.json");

/// Files mounted in the virtual filesystem, in listing order.
pub const BUILTIN_FILES: &[(&str, &str)] = &[
    ("about.txt", include_str!("../assets/fs/about.txt")),
    ("projects.txt", include_str!("../assets/fs/projects.txt")),
    ("skills.txt", include_str!("../assets/fs/skills.txt")),
    ("contact.txt", include_str!("../assets/fs/contact.txt")),
    (".hushlogin", ""),
];

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the document title.
pub const APP_NAME: &str = "coff0xc";

/// Prompt used when the catalog has none for the current language.
pub const DEFAULT_PROMPT: &str = "root@coff0xc:~#";

/// Boot lines used when the catalog has none for the current language.
pub const DEFAULT_BOOT_LINES: [&str; 4] = [
    "> INITIALIZING_SYSTEM_CORE...",
    "> LOADING_ENCLAVE_MODULES...",
    "> NETWORK_CONNECTION_STABLE",
    "> COFF0XC_SHELL_READY",
];

// =============================================================================
// Command Output
// =============================================================================

/// `sudo` never elevates.
pub const SUDO_DENIED: &str = "sudo: permission denied. This incident will be reported.";

/// Notice printed before the page reloads.
pub const REBOOT_NOTICE: &str = "Rebooting system...";

/// Delay between the reboot notice and the page reload (milliseconds).
pub const REBOOT_DELAY_MS: u32 = 1000;

/// `date` output format (chrono strftime syntax).
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Fixed columns for the synthetic `ls -l` listing.
pub mod long_listing {
    pub const PERMISSIONS: &str = "-rw-r--r--";
    pub const OWNER: &str = "root";
    pub const GROUP: &str = "root";
    pub const MODIFIED: &str = "Jan  1 00:00";
    /// Block size used for the `total` line.
    pub const BLOCK_SIZE: usize = 4096;
}

// =============================================================================
// Boot Sequence Configuration
// =============================================================================

/// Boot sequence pacing constants (milliseconds).
pub mod boot {
    /// Delay before the first line on page load.
    pub const INITIAL_DELAY_MS: u32 = 0;
    /// Delay between consecutive boot lines.
    pub const LINE_DELAY_MS: u32 = 150;
    /// Settle delay before a reset run starts over.
    pub const RESET_DELAY_MS: u32 = 300;
}

// =============================================================================
// Language Collaborator
// =============================================================================

/// localStorage key for the selected display language.
pub const LANG_STORAGE_KEY: &str = "lang";

/// Key that toggles the display language. Ignored while typing in a field.
pub const LANG_TOGGLE_KEY: &str = "l";

/// Label fallbacks for the theme toggle, naming the theme it switches to.
pub mod theme_labels {
    pub const LIGHT: &str = "☀ Light";
    pub const DARK: &str = "☾ Dark";
}

// =============================================================================
// Theme Collaborator
// =============================================================================

/// localStorage key for an explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Key that toggles the color theme. Ignored while typing in a field.
pub const THEME_TOGGLE_KEY: &str = "t";

/// Media query for the system color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};
