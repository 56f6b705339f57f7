//! Boot sequence driver
//!
//! Paces the session's boot lines with browser timers. At most one boot timer
//! is pending at any time; starting a new run cancels the previous timer, and
//! the session rejects any tick carrying a ticket from an earlier run.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::boot::{INITIAL_DELAY_MS, LINE_DELAY_MS, RESET_DELAY_MS};
use crate::core::{BootProgress, BootTicket, Cancel};

impl Cancel for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

/// Run the boot sequence on page load.
pub fn run(ctx: AppContext) {
    start(ctx, INITIAL_DELAY_MS);
}

/// Restart the boot sequence in the current language.
///
/// Output is cleared immediately; history survives.
pub fn reset(ctx: AppContext) {
    start(ctx, RESET_DELAY_MS);
}

fn start(ctx: AppContext, delay_ms: u32) {
    ctx.terminal.boot_task.update_value(|task| task.cancel());

    let lines = ctx.boot_lines();
    let prompt = ctx.prompt();
    let ticket = ctx.terminal.session.try_update(|session| {
        session.set_prompt(prompt);
        session.start_boot(lines)
    });

    if let Some(ticket) = ticket {
        schedule(ctx, ticket, delay_ms);
    }
}

fn schedule(ctx: AppContext, ticket: BootTicket, delay_ms: u32) {
    let timeout = Timeout::new(delay_ms, move || tick(ctx, ticket));
    ctx.terminal
        .boot_task
        .update_value(|task| task.replace(timeout));
}

fn tick(ctx: AppContext, ticket: BootTicket) {
    let progress = ctx
        .terminal
        .session
        .try_update(|session| session.resume_boot(ticket))
        .flatten();

    match progress {
        Some(BootProgress::Continue(next)) => schedule(ctx, next, LINE_DELAY_MS),
        Some(BootProgress::Finished) => ctx.terminal.boot_task.update_value(|task| {
            task.release();
        }),
        None => log::debug!("boot: ignored stale timer"),
    }
}
