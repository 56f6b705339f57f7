//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use chrono::{DateTime, Local};

use crate::config::{
    DATE_FORMAT, REBOOT_DELAY_MS, REBOOT_NOTICE, SUDO_DENIED, WHOAMI_TEXT, long_listing,
};
use crate::core::VirtualFs;
use crate::models::{Fragment, OutputLine};

use super::{Command, CommandResult, FileArg, REGISTRY, SessionEffect};

/// Width of the name column in `help` output.
const HELP_NAME_WIDTH: usize = 8;

/// Everything a command may read while executing.
pub struct ExecContext<'a> {
    pub fs: &'a VirtualFs,
    /// Wall-clock time used by `date`
    pub now: DateTime<Local>,
}

/// Execute a parsed command and return its output.
///
/// Commands never fail outward: user errors become output lines.
/// Side effects (`clear`, `reboot`) are returned, not applied.
pub fn execute_command(cmd: Command, ctx: &ExecContext<'_>) -> CommandResult {
    match cmd {
        Command::Help => execute_help(),
        Command::Whoami => {
            CommandResult::output(WHOAMI_TEXT.lines().map(OutputLine::text).collect())
        }
        Command::Ls { long } => execute_ls(long, ctx.fs),
        Command::Cat(file) => execute_cat(file, ctx.fs),
        Command::Clear => CommandResult::with_effect(vec![], SessionEffect::Clear),
        Command::Date => CommandResult::output(vec![OutputLine::text(
            ctx.now.format(DATE_FORMAT).to_string(),
        )]),
        Command::Reboot => CommandResult::with_effect(
            vec![OutputLine::text(REBOOT_NOTICE)],
            SessionEffect::Reboot {
                delay_ms: REBOOT_DELAY_MS,
            },
        ),
        Command::Sudo => CommandResult::output(vec![OutputLine::error(SUDO_DENIED)]),
        Command::Unknown(name) => CommandResult::output(vec![OutputLine::error(format!(
            "bash: {}: command not found",
            name
        ))]),
    }
}

/// Execute `help` command.
fn execute_help() -> CommandResult {
    let lines = REGISTRY
        .iter()
        .map(|spec| {
            OutputLine::styled(vec![
                Fragment::accent(format!("{:<width$}", spec.name, width = HELP_NAME_WIDTH)),
                Fragment::dim(spec.description),
            ])
        })
        .collect();
    CommandResult::output(lines)
}

/// Execute `ls` command.
fn execute_ls(long: bool, fs: &VirtualFs) -> CommandResult {
    if long {
        return CommandResult::output(vec![OutputLine::preformatted(render_long_listing(fs))]);
    }
    if fs.is_empty() {
        return CommandResult::empty();
    }
    let names: Vec<&str> = fs.list().collect();
    CommandResult::output(vec![OutputLine::text(names.join("  "))])
}

/// Render the synthetic `ls -l` block.
fn render_long_listing(fs: &VirtualFs) -> String {
    let size_width = fs
        .entries()
        .iter()
        .map(|e| e.size().to_string().len())
        .max()
        .unwrap_or(1);
    let total: usize = fs
        .entries()
        .iter()
        .map(|e| e.size().div_ceil(long_listing::BLOCK_SIZE) * (long_listing::BLOCK_SIZE / 1024))
        .sum();

    let mut rows = vec![format!("total {}", total)];
    rows.extend(fs.entries().iter().map(|e| {
        format!(
            "{} 1 {} {} {:>width$} {} {}",
            long_listing::PERMISSIONS,
            long_listing::OWNER,
            long_listing::GROUP,
            e.size(),
            long_listing::MODIFIED,
            e.name,
            width = size_width
        )
    }));
    rows.join("\n")
}

/// Execute `cat` command.
fn execute_cat(file: Option<FileArg>, fs: &VirtualFs) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::output(vec![
            OutputLine::error("cat: missing file operand"),
            OutputLine::text("Usage: cat <file>"),
        ]);
    };

    match fs.get(file.as_str()) {
        Ok(content) => {
            let content = content.strip_suffix('\n').unwrap_or(content);
            if content.is_empty() {
                CommandResult::empty()
            } else if content.contains('\n') {
                CommandResult::output(vec![OutputLine::preformatted(content)])
            } else {
                CommandResult::output(vec![OutputLine::text(content)])
            }
        }
        Err(err) => CommandResult::output(vec![OutputLine::error(format!("cat: {}", err))]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileEntry, FragmentStyle, OutputLineData};
    use chrono::TimeZone;

    fn fs() -> VirtualFs {
        VirtualFs::new([
            FileEntry::new("about.txt", "hello\n"),
            FileEntry::new("tree.txt", "root\n  child\n    leaf\n"),
            FileEntry::new("empty", ""),
        ])
    }

    fn run(cmd: Command, fs: &VirtualFs) -> CommandResult {
        let now = Local
            .with_ymd_and_hms(2026, 10, 18, 9, 5, 3)
            .single()
            .expect("unambiguous local time");
        execute_command(cmd, &ExecContext { fs, now })
    }

    fn texts(result: &CommandResult) -> Vec<String> {
        result.output.iter().map(|l| l.plain_text()).collect()
    }

    #[test]
    fn test_unknown_command_message() {
        let result = run(Command::Unknown("foobar".to_string()), &fs());
        assert_eq!(texts(&result), vec!["bash: foobar: command not found"]);
        assert!(result.effect.is_none());
    }

    #[test]
    fn test_cat_missing_file() {
        let result = run(Command::Cat(Some(FileArg::new("missing.txt"))), &fs());
        assert_eq!(
            texts(&result),
            vec!["cat: missing.txt: No such file or directory"]
        );
    }

    #[test]
    fn test_cat_missing_operand() {
        let result = run(Command::Cat(None), &fs());
        assert_eq!(
            texts(&result),
            vec!["cat: missing file operand", "Usage: cat <file>"]
        );
    }

    #[test]
    fn test_cat_single_line() {
        let result = run(Command::Cat(Some(FileArg::new("about.txt"))), &fs());
        assert_eq!(result.output[0].data, OutputLineData::Text("hello".into()));
    }

    #[test]
    fn test_cat_multiline_preserves_indentation() {
        let result = run(Command::Cat(Some(FileArg::new("tree.txt"))), &fs());
        assert_eq!(result.output.len(), 1);
        assert_eq!(
            result.output[0].data,
            OutputLineData::Preformatted("root\n  child\n    leaf".into())
        );
    }

    #[test]
    fn test_cat_empty_file_prints_nothing() {
        let result = run(Command::Cat(Some(FileArg::new("empty"))), &fs());
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_cat_is_idempotent() {
        let fs = fs();
        let first = run(Command::Cat(Some(FileArg::new("tree.txt"))), &fs);
        let second = run(Command::Cat(Some(FileArg::new("tree.txt"))), &fs);
        assert_eq!(first.output, second.output);
    }

    #[test]
    fn test_ls_short_joins_with_double_space() {
        let result = run(Command::Ls { long: false }, &fs());
        assert_eq!(texts(&result), vec!["about.txt  tree.txt  empty"]);
    }

    #[test]
    fn test_ls_follows_listing_order_for_all_permutations() {
        let names = ["a", "b", "c"];
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let fs = VirtualFs::new(order.iter().map(|&i| FileEntry::new(names[i], "x")));
            let expected: Vec<&str> = order.iter().map(|&i| names[i]).collect();
            let result = run(Command::Ls { long: false }, &fs);
            assert_eq!(texts(&result), vec![expected.join("  ")]);
        }
    }

    #[test]
    fn test_ls_empty_fs() {
        let result = run(Command::Ls { long: false }, &VirtualFs::empty());
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_ls_long_listing() {
        let result = run(Command::Ls { long: true }, &fs());
        let block = texts(&result).remove(0);
        let rows: Vec<&str> = block.lines().collect();
        assert_eq!(rows[0], "total 8");
        assert_eq!(rows[1], "-rw-r--r-- 1 root root  6 Jan  1 00:00 about.txt");
        assert_eq!(rows[2], "-rw-r--r-- 1 root root 22 Jan  1 00:00 tree.txt");
        assert_eq!(rows[3], "-rw-r--r-- 1 root root  0 Jan  1 00:00 empty");
    }

    #[test]
    fn test_help_lists_registry_in_order() {
        let result = run(Command::Help, &fs());
        assert_eq!(result.output.len(), REGISTRY.len());
        match &result.output[0].data {
            OutputLineData::Styled(fragments) => {
                assert_eq!(fragments[0].style, FragmentStyle::Accent);
                assert_eq!(fragments[0].text.trim_end(), "help");
                assert_eq!(fragments[1].style, FragmentStyle::Dim);
            }
            other => panic!("Expected Styled line, got {:?}", other),
        }
    }

    #[test]
    fn test_whoami_block() {
        let result = run(Command::Whoami, &fs());
        assert_eq!(result.output.len(), WHOAMI_TEXT.lines().count());
        assert!(result.output.len() > 1);
    }

    #[test]
    fn test_date_uses_context_time() {
        let result = run(Command::Date, &fs());
        assert_eq!(texts(&result), vec!["Sun Oct 18 09:05:03 2026"]);
    }

    #[test]
    fn test_clear_and_reboot_effects() {
        let clear = run(Command::Clear, &fs());
        assert_eq!(clear.effect, Some(SessionEffect::Clear));
        assert!(clear.output.is_empty());

        let reboot = run(Command::Reboot, &fs());
        assert_eq!(texts(&reboot), vec![REBOOT_NOTICE]);
        assert_eq!(
            reboot.effect,
            Some(SessionEffect::Reboot {
                delay_ms: REBOOT_DELAY_MS
            })
        );
    }

    #[test]
    fn test_sudo_always_denied() {
        let result = run(Command::Sudo, &fs());
        assert_eq!(texts(&result), vec![SUDO_DENIED]);
    }
}
