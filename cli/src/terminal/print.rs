use std::cell::Cell;
use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use nettopo_common::config::Config;
use serde::Serialize;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

const LOGO: &str = r#"
              _   _
   _ __   ___| |_| |_ ___  _ __   ___
  | '_ \ / _ \ __| __/ _ \| '_ \ / _ \
  | | | |  __/ |_| || (_) | |_) | (_) |
  |_| |_|\___|\__|\__\___/| .__/ \___/
                          |_|
"#;

/// Sends one line of finished output through the log formatter.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Writes `value` as pretty JSON straight to stdout, bypassing the formatter.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Repeats `fill` on both sides of `text` to span [`TOTAL_WIDTH`] columns.
fn centred(text: &str, fill: &str) -> (String, String) {
    let free: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(text));
    let left: usize = free / 2;
    (fill.repeat(left), fill.repeat(free - left))
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 || cfg.json {
        return;
    }

    let title: String = format!("⟦ NETTOPO v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, right) = centred(&title, "═");

    for line in LOGO.lines().skip(1) {
        print(&format!("{}", line.color(colors::PRIMARY)));
    }
    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.bright_green().bold(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let (left, right) = centred(&title, "─");
    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.bright_green(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn fat_separator() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

/// Sets the key column used by [`aligned_line`] to the widest of `keys`.
pub fn set_key_width(keys: &[&str]) {
    KEY_WIDTH.set(keys.iter().map(|key| key.width()).max().unwrap_or(0));
}

/// `> Key.....: value`, keys padded to the width set by [`set_key_width`].
pub fn aligned_line(key: &str, value: impl Display) {
    let dots: String = ".".repeat((KEY_WIDTH.get() + 1).saturating_sub(key.width()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status(msg: impl AsRef<str>) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg.as_ref()));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::NODE)
    ));
}

/// Prints `(key, value)` pairs as the branches of the last [`tree_head`].
pub fn as_tree_one_level(branches: Vec<(String, ColoredString)>) {
    let key_width: usize = branches.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    let last: usize = branches.len().saturating_sub(1);

    for (i, (key, value)) in branches.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        let dots: String = ".".repeat(key_width + 1 - key.width());
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let (left, right) = centred(msg, " ");
    print(&format!("{left}{msg}{right}"));
}

/// Boxed notice shown when a query produced nothing.
pub fn no_results(msg: &str) {
    let inner: usize = TOTAL_WIDTH - 2;
    let text: String = format!("{:^inner$}", msg.to_uppercase());
    let rule: String = "─".repeat(inner);
    print(&format!("{}", format!("╭{rule}╮").red()));
    print(&format!("{}{}{}", "│".red(), text.red().bold(), "│".red()));
    print(&format!("{}", format!("╰{rule}╯").red()));
}

pub fn end_of_program() {
    fat_separator();
}
