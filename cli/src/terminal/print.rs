//! Terminal output.
//!
//! Everything the user is meant to read goes through [`print`], which emits an
//! event on [`PRINT_TARGET`]. The log filter always lets that target through,
//! whatever the quiet level or `RUST_LOG` say.

use std::cell::Cell;
use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "solid::print";

thread_local! {
    /// Column the values of [`key_value`] lines are aligned to.
    pub static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    print("");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title: String = format!("SOLID v{}", env!("CARGO_PKG_VERSION"));
    print(&titled_rule(&title, "═"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&titled_rule(&msg.to_uppercase(), "─"));
}

/// `───⟦ TITLE ⟧───` spanning [`LINE_WIDTH`] columns.
fn titled_rule(title: &str, fill: &str) -> String {
    let framed: String = format!("⟦ {title} ⟧");
    let free: usize = LINE_WIDTH.saturating_sub(framed.width());
    let left: usize = free / 2;

    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        framed.bright_green().bold(),
        fill.repeat(free - left).color(colors::SEPARATOR)
    )
}

pub fn key_value(key: &str, value: impl Display) {
    let dots: String = ".".repeat((KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

/// `[idx] name` followed by one branch per detail.
pub fn tree(idx: usize, name: &str, details: &[(&str, ColoredString)]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(key_width - key.len() + 1);
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

/// Prints the outcome of a command. Shown at every quiet level.
pub fn result(msg: &str, q_level: u8) {
    for line in result_lines(msg, q_level) {
        print(&line);
    }
}

/// A separator and the centred message, or just the message when quiet.
pub fn result_lines(msg: &str, q_level: u8) -> Vec<String> {
    if q_level > 0 {
        return vec![msg.to_string()];
    }

    let pad: String = " ".repeat(LINE_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    vec![
        "═".repeat(LINE_WIDTH).color(colors::SEPARATOR).to_string(),
        format!("{pad}{msg}"),
    ]
}

pub fn number(value: f64) -> ColoredString {
    format!("{value:.4}").color(colors::NUMBER)
}

pub fn footer(q_level: u8) {
    if q_level == 0 {
        print(&"═".repeat(LINE_WIDTH).color(colors::SEPARATOR).to_string());
    }
}
