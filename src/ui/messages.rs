//! Status line helpers for CLI output.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn status_line<T: fmt::Display>(color: &str, tag: &str, msg: T) {
    println!("{}{}{}{} {}", color, BOLD, tag, RESET, msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    status_line(FG_BLUE, "::", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    status_line(FG_GREEN, "ok", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    status_line(FG_YELLOW, "!!", msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{}{} {}", FG_RED, BOLD, "xx", RESET, msg);
}
