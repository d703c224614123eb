/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Yes/no answer coloured green/red.
pub fn colorize_answer(yes: bool) -> String {
    if yes {
        format!("{GREEN}YES{RESET}")
    } else {
        format!("{RED}NO{RESET}")
    }
}

/// Grey out zero amounts so the non-zero rows stand out in tables.
pub fn colorize_amount(value: &str, is_zero: bool) -> String {
    if is_zero {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
