/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// GREY for empty or placeholder cells ("-", "Nada"), no colour otherwise.
pub fn color_for_placeholder(value: &str) -> &'static str {
    if is_placeholder(value) { GREY } else { "" }
}

/// Profit color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Status label color: scheduled rows in yellow, completed intakes in green.
pub fn color_for_status(label: &str) -> &'static str {
    match label {
        "Agendado" => YELLOW,
        "Completo" => GREEN,
        _ => MAGENTA,
    }
}

fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "-" || v == "Nada"
}
