//! Formatting utilities used for CLI and document outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Boolean answers as stored in the sheets.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Sim" } else { "Não" }
}

/// Measurements are stored without trailing zeros: 62.5 → "62.5", 70.0 → "70".
pub fn measure(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Display-width aware right padding (accents and emoji count correctly).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut a string to `width` columns, ending with "…" when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}
