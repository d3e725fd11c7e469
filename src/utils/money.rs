//! Brazilian-real amounts: `1.234,56` with `.` grouping and `,` decimals.

const VALUE_MARKER: &str = "Valor: R$";
const CURRENCY: &str = "R$";

/// Largest amount accepted from a form, the CLI or an import.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Cents for an amount in `0..=MAX_AMOUNT`; `None` otherwise (NaN included).
pub fn checked_cents(value: f64) -> Option<i64> {
    (0.0..=MAX_AMOUNT).contains(&value).then(|| to_cents(value))
}

pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// 1234.5 → "1.234,50"
pub fn format_amount(value: f64) -> String {
    format_cents(to_cents(value))
}

pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let digits = (abs / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped},{:02}", abs % 100)
}

/// 1234.5 → "R$ 1.234,50"
pub fn format_brl(value: f64) -> String {
    format!("{CURRENCY} {}", format_amount(value))
}

/// Reads an amount back from a sheet cell or a budget blob.
///
/// Accepted shapes:
/// - `Trat:... | Pag:PIX | Valor: R$ 1.234,56` (only the part after the marker is read)
/// - `R$ 1.234,56`, `1234,56`, `1.234`
/// - the legacy dot-decimal form `150.0` / `150.25`
///
/// Anything else yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let mut s = text;
    if let Some((_, after)) = s.split_once(VALUE_MARKER) {
        s = after;
    }
    if let Some((before, _)) = s.split_once('|') {
        s = before;
    }

    let cleaned: String = s
        .replace(CURRENCY, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }

    let normalized = if let Some((int_part, frac)) = body.split_once(',') {
        if frac.contains(',') || frac.contains('.') || !valid_grouping(int_part) {
            return None;
        }
        format!("{}.{}", int_part.replace('.', ""), frac)
    } else if is_dot_decimal(body) {
        body.to_string()
    } else {
        if !valid_grouping(body) {
            return None;
        }
        body.replace('.', "")
    };

    let value: f64 = normalized.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `150.0`, `99.90`: exactly one dot followed by one or two digits.
fn is_dot_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((int_part, frac)) => {
            !int_part.is_empty() && !frac.contains('.') && (1..=2).contains(&frac.len())
        }
        None => false,
    }
}

/// Digits optionally grouped by dots in blocks of three: `1`, `1234`, `1.234.567`.
fn valid_grouping(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let mut groups = s.split('.');
    let head = groups.next().unwrap_or_default();
    if head.is_empty() || (s.contains('.') && head.len() > 3) {
        return false;
    }
    groups.all(|g| g.len() == 3)
}
