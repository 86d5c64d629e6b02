/// Format a profit with thousands separators, keeping the sign of losses.
///
/// # Examples
///
/// ```
/// use ledger_core::formatting::format_profit;
///
/// assert_eq!(format_profit(0), "0");
/// assert_eq!(format_profit(1234567), "1,234,567");
/// assert_eq!(format_profit(-9876), "-9,876");
/// ```
pub fn format_profit(value: i64) -> String {
    // unsigned_abs keeps i64::MIN representable.
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a profit with an explicit sign for gains, e.g. `"+1,200"`.
///
/// Zero is rendered without a sign.
///
/// ```
/// use ledger_core::formatting::format_signed_profit;
///
/// assert_eq!(format_signed_profit(1200), "+1,200");
/// assert_eq!(format_signed_profit(-5), "-5");
/// assert_eq!(format_signed_profit(0), "0");
/// ```
pub fn format_signed_profit(value: i64) -> String {
    if value > 0 {
        format!("+{}", format_profit(value))
    } else {
        format_profit(value)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
