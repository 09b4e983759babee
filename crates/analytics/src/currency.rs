//! en-US dollar formatting for display layers.

/// Format an amount as US dollars: `$1,234.50`, `-$3.00`.
///
/// Always two fraction digits; halves of a cent round away from zero.
pub fn format_usd(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}$∞");
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}${}.{:02}", group_thousands(dollars), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
