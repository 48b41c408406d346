//! Display formatting for monetary amounts.

use rust_decimal::Decimal;

/// Format an amount with thousands separators and two decimal places,
/// e.g. `1,200,000.00`.
pub fn format_amount(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

/// Format an amount as rupiah, e.g. `Rp1,200,000.00`.
pub fn format_rupiah(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-Rp{}", format_amount(amount.abs()))
    } else {
        format!("Rp{}", format_amount(amount))
    }
}
