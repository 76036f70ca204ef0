use chrono::NaiveDate;

use crate::types::{BadgeVariant, LoanStatus};

/// compact currency rendering for stat cards and table cells
///
/// billions get two decimals and a `B` suffix, millions zero decimals and
/// an `M` suffix, everything below is comma-grouped with at most three
/// fraction digits
pub fn format_currency(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("{:.2}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("{:.0}M", amount / 1_000_000.0)
    } else {
        group_thousands(amount)
    }
}

/// render a calendar date as `Mon D, YYYY`, e.g. `Jan 20, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// badge variant for a typed status
pub fn badge_variant(status: LoanStatus) -> BadgeVariant {
    match status {
        LoanStatus::Active => BadgeVariant::Success,
        LoanStatus::Paid => BadgeVariant::Info,
        LoanStatus::Overdue => BadgeVariant::Destructive,
    }
}

/// badge variant for a raw status string
///
/// unrecognized strings fall back to `Success`
pub fn badge_variant_for(status: &str) -> BadgeVariant {
    match status {
        "Active" => BadgeVariant::Success,
        "Paid" => BadgeVariant::Info,
        "Overdue" => BadgeVariant::Destructive,
        _ => BadgeVariant::Success,
    }
}

/// css class for a bank badge; unknown banks fall back to `bank-a`
pub fn bank_badge_class(bank: &str) -> &'static str {
    match bank {
        "Bank A" => "bank-a",
        "Bank B" => "bank-b",
        "Bank C" => "bank-c",
        "Bank D" => "bank-d",
        "Bank E" => "bank-e",
        _ => "bank-a",
    }
}

/// comma-group a number, keeping at most three rounded fraction digits
fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_currency_billions() {
        assert_eq!(format_currency(1_000_000_000.0), "1.00B");
        assert_eq!(format_currency(1_234_567_890.0), "1.23B");
        assert_eq!(format_currency(62_671_232_880.0), "62.67B");
    }

    #[test]
    fn test_currency_millions() {
        assert_eq!(format_currency(1_000_000.0), "1M");
        assert_eq!(format_currency(6_164_383.56), "6M");
        assert_eq!(format_currency(999_999_999.0), "1000M");
    }

    #[test]
    fn test_currency_grouped() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(950.0), "950");
        assert_eq!(format_currency(1_234.0), "1,234");
        assert_eq!(format_currency(999_999.0), "999,999");
        assert_eq!(format_currency(1_234.5), "1,234.5");
        assert_eq!(format_currency(1_234.5678), "1,234.568");
        assert_eq!(format_currency(-1_234.5), "-1,234.5");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 20)), "Jan 20, 2024");
        assert_eq!(format_date(date(2025, 3, 5)), "Mar 5, 2025");
        assert_eq!(format_date(date(2024, 12, 31)), "Dec 31, 2024");
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(badge_variant(LoanStatus::Active), BadgeVariant::Success);
        assert_eq!(badge_variant(LoanStatus::Paid), BadgeVariant::Info);
        assert_eq!(badge_variant(LoanStatus::Overdue), BadgeVariant::Destructive);
    }

    #[test]
    fn test_unknown_status_falls_back_to_success() {
        assert_eq!(badge_variant_for("Overdue"), BadgeVariant::Destructive);
        assert_eq!(badge_variant_for("Suspended"), BadgeVariant::Success);
        assert_eq!(badge_variant_for(""), BadgeVariant::Success);
    }

    #[test]
    fn test_bank_badge_classes() {
        assert_eq!(bank_badge_class("Bank C"), "bank-c");
        assert_eq!(bank_badge_class("Bank Z"), "bank-a");
    }
}
