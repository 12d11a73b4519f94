//! Number formatting for table cells, the detail window and the price tape.

use {
    super::format_age_minutes,
    crate::domain::{SortKey, TokenRecord},
};

const MISSING: &str = "—";

/// `1234.5` -> `1,234.50`
fn group_thousands(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    grouped
}

/// Most decimals shown for a sub-cent price.
const MAX_PRICE_DECIMALS: usize = 12;

/// USD with thousands separators. Two decimals from $1 up, four from $0.01.
/// Sub-cent prices keep four significant digits without trailing zeros
/// (`$0.00231`, `$0.0000412`).
pub fn format_price(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs == 0.0 || abs >= 1.0 {
        return format!("{}${}", sign, group_thousands(abs, 2));
    }
    if abs >= 0.01 {
        return format!("{}${}", sign, group_thousands(abs, 4));
    }

    let leading = (-abs.log10()).ceil() as usize;
    let decimals = (leading + 3).min(MAX_PRICE_DECIMALS);
    let digits = format!("{:.*}", decimals, abs);
    let trimmed = digits.trim_end_matches('0').trim_end_matches('.');
    format!("{}${}", sign, trimmed)
}

/// Compact USD with two decimals: `$345.00`, `$12.35K`, `$1.20B`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    for (scale, suffix) in UNITS {
        // Round first so 999_999 reads `$1.00M`, not `$1000.00K`.
        let scaled = (abs / scale * 100.0).round() / 100.0;
        if scaled >= 1.0 {
            return format!("{}${:.2}{}", sign, scaled, suffix);
        }
    }
    format!("{}${:.2}", sign, abs)
}

/// Signed percentage with one decimal: `+2.3%`, `-0.4%`, `0.0%`.
/// `pct` is already in percent units.
pub fn format_percent(pct: f64) -> String {
    let rounded = (pct * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0.0%".to_string()
    } else if rounded > 0.0 {
        format!("+{:.1}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

/// Table variant: a flat change reads as `-`.
pub fn format_change_cell(pct: f64) -> String {
    if pct == 0.0 {
        "-".to_string()
    } else {
        format_percent(pct)
    }
}

pub fn format_count(value: u64) -> String {
    group_thousands(value as f64, 0)
}

/// Cell text for one column of one token. Missing optional values render as a dash.
pub fn format_field(key: SortKey, token: &TokenRecord) -> String {
    match key {
        SortKey::Name => token.name.clone(),
        SortKey::Price => format_price(token.price),
        SortKey::PriceChange24h => format_change_cell(token.price_change_24h),
        SortKey::Tvl => format_compact(token.tvl),
        SortKey::Volume24h => format_compact(token.volume_24h),
        SortKey::MarketCap => token.market_cap.map(format_compact).unwrap_or_else(missing),
        SortKey::Liquidity => token.liquidity.map(format_compact).unwrap_or_else(missing),
        SortKey::Holders => token.holders.map(format_count).unwrap_or_else(missing),
        SortKey::DevHoldingPct => token
            .dev_holding_pct
            .map(|p| format!("{:.1}%", p))
            .unwrap_or_else(missing),
        SortKey::AgeMinutes => token
            .age_minutes
            .map(format_age_minutes)
            .unwrap_or_else(missing),
    }
}

fn missing() -> String {
    MISSING.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn prices() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1.005_1), "$1.01");
        assert_eq!(format_price(3450.123), "$3,450.12");
        assert_eq!(format_price(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(0.0000412), "$0.0000412");
        assert_eq!(format_price(0.00231), "$0.00231");
        assert_eq!(format_price(0.0009), "$0.0009");
        assert_eq!(format_price(0.001), "$0.001");
        assert_eq!(format_price(0.004_567_89), "$0.004568");
        assert_eq!(format_price(-0.00231), "-$0.00231");
    }

    #[test]
    fn compact() {
        assert_eq!(format_compact(345.0), "$345.00");
        assert_eq!(format_compact(12_346.0), "$12.35K");
        assert_eq!(format_compact(1_200_000_000.0), "$1.20B");
        assert_eq!(format_compact(999_999.0), "$1.00M");
    }

    #[test]
    fn percents() {
        assert_eq!(format_percent(2.34), "+2.3%");
        assert_eq!(format_percent(-0.44), "-0.4%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.01), "0.0%");
        assert_eq!(format_change_cell(0.0), "-");
        assert_eq!(format_change_cell(-1.25), "-1.3%");
    }

    #[test]
    fn counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1_204), "1,204");
        assert_eq!(format_count(987_654_321), "987,654,321");
    }

    #[test]
    fn fields() {
        let mut t = TokenRecord::new("1", "WETH", Category::New);
        t.price = 3450.5;
        t.tvl = 1_500_000.0;
        assert_eq!(format_field(SortKey::Name, &t), "WETH");
        assert_eq!(format_field(SortKey::Price, &t), "$3,450.50");
        assert_eq!(format_field(SortKey::Tvl, &t), "$1.50M");
        assert_eq!(format_field(SortKey::PriceChange24h, &t), "-");
        assert_eq!(format_field(SortKey::Holders, &t), "—");

        t.holders = Some(1204);
        t.age_minutes = Some(75);
        t.dev_holding_pct = Some(4.2);
        assert_eq!(format_field(SortKey::Holders, &t), "1,204");
        assert_eq!(format_field(SortKey::AgeMinutes, &t), "1h 15m");
        assert_eq!(format_field(SortKey::DevHoldingPct, &t), "4.2%");
    }
}
