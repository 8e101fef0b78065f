// Locale display conventions for money, counts, percentages and durations.
// en-US: "$1,234", "1,234", "3.84%". cs-CZ: "1 234 Kč", "1 234", "3,84 %"
// with no-break spaces. Money and counts never show decimals.
use shared::models::{Currency, Language};
use shared::utils::{format_decimal, format_whole};

pub const NBSP: char = '\u{a0}';

pub fn format_money(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Usd => {
            let (negative, digits) = format_whole(amount, ',');
            format!("{}${}", if negative { "-" } else { "" }, digits)
        }
        Currency::Czk => {
            let (negative, digits) = format_whole(amount, NBSP);
            format!("{}{}{}Kč", if negative { "-" } else { "" }, digits, NBSP)
        }
    }
}

pub fn format_count(value: f64, language: Language) -> String {
    let (negative, digits) = format_whole(value, group_separator(language));
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

pub fn format_percent(value: f64, decimals: usize, language: Language) -> String {
    match language {
        Language::En => format!("{}%", format_decimal(value, decimals, '.', ',')),
        Language::Cz => format!("{}{}%", format_decimal(value, decimals, ',', NBSP), NBSP),
    }
}

/// "4m 12s" style. Units are the same in both languages.
pub fn format_duration_secs(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    let (minutes, secs) = (total / 60, total % 60);
    if minutes == 0 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

fn group_separator(language: Language) -> char {
    match language {
        Language::En => ',',
        Language::Cz => NBSP,
    }
}
