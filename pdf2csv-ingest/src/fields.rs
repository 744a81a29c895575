//! Field normalization shared by every issuer format.

use chrono::Month;

/// How an issuer writes the date column of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `MM/DD` or `MM/DD/YY`, used verbatim.
    Numeric,
    /// `Jan 5` / `January 05`, rewritten as `MM/DD`.
    SpelledMonth,
}

impl DateStyle {
    pub fn normalize(&self, raw: &str) -> Option<String> {
        match self {
            DateStyle::Numeric => {
                let s = raw.trim();
                if s.is_empty() { None } else { Some(s.to_string()) }
            }
            DateStyle::SpelledMonth => spelled_month_day(raw),
        }
    }
}

/// Example: "Jul 20" -> "07/20"
fn spelled_month_day(s: &str) -> Option<String> {
    let mut parts = s.split_whitespace();
    let month: Month = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{:02}/{:02}", month.number_from_month(), day))
}

/// Append the statement year to a partial `MM/DD` date.
pub fn complete_date(date: &str, year: &str, needs_year: bool) -> String {
    if needs_year {
        format!("{date}/{year}")
    } else {
        date.to_string()
    }
}

/// Normalize a monetary figure to `-?\d+\.\d{2}`.
///
/// Currency symbols, thousands separators and inner whitespace are dropped;
/// an amount without cents gets `.00`.
pub fn normalize_amount(raw: &str) -> Option<String> {
    let s: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .collect();

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.as_str()),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, "00"));

    let is_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int) || frac.len() != 2 || !is_digits(frac) {
        return None;
    }

    let sign = if negative { "-" } else { "" };
    Some(format!("{sign}{int}.{frac}"))
}
