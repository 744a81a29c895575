//! Due-date anchor: the one labeled date that supplies the statement year.

use chrono::{Month, NaiveDate};

use crate::parsers::IssuerFormat;
use crate::types::Issuer;

/// The due (or closing balance) date found in a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDate {
    issuer: Issuer,
    year: String,
    date: Option<NaiveDate>,
}

impl DueDate {
    pub fn new(issuer: Issuer, year: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            issuer,
            year: year.into(),
            date,
        }
    }

    /// Issuer whose anchor pattern matched.
    pub fn issuer(&self) -> Issuer {
        self.issuer
    }

    /// Year exactly as printed (two or four digits).
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Calendar date, when the matched fields form a valid one.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Try each format's anchor in order; the first match wins.
pub fn find_due_date<'a, I>(formats: I, text: &str) -> Option<DueDate>
where
    I: IntoIterator<Item = &'a IssuerFormat>,
{
    formats.into_iter().find_map(|format| {
        let caps = format.due_date_pattern().captures(text)?;
        let date = anchor_date(&caps["month"], &caps["day"], &caps["year"]);
        Some(DueDate::new(format.issuer(), &caps["year"], date))
    })
}

fn anchor_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month = match month.parse::<u32>() {
        Ok(m) => m,
        Err(_) => month.parse::<Month>().ok()?.number_from_month(),
    };
    let day: u32 = day.parse().ok()?;
    let mut year: i32 = year.parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::FormatRegistry;

    fn find(text: &str) -> Option<DueDate> {
        let registry = FormatRegistry::new().unwrap();
        find_due_date(registry.iter(), text)
    }

    #[test]
    fn test_chase_anchor() {
        let due = find("New Balance $1,234.56\nPayment Due Date: 02/15/23\n").unwrap();
        assert_eq!(due.issuer(), Issuer::Chase);
        assert_eq!(due.year(), "23");
        assert_eq!(due.date(), NaiveDate::from_ymd_opt(2023, 2, 15));
    }

    #[test]
    fn test_amex_anchor_without_trailing_e() {
        // "Payment Due Dat" only satisfies the Amex pattern
        let due = find("Payment Due Dat 03/01/24").unwrap();
        assert_eq!(due.issuer(), Issuer::Amex);
        assert_eq!(due.year(), "24");
    }

    #[test]
    fn test_discover_anchor() {
        let due = find("Payment Due Date January 25, 2023").unwrap();
        assert_eq!(due.issuer(), Issuer::Discover);
        assert_eq!(due.year(), "2023");
        assert_eq!(due.date(), NaiveDate::from_ymd_opt(2023, 1, 25));
    }

    #[test]
    fn test_boa_anchor() {
        let due = find("Beginning balance on January 01, 2023\nEnding balance on January 31, 2023").unwrap();
        assert_eq!(due.issuer(), Issuer::BankOfAmerica);
        assert_eq!(due.year(), "2023");
    }

    #[test]
    fn test_invalid_calendar_date_still_yields_year() {
        let due = find("Payment Due Date: 13/45/23").unwrap();
        assert_eq!(due.year(), "23");
        assert_eq!(due.date(), None);
    }

    #[test]
    fn test_no_anchor() {
        assert!(find("Statement closing 01/31/23").is_none());
    }

    #[test]
    fn test_chase_and_amex_anchors_are_disjoint() {
        assert_eq!(find("Payment Due Date: 02/15/23").unwrap().issuer(), Issuer::Chase);
        assert_eq!(find("Payment Due Date 02/15/23").unwrap().issuer(), Issuer::Amex);
    }

    #[test]
    fn test_preferred_order() {
        let registry = FormatRegistry::new().unwrap();
        let text = "Payment Due Date January 25, 2023\nEnding balance on January 31, 2022";
        let first = find_due_date(registry.anchor_order(None), text).unwrap();
        assert_eq!(first.issuer(), Issuer::Discover);
        assert_eq!(first.year(), "2023");
        let boa = find_due_date(registry.anchor_order(Some(Issuer::BankOfAmerica)), text).unwrap();
        assert_eq!(boa.issuer(), Issuer::BankOfAmerica);
        assert_eq!(boa.year(), "2022");
    }
}
