//! Bank of America statements.
//!
//! Rows carry transaction and posting dates as `MM/DD/YY`; the amount is
//! often pushed to the next line, sometimes without cents:
//!   01/05/23 01/06/23 STARBUCKS STORE 0123 4.56
//!   01/07/23 01/09/23 AIRBNB HMXYZ
//!   AIRBNB.COM CA
//!   1,250

use regex::Regex;

use super::{IssuerFormat, ORDER_NUMBER, TRAILER};
use crate::fields::DateStyle;
use crate::types::Issuer;

pub fn format() -> Result<IssuerFormat, regex::Error> {
    Ok(IssuerFormat {
        issuer: Issuer::BankOfAmerica,
        due_date: Regex::new(
            r"Ending\s+balance\s+on?\s+(?P<month>\w+)\s(?P<day>\d{2}),\s(?P<year>\d{4})",
        )?,
        line_item: Regex::new(
            &[
                r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
                r"(?P<description>.+)\s+",
                r"(?P<amount>-?[\d,]+\.\d{2})",
                TRAILER,
                r"\s*$",
            ]
            .concat(),
        )?,
        header: Regex::new(r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\*?\s+(?P<description>[^$\s].*)$")?,
        bare_amount: Regex::new(r"^\s*-?(?:0|[1-9]\d{0,2}(?:,?\d{3})*)(?:\.\d{2})?\s*$")?,
        skip: None,
        order_number: Regex::new(ORDER_NUMBER)?,
        carried: None,
        date_style: DateStyle::Numeric,
        needs_year: false,
    })
}
