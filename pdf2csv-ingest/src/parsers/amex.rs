//! American Express statements.
//!
//! Dates are full `MM/DD/YY` (optionally starred) and amounts carry `$`.
//! Long merchant names wrap, leaving the amount on its own line:
//!   02/03/23* UBER TRIP HELP.UBER.COM
//!   SAN FRANCISCO CA
//!   $23.10

use regex::Regex;

use super::{IssuerFormat, ORDER_NUMBER, TRAILER};
use crate::fields::DateStyle;
use crate::types::Issuer;

pub fn format() -> Result<IssuerFormat, regex::Error> {
    Ok(IssuerFormat {
        issuer: Issuer::Amex,
        due_date: Regex::new(
            r"Payment\s+Due\s+Date?\s+(?P<month>\d{2})/(?P<day>\d{2})/(?P<year>\d{2})",
        )?,
        line_item: Regex::new(
            &[
                r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\*?\s+",
                r"(?P<description>[^$\s].*)\s+",
                r"(?P<amount>-?\$[\d,]+\.\d{2})",
                TRAILER,
                r"\s*$",
            ]
            .concat(),
        )?,
        header: Regex::new(r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\*?\s+(?P<description>[^$\s].*)$")?,
        bare_amount: Regex::new(r"^\s*-?\$[\d,]+\.\d{2}\s*$")?,
        // "Closing Date 01/31/23 Account Ending 1-23456" looks like a header
        skip: Some(Regex::new(r"Account\s+Ending")?),
        order_number: Regex::new(ORDER_NUMBER)?,
        carried: None,
        date_style: DateStyle::Numeric,
        needs_year: false,
    })
}
