//! Chase credit card statements.
//!
//! Rows after `pdftotext -raw` carry an `MM/DD` date and a plain amount:
//!   01/23 AMAZON MKTPLACE PMTS AMZN.COM/BILL WA 12.34
//!   Order Number 123-4567890-1234567
//!   01/23 AMAZON MARKETPLACE AMZN.COM/BILLWA 4.56 7,890
//!
//! The third shape is a rewards line (points after the amount). The due date
//! is printed as `Payment Due Date: MM/DD/YY`; the colon is what separates it
//! from the Amex anchor.

use regex::Regex;

use super::{IssuerFormat, ORDER_NUMBER, TRAILER};
use crate::fields::DateStyle;
use crate::types::Issuer;

pub fn format() -> Result<IssuerFormat, regex::Error> {
    Ok(IssuerFormat {
        issuer: Issuer::Chase,
        due_date: Regex::new(
            r"Payment\s+Due\s+Date:\s+(?P<month>\d{2})/(?P<day>\d{2})/(?P<year>\d{2})",
        )?,
        line_item: Regex::new(
            &[
                r"^\s*(?P<date>\d{2}/\d{2})\s+",
                r"(?P<description>.+)\s+",
                r"(?P<amount>-?[\d,]+\.\d{2})",
                TRAILER,
                r"(?:\s|$)",
            ]
            .concat(),
        )?,
        header: Regex::new(r"^\s*(?P<date>\d{2}/\d{2})\s+(?P<description>\S.*)$")?,
        bare_amount: Regex::new(r"^\s*-?[\d,]+\.\d{2}\s*$")?,
        skip: None,
        order_number: Regex::new(ORDER_NUMBER)?,
        carried: None,
        date_style: DateStyle::Numeric,
        needs_year: true,
    })
}
