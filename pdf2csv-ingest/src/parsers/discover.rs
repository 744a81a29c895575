//! Discover statements.
//!
//! Rows carry transaction and post dates as spelled months:
//!   Jan 5 Jan 6 TRADER JOE S #123 AUSTIN TX 41.07
//! Interest is charged on an undated line that belongs to the last row:
//!   INTEREST CHARGE ON PURCHASES $ 3.21

use regex::Regex;

use super::{IssuerFormat, ORDER_NUMBER, TRAILER};
use crate::fields::DateStyle;
use crate::types::Issuer;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

pub fn format() -> Result<IssuerFormat, regex::Error> {
    let dates = [
        r"^\s*(?P<date>",
        MONTH,
        r"\s\d{1,2})\s+",
        MONTH,
        r"\s\d{1,2}\s+",
    ]
    .concat();

    Ok(IssuerFormat {
        issuer: Issuer::Discover,
        due_date: Regex::new(
            r"Payment\s+Due\s+Date?\s+(?P<month>\w+)\s(?P<day>\d{2}),\s(?P<year>\d{4})",
        )?,
        line_item: Regex::new(
            &[
                dates.as_str(),
                r"(?P<description>.+)\s+",
                r"(?P<amount>-?\$?[\d,]+\.\d{2})",
                TRAILER,
                r"\s*$",
            ]
            .concat(),
        )?,
        header: Regex::new(&[dates.as_str(), r"(?P<description>\S.*)$"].concat())?,
        bare_amount: Regex::new(r"^\s*-?\$?\s?[\d,]+\.\d{2}\s*$")?,
        skip: None,
        order_number: Regex::new(ORDER_NUMBER)?,
        carried: Some(Regex::new(
            r"(?P<description>INTEREST\s+CHARGE\s+ON\s+PURCHASES)\s+\$?\s*(?P<amount>-?[\d,]+\.\d{2})",
        )?),
        date_style: DateStyle::SpelledMonth,
        needs_year: true,
    })
}
