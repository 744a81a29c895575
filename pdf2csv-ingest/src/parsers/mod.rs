//! Bank-specific line formats.
//!
//! Each issuer module supplies the patterns for one statement layout; the
//! shared state machine in [`crate::recognizer`] drives all of them.

use regex::Regex;

use crate::fields::{DateStyle, normalize_amount};
use crate::recognizer::{Header, LineFormat, LineItem};
use crate::types::Issuer;

pub mod amex;
pub mod boa;
pub mod chase;
pub mod discover;

/// Optional annotation after the amount: an order number or a points figure.
pub(crate) const TRAILER: &str =
    r"(?:\s*Order\s+Number:?\s+(?P<order_num>\S+)|[ ](?P<points>[1-9][\d,]+))?";

/// `Order Number <id>` anywhere in a description or continuation line.
pub(crate) const ORDER_NUMBER: &str = r"\s*Order\s+Number:?\s+(?P<order_num>\S+)";

/// Cut the first `ORDER_NUMBER` match out of `text`, returning the remaining
/// words and the order id.
pub(crate) fn split_order_number(re: &Regex, text: &str) -> Option<(String, String)> {
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let rest = [&text[..whole.start()], &text[whole.end()..]]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some((rest, caps["order_num"].to_string()))
}

/// Patterns describing one issuer's statement layout.
///
/// `line_item` must capture `date`, `description` and `amount` (plus the
/// optional `points`/`order_num` of [`TRAILER`]); `header` captures `date`
/// and `description`; `due_date` captures `month`, `day` and `year`.
#[derive(Debug, Clone)]
pub struct IssuerFormat {
    issuer: Issuer,
    due_date: Regex,
    line_item: Regex,
    header: Regex,
    bare_amount: Regex,
    skip: Option<Regex>,
    carried: Option<Regex>,
    order_number: Regex,
    date_style: DateStyle,
    needs_year: bool,
}

impl IssuerFormat {
    pub fn issuer(&self) -> Issuer {
        self.issuer
    }

    pub(crate) fn due_date_pattern(&self) -> &Regex {
        &self.due_date
    }
}

impl LineFormat for IssuerFormat {
    fn line_item(&self, line: &str) -> Option<LineItem> {
        let caps = self.line_item.captures(line)?;
        Some(LineItem {
            date: self.date_style.normalize(&caps["date"])?,
            description: caps["description"].trim().to_string(),
            amount: normalize_amount(&caps["amount"])?,
            points: caps.name("points").map(|m| m.as_str().to_string()),
            order_num: caps.name("order_num").map(|m| m.as_str().to_string()),
        })
    }

    fn header(&self, line: &str) -> Option<Header> {
        let caps = self.header.captures(line)?;
        Some(Header {
            date: self.date_style.normalize(&caps["date"])?,
            description: caps["description"].trim().to_string(),
        })
    }

    fn bare_amount(&self, line: &str) -> Option<String> {
        if !self.bare_amount.is_match(line) {
            return None;
        }
        normalize_amount(line)
    }

    fn order_number(&self, text: &str) -> Option<(String, String)> {
        split_order_number(&self.order_number, text)
    }

    fn needs_year(&self) -> bool {
        self.needs_year
    }

    fn is_skipped(&self, line: &str) -> bool {
        self.skip.as_ref().is_some_and(|re| re.is_match(line))
    }

    fn carried_item(&self, line: &str) -> Option<(String, String)> {
        let caps = self.carried.as_ref()?.captures(line)?;
        Some((
            caps["description"].trim().to_string(),
            normalize_amount(&caps["amount"])?,
        ))
    }
}

/// Compiled formats for every [`Issuer`], in anchor fallback order.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: [IssuerFormat; 4],
}

impl FormatRegistry {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            formats: [
                chase::format()?,
                amex::format()?,
                discover::format()?,
                boa::format()?,
            ],
        })
    }

    pub fn get(&self, issuer: Issuer) -> &IssuerFormat {
        &self.formats[issuer as usize]
    }

    /// Formats in fixed fallback order.
    pub fn iter(&self) -> impl Iterator<Item = &IssuerFormat> {
        self.formats.iter()
    }

    /// Fallback order with `preferred` (if any) moved to the front.
    pub fn anchor_order(&self, preferred: Option<Issuer>) -> Vec<&IssuerFormat> {
        let mut order: Vec<&IssuerFormat> = Vec::with_capacity(self.formats.len());
        if let Some(issuer) = preferred {
            order.push(self.get(issuer));
        }
        order.extend(self.iter().filter(|f| Some(f.issuer) != preferred));
        order
    }
}
