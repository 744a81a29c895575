//! Multi-line line-item recognizer shared by every issuer format.
//!
//! Statement text is scanned line by line. A line either carries a whole
//! transaction, opens a pending header (date + description, amount on a
//! later line), closes the pending header with a bare amount, or extends the
//! pending description. Everything else is boilerplate and is skipped.

use crate::fields::complete_date;
use crate::types::Transaction;

/// A transaction recognized on a single line. `date` is not year-completed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub points: Option<String>,
    pub order_num: Option<String>,
}

/// Date and description of a transaction whose amount is on a later line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub date: String,
    pub description: String,
}

/// Per-issuer line patterns driving [`scan`].
pub trait LineFormat {
    /// Date, description and amount on one line.
    fn line_item(&self, line: &str) -> Option<LineItem>;

    /// Date and description with no amount.
    fn header(&self, line: &str) -> Option<Header>;

    /// The whole line is a single amount. Returns the normalized figure.
    fn bare_amount(&self, line: &str) -> Option<String>;

    /// Finds an `Order Number <id>` fragment in `text`. Returns the text with
    /// the fragment cut out, and the id.
    fn order_number(&self, text: &str) -> Option<(String, String)>;

    /// True when the date field omits the year.
    fn needs_year(&self) -> bool;

    /// Header-shaped boilerplate that must not become a pending header.
    fn is_skipped(&self, _line: &str) -> bool {
        false
    }

    /// Undated charge (description, amount) that takes the previous line item's date.
    fn carried_item(&self, _line: &str) -> Option<(String, String)> {
        None
    }
}

struct Pending {
    date: String,
    description: String,
    order_num: Option<String>,
}

/// Scan statement text into transactions, in source order.
///
/// Never fails: unmatched lines are skipped, and a pending header that never
/// meets its amount line is dropped.
pub fn scan<F: LineFormat + ?Sized>(format: &F, text: &str, year: &str) -> Vec<Transaction> {
    let needs_year = format.needs_year();
    let mut out: Vec<Transaction> = Vec::new();
    let mut pending: Option<Pending> = None;
    // Set only while the previous line emitted a single-line item.
    let mut just_emitted = false;

    for line in text.lines() {
        let emitted_before = std::mem::take(&mut just_emitted);

        if let Some(mut item) = format.line_item(line) {
            drop_pending(&mut pending, "superseded by line item");
            if let Some((rest, order)) = format.order_number(&item.description) {
                item.description = rest;
                if item.points.is_none() && item.order_num.is_none() {
                    item.order_num = Some(order);
                }
            }
            out.push(Transaction::new(
                complete_date(&item.date, year, needs_year),
                item.description,
                item.amount,
                item.points,
                item.order_num,
            ));
            just_emitted = true;
            continue;
        }

        if let Some(header) = format.header(line) {
            if format.is_skipped(line) {
                continue;
            }
            drop_pending(&mut pending, "replaced by new header");
            let (description, order_num) = match format.order_number(&header.description) {
                Some((rest, order)) => (rest, Some(order)),
                None => (header.description, None),
            };
            pending = Some(Pending {
                date: header.date,
                description,
                order_num,
            });
            continue;
        }

        if let Some((description, amount)) = format.carried_item(line) {
            drop_pending(&mut pending, "superseded by carried item");
            match out.last().map(|t| t.date().to_string()) {
                Some(date) => {
                    out.push(Transaction::new(date, description, amount, None, None));
                    just_emitted = true;
                }
                None => tracing::trace!(line, "carried item before any dated line item"),
            }
            continue;
        }

        if pending.is_some() {
            if let Some(amount) = format.bare_amount(line) {
                if let Some(p) = pending.take() {
                    out.push(Transaction::new(
                        complete_date(&p.date, year, needs_year),
                        p.description,
                        amount,
                        None,
                        p.order_num,
                    ));
                }
                continue;
            }
        }

        if let Some(p) = pending.as_mut() {
            match format.order_number(line) {
                Some((rest, order)) => {
                    p.order_num = Some(order);
                    if !rest.is_empty() {
                        p.description.push(' ');
                        p.description.push_str(&rest);
                    }
                }
                None => {
                    p.description.push(' ');
                    p.description.push_str(line);
                }
            }
            continue;
        }

        if emitted_before {
            // only a line holding nothing but the order number
            if let Some((rest, order)) = format.order_number(line) {
                if rest.is_empty() {
                    if let Some(last) = out.last_mut().filter(|t| t.accepts_order_num()) {
                        last.set_order_num(order);
                    }
                }
            }
        }
    }

    drop_pending(&mut pending, "end of text");
    out
}

fn drop_pending(pending: &mut Option<Pending>, reason: &str) {
    if let Some(p) = pending.take() {
        tracing::trace!(date = %p.date, description = %p.description, reason, "dropping pending header");
    }
}
