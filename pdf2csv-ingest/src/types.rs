use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::anchor::DueDate;

/// Supported statement issuers, in the fixed order due-date anchors are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Issuer {
    #[serde(rename = "chase")]
    Chase,
    #[serde(rename = "amex")]
    Amex,
    #[serde(rename = "discover")]
    Discover,
    #[serde(rename = "boa")]
    BankOfAmerica,
}

impl Issuer {
    pub const ALL: [Issuer; 4] = [
        Issuer::Chase,
        Issuer::Amex,
        Issuer::Discover,
        Issuer::BankOfAmerica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Issuer::Chase => "chase",
            Issuer::Amex => "amex",
            Issuer::Discover => "discover",
            Issuer::BankOfAmerica => "boa",
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Issuer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chase" => Ok(Issuer::Chase),
            "amex" | "american-express" => Ok(Issuer::Amex),
            "discover" => Ok(Issuer::Discover),
            "boa" | "bank-of-america" => Ok(Issuer::BankOfAmerica),
            other => Err(format!(
                "unknown issuer `{other}` (expected one of: chase, amex, discover, boa)"
            )),
        }
    }
}

/// One statement line item.
///
/// `amount` is a signed decimal string with two fraction digits; a negative
/// amount is a credit or refund.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: String,
    description: String,
    amount: String,
    points: Option<String>,
    order_num: Option<String>,
}

impl Transaction {
    pub(crate) fn new(
        date: String,
        description: String,
        amount: String,
        points: Option<String>,
        order_num: Option<String>,
    ) -> Self {
        Self {
            date,
            description,
            amount,
            points,
            order_num,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Description as written to the ledger, with `#<order>` appended when an
    /// order number was found.
    pub fn description(&self) -> String {
        match &self.order_num {
            Some(order) => format!("{} #{}", self.description, order),
            None => self.description.clone(),
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn points(&self) -> Option<&str> {
        self.points.as_deref()
    }

    pub fn order_num(&self) -> Option<&str> {
        self.order_num.as_deref()
    }

    /// Rewards lines carry a points figure and are not money movements.
    pub fn is_rewards(&self) -> bool {
        self.points.is_some()
    }

    pub(crate) fn accepts_order_num(&self) -> bool {
        self.points.is_none() && self.order_num.is_none()
    }

    pub(crate) fn set_order_num(&mut self, order: String) {
        self.order_num = Some(order);
    }
}

/// Line items recognized in one statement document.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    path: PathBuf,
    issuer: Issuer,
    due_date: DueDate,
    line_items: Vec<Transaction>,
}

impl Statement {
    pub fn new(
        path: impl Into<PathBuf>,
        issuer: Issuer,
        due_date: DueDate,
        line_items: Vec<Transaction>,
    ) -> Self {
        Self {
            path: path.into(),
            issuer,
            due_date,
            line_items,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn issuer(&self) -> Issuer {
        self.issuer
    }

    pub fn due_date(&self) -> &DueDate {
        &self.due_date
    }

    pub fn line_items(&self) -> &[Transaction] {
        &self.line_items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.line_items.iter()
    }

    /// Line items that move money (rewards lines filtered out).
    pub fn billable(&self) -> impl Iterator<Item = &Transaction> {
        self.line_items.iter().filter(|t| !t.is_rewards())
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Statement {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.line_items.iter()
    }
}
