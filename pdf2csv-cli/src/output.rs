//! CSV ledger output: `Date,Description,Amount`, rewards lines excluded.

use anyhow::{Context, Result};
use pdf2csv_ingest::Statement;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: &'a str,
}

pub struct CsvSink<W: Write> {
    wtr: csv::Writer<W>,
}

/// Open `path` for writing, or stdout when `None`.
pub fn open(path: Option<&Path>) -> Result<CsvSink<Box<dyn Write>>> {
    let out: Box<dyn Write> = match path {
        Some(p) => Box::new(File::create(p).with_context(|| format!("create {}", p.display()))?),
        None => Box::new(io::stdout()),
    };
    Ok(CsvSink::new(out))
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            wtr: csv::Writer::from_writer(out),
        }
    }

    /// Write one statement's rows and flush them. The header goes out with
    /// the first row.
    pub fn write_statement(&mut self, statement: &Statement) -> Result<usize> {
        let mut written = 0;
        for t in statement {
            if t.is_rewards() {
                tracing::debug!(date = t.date(), points = ?t.points(), "skipping rewards line");
                continue;
            }
            self.wtr.serialize(Row {
                date: t.date(),
                description: t.description(),
                amount: t.amount(),
            })?;
            written += 1;
        }
        self.wtr
            .flush()
            .with_context(|| format!("write rows for {}", statement.path().display()))?;
        Ok(written)
    }

    pub fn finish(self) -> Result<W> {
        self.wtr.into_inner().map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf2csv_ingest::{Loader, Pdftotext};

    fn statement(path: &str, text: &str) -> Statement {
        Loader::new(Pdftotext::default())
            .unwrap()
            .statement_from_text(Path::new(path), text)
            .unwrap()
    }

    #[test]
    fn test_rows_skip_rewards_and_quote_commas() {
        let st = statement(
            "chase.pdf",
            "Payment Due Date: 02/15/23\n\
             01/09 AMAZON MKTPLACE PMTS 12.34 Order Number 123-4567890-1234567\n\
             01/14 AMAZON MARKETPLACE 4.56 7,890\n\
             01/20 DINER, LLC 20.00\n",
        );
        let mut sink = CsvSink::new(Vec::new());
        assert_eq!(sink.write_statement(&st).unwrap(), 2);
        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Date,Description,Amount\n\
             01/09/23,AMAZON MKTPLACE PMTS #123-4567890-1234567,12.34\n\
             01/20/23,\"DINER, LLC\",20.00\n"
        );
    }

    #[test]
    fn test_header_written_once_across_statements() {
        let a = statement("a.pdf", "Payment Due Date: 02/15/23\n01/09 COFFEE 3.00\n");
        let b = statement("b.pdf", "Payment Due Date: 03/15/23\n02/09 TEA 2.00\n");
        let mut sink = CsvSink::new(Vec::new());
        sink.write_statement(&a).unwrap();
        sink.write_statement(&b).unwrap();
        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Date,Description,Amount\n01/09/23,COFFEE,3.00\n02/09/23,TEA,2.00\n"
        );
    }

    #[test]
    fn test_empty_statement_writes_nothing() {
        let st = statement("empty.pdf", "Payment Due Date: 02/15/23\n");
        let mut sink = CsvSink::new(Vec::new());
        assert_eq!(sink.write_statement(&st).unwrap(), 0);
        assert!(sink.finish().unwrap().is_empty());
    }
}
