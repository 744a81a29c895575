//! pdf2csv-ingest: statement text ingestion, issuer line formats, and the line-item recognizer.

pub mod anchor;
pub mod error;
pub mod extract;
pub mod fields;
pub mod loader;
pub mod parsers;
pub mod recognizer;
pub mod types;

pub use anchor::{DueDate, find_due_date};
pub use error::LoadError;
pub use extract::{Extraction, Pdftotext, TextExtractor};
pub use loader::Loader;
pub use parsers::{FormatRegistry, IssuerFormat};
pub use recognizer::{Header, LineFormat, LineItem, scan};
pub use types::{Issuer, Statement, Transaction};
