//! Statement loader: extraction, due-date anchor, recognizer dispatch.

use std::path::Path;

use crate::anchor::find_due_date;
use crate::error::LoadError;
use crate::extract::TextExtractor;
use crate::parsers::FormatRegistry;
use crate::recognizer::scan;
use crate::types::{Issuer, Statement};

/// Loads one statement at a time. Holds no per-document state.
#[derive(Debug, Clone)]
pub struct Loader<E> {
    extractor: E,
    registry: FormatRegistry,
    issuer: Option<Issuer>,
}

impl<E> Loader<E> {
    pub fn new(extractor: E) -> Result<Self, LoadError> {
        Ok(Self {
            extractor,
            registry: FormatRegistry::new()?,
            issuer: None,
        })
    }

    /// Force one issuer's line format instead of the one whose anchor matched.
    pub fn with_issuer(mut self, issuer: Option<Issuer>) -> Self {
        self.issuer = issuer;
        self
    }

    /// Everything after extraction: anchor lookup and line-item scan.
    pub fn statement_from_text(&self, path: &Path, text: &str) -> Result<Statement, LoadError> {
        let due = find_due_date(self.registry.anchor_order(self.issuer), text).ok_or_else(|| {
            LoadError::DueDateNotFound {
                path: path.to_path_buf(),
            }
        })?;

        let issuer = self.issuer.unwrap_or(due.issuer());
        let line_items = scan(self.registry.get(issuer), text, due.year());

        tracing::info!(
            path = %path.display(),
            %issuer,
            year = due.year(),
            due_date = ?due.date(),
            count = line_items.len(),
            "loaded statement"
        );
        if line_items.is_empty() {
            tracing::warn!(path = %path.display(), %issuer, "no transactions recognized");
        }

        Ok(Statement::new(path, issuer, due, line_items))
    }
}

impl<E: TextExtractor> Loader<E> {
    /// Extract and parse one document. Any failure is fatal for the document.
    pub async fn load(&self, path: &Path) -> Result<Statement, LoadError> {
        let extraction = self.extractor.extract(path).await?;
        if !extraction.success() {
            return Err(LoadError::Extraction {
                program: self.extractor.program().to_string(),
                path: path.to_path_buf(),
                code: extraction.code,
            });
        }
        self.statement_from_text(path, &extraction.text)
    }
}
