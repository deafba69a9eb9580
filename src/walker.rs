use crate::errors::ExtractResult;
use crate::extract::PageSource;
use crate::parsers::prelude::*;
use crate::types::Transaction;

/// Run-wide accumulator for one invocation.
///
/// Documents are ingested one after another; within a document, pages in
/// order and lines in page order. The record order of the output is exactly
/// that source order — no sort is applied.
#[derive(Debug, Default)]
pub struct Extraction {
    transactions: Vec<Transaction>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk one document's pages through the line parser, appending every
    /// transaction found. The first unparseable date or balance aborts the
    /// whole run; there is no per-line or per-document recovery.
    pub fn ingest<S: PageSource>(&mut self, source: &S) -> ExtractResult<()> {
        for page in source.pages()? {
            let parsed = ChaseParser::parse(&page)?;
            tracing::debug!(count = parsed.len(), "parsed transactions from page");
            self.transactions.extend(parsed);
        }
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
