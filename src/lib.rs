//! Extract transaction tables from Chase UK bank statement PDFs.
//!
//! ```rust,ignore
//! use statement_export_rs::{ExportFormat, Extraction, PdfSource};
//!
//! let mut extraction = Extraction::new();
//! extraction.ingest(&PdfSource::open("statement.pdf"))?;
//! ExportFormat::Csv.export(extraction.transactions())?;
//! ```

mod types;
mod walker;

pub mod errors;
pub mod export;
pub mod extract;
pub mod parsers;

pub use export::{ExportFormat, ExportRecord};
pub use extract::{PageSource, PdfSource};
pub use parsers::prelude::*;
pub use types::Transaction;
pub use walker::Extraction;
