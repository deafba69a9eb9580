use crate::errors::ExtractResult;
use std::path::{Path, PathBuf};

/// Narrow contract with the upstream document-to-text step: one block of
/// extracted text per page, in page order. The parser never sees layout or
/// geometry information.
pub trait PageSource {
    fn pages(&self) -> ExtractResult<Vec<String>>;
}

/// Page source backed by the `pdf-extract` crate.
pub struct PdfSource {
    path: PathBuf,
}

impl PdfSource {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for PdfSource {
    fn pages(&self) -> ExtractResult<Vec<String>> {
        let pages = pdf_extract::extract_text_by_pages(&self.path)?;
        tracing::debug!(path = %self.path.display(), pages = pages.len(), "extracted pdf text");
        Ok(pages)
    }
}
