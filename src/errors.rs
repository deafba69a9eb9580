use thiserror::Error;

/// Erros possíveis durante a extração e exportação de extratos
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Os três primeiros tokens da linha não formam uma data "DD Mon YYYY"
    #[error("Invalid transaction date: {0}")]
    InvalidDate(String),

    /// O token de saldo não é um valor monetário após remover "£" e ","
    #[error("Invalid money figure: {0}")]
    InvalidMoney(String),

    /// Linha aceita pelo classificador mas com menos de 5 tokens
    #[error("Transaction line has too few fields: {0}")]
    ShortTransactionLine(String),

    /// Falha do extrator de texto do PDF; repassada sem tratamento
    #[error("Failed to extract text from PDF: {0}")]
    PdfExtraction(#[from] pdf_extract::OutputError),

    // ── Erros de escrita dos formatos de saída ──────────────────────────────────

    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write csv output: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write workbook output: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write json output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type ExtractResult<T> = Result<T, ExtractError>;
