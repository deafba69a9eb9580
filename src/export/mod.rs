mod csv;
mod json;
mod xlsx;

use crate::errors::ExtractResult;
use crate::types::Transaction;
use chrono::NaiveDate;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Column names shared by every export format.
pub(crate) const COLUMNS: [&str; 4] = ["Date", "Transaction details", "Amount", "Balance"];

/// One exported row. The serde renames produce the fixed column names in
/// csv headers and json keys; an absent amount serializes as an empty csv
/// field or a json null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Transaction details")]
    pub details: String,
    #[serde(rename = "Amount")]
    pub amount: Option<Decimal>,
    #[serde(rename = "Balance")]
    pub balance: Decimal,
}

impl From<&Transaction> for ExportRecord {
    fn from(txn: &Transaction) -> Self {
        ExportRecord {
            date: txn.date,
            details: txn.details.clone(),
            amount: txn.amount,
            balance: txn.balance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ExportFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "xlsx")]
    Xlsx,
    #[serde(rename = "json")]
    Json,
}

impl ExportFormat {
    /// Output always goes to a fixed file name in the working directory.
    pub fn output_path(&self) -> &'static Path {
        Path::new(match self {
            ExportFormat::Csv => "output.csv",
            ExportFormat::Xlsx => "output.xlsx",
            ExportFormat::Json => "output.json",
        })
    }

    /// Serialize the accumulated transactions to `output.<ext>`.
    pub fn export(&self, transactions: &[Transaction]) -> ExtractResult<()> {
        let records: Vec<ExportRecord> = transactions.iter().map(ExportRecord::from).collect();
        let path = self.output_path();

        match self {
            ExportFormat::Csv => csv::write(path, &records)?,
            ExportFormat::Xlsx => xlsx::write(path, &records)?,
            ExportFormat::Json => json::write(path, &records)?,
        }

        tracing::debug!(path = %path.display(), records = records.len(), "wrote export file");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use std::str::FromStr;

    pub fn sample_records() -> Vec<ExportRecord> {
        vec![
            ExportRecord {
                date: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
                details: "Card Payment TESCO".to_string(),
                amount: Some(Decimal::from_str("12.50").unwrap()),
                balance: Decimal::from_str("1045.30").unwrap(),
            },
            ExportRecord {
                date: NaiveDate::from_ymd_opt(2023, 1, 6).unwrap(),
                details: "Interest Payment".to_string(),
                amount: None,
                balance: Decimal::from_str("1045.55").unwrap(),
            },
        ]
    }
}
