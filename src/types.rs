use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed statement entry.
///
/// `amount` is `None` on lines that carry no money-in/money-out figure
/// (e.g. interest payments where only the balance column is printed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub details: String,
    pub amount: Option<Decimal>,
    pub balance: Decimal,
}
