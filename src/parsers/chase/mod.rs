mod parser;
mod types;

pub use parser::ChaseParser;
pub use types::{MoneyToken, StatementDate, CURRENCY_MARKER};

pub mod prelude {
    pub use super::{ChaseParser, MoneyToken, StatementDate, CURRENCY_MARKER};
}
