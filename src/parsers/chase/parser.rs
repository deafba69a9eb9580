use super::types::{MoneyToken, StatementDate, CURRENCY_MARKER};
use crate::errors::{ExtractError, ExtractResult};
use crate::parsers::traits::Parser;
use crate::types::Transaction;

/// Summary lines restate balance arithmetic and start with the currency
/// marker itself; disclosure lines start with this fixed sentence prefix.
const DISCLOSURE_PREFIX: &str = "The AER is";

/// A transaction line carries at least 3 date tokens, 1 details token and
/// the trailing balance token.
const MIN_LINE_TOKENS: usize = 5;

pub struct ChaseParser;

impl ChaseParser {
    /// Decide whether a raw line of extracted text is a transaction line.
    ///
    /// Rejected lines are noise (headers, footers, balance summaries,
    /// interest-rate disclosures) and produce no record.
    pub fn is_transaction_line(line: &str) -> bool {
        let trimmed = line.trim_start();

        trimmed.contains(CURRENCY_MARKER)
            && !trimmed.starts_with(CURRENCY_MARKER)
            && !trimmed.starts_with(DISCLOSURE_PREFIX)
    }

    /// Split an accepted line into date, details, amount and balance.
    ///
    /// The amount slot is the only field with graceful degradation: when the
    /// second-to-last token is not numeric the line simply has no amount and
    /// that token belongs to the details instead.
    pub fn parse_line(line: &str) -> ExtractResult<Transaction> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_LINE_TOKENS {
            return Err(ExtractError::ShortTransactionLine(line.trim().to_string()));
        }

        let date = StatementDate::from(tokens[..3].join(" ")).parse()?;
        let balance = MoneyToken::from(tokens[tokens.len() - 1]).parse()?;
        let amount = MoneyToken::from(tokens[tokens.len() - 2]).parse_opt();

        // With no amount token the details window extends one token further right.
        let details_end = match amount {
            Some(_) => tokens.len() - 2,
            None => tokens.len() - 1,
        };
        let details = tokens[3..details_end].join(" ");

        Ok(Transaction {
            date,
            details,
            amount,
            balance,
        })
    }
}

impl Parser for ChaseParser {
    type Output = Transaction;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        let has_pdf_extension = filename
            .map(|name| name.to_lowercase().ends_with(".pdf"))
            .unwrap_or(false);

        let has_marker = content.contains(CURRENCY_MARKER);

        match filename {
            Some(_) => has_pdf_extension || has_marker,
            None => has_marker,
        }
    }

    fn parse(content: &str) -> ExtractResult<Vec<Self::Output>> {
        content
            .lines()
            .filter(|line| Self::is_transaction_line(line))
            .map(Self::parse_line)
            .collect()
    }
}
