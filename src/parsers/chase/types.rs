use crate::errors::ExtractError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Currency marker printed on every transaction line of a Chase UK statement.
pub const CURRENCY_MARKER: char = '£';

/// Representa a data extraída de uma linha de transação.
///
/// Os extratos Chase UK imprimem a data como três tokens:
/// - dia com dois dígitos
/// - mês abreviado em inglês
/// - ano com quatro dígitos
///
/// Ex.: `"05 Jan 2023"`. Qualquer outro formato é erro fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementDate(String);

impl StatementDate {
    /// Tenta converter a string de data para `NaiveDate` no formato fixo do extrato
    pub fn parse(&self) -> Result<NaiveDate, ExtractError> {
        let s = self.0.trim();

        NaiveDate::parse_from_str(s, "%d %b %Y")
            .map_err(|_| ExtractError::InvalidDate(self.0.clone()))
    }
}

impl From<String> for StatementDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StatementDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<StatementDate> for NaiveDate {
    type Error = ExtractError;

    fn try_from(date: StatementDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

/// Um token monetário bruto, ex.: `"£1,045.30"` ou `"-£12.50"`.
///
/// O parsing remove o símbolo de moeda e os separadores de milhar antes de
/// interpretar o valor como `Decimal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyToken(String);

impl MoneyToken {
    fn cleaned(&self) -> String {
        self.0.replace(CURRENCY_MARKER, "").replace(',', "")
    }

    /// Parsing estrito: usado para o saldo, onde falha é erro fatal
    pub fn parse(&self) -> Result<Decimal, ExtractError> {
        Decimal::from_str(&self.cleaned())
            .map_err(|_| ExtractError::InvalidMoney(self.0.clone()))
    }

    /// Parsing tolerante: usado para o valor da transação, que pode não existir
    pub fn parse_opt(&self) -> Option<Decimal> {
        Decimal::from_str(&self.cleaned()).ok()
    }
}

impl From<String> for MoneyToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MoneyToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<MoneyToken> for Decimal {
    type Error = ExtractError;

    fn try_from(token: MoneyToken) -> Result<Self, Self::Error> {
        token.parse()
    }
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[rstest]
    #[case("05 Jan 2023", 2023, 1, 5)]
    #[case("06 Jan 2023", 2023, 1, 6)]
    #[case("28 Feb 2024", 2024, 2, 28)]
    #[case("31 Dec 2022", 2022, 12, 31)]
    #[case("  05 Jan 2023  ", 2023, 1, 5)]
    fn test_statement_date_valid(
        #[case] input: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let date = StatementDate::from(input);
        let result: Result<NaiveDate, _> = date.try_into();

        assert!(result.is_ok());
        let date = result.unwrap();
        assert_eq!(date.year(), year);
        assert_eq!(date.month(), month);
        assert_eq!(date.day(), day);
    }

    #[rstest]
    #[case("2023-01-05")]      // formato ISO, não usado pelo extrato
    #[case("05/01/2023")]      // formato com barras
    #[case("32 Jan 2023")]     // dia inválido
    #[case("05 Janeiro 2023")] // mês por extenso
    #[case("05 Jan 23")]       // ano com dois dígitos
    #[case("Card Payment TESCO")]
    #[case("")]
    fn test_statement_date_invalid(#[case] input: &str) {
        let date = StatementDate::from(input);
        let result: Result<NaiveDate, _> = date.try_into();

        assert!(matches!(result, Err(ExtractError::InvalidDate(_))));
    }

    #[rstest]
    #[case("£12.50", "12.50")]
    #[case("-£12.50", "-12.50")]
    #[case("£1,045.30", "1045.30")]
    #[case("£1,234,567.89", "1234567.89")]
    #[case("12.50", "12.50")]
    fn test_money_token_valid(#[case] input: &str, #[case] expected: &str) {
        let token = MoneyToken::from(input);
        let value: Decimal = token.try_into().unwrap();
        assert_eq!(value, Decimal::from_str(expected).unwrap());
    }

    #[rstest]
    #[case("TESCO")]
    #[case("£")]
    #[case("")]
    #[case("Payment")]
    fn test_money_token_invalid(#[case] input: &str) {
        let token = MoneyToken::from(input);
        let result: Result<Decimal, _> = token.clone().try_into();

        assert!(matches!(result, Err(ExtractError::InvalidMoney(_))));
        assert_eq!(token.parse_opt(), None);
    }

    #[test]
    fn test_money_token_parse_opt_matches_parse() {
        let token = MoneyToken::from("£1,045.55");
        assert_eq!(token.parse_opt(), Some(token.parse().unwrap()));
    }

    #[test]
    fn test_statement_date_serialization() {
        let date = StatementDate::from("05 Jan 2023");
        let json = serde_json::to_string(&date).unwrap();
        assert!(json.contains("05 Jan 2023"));

        let deserialized: StatementDate = serde_json::from_str(&json).unwrap();
        let parsed: NaiveDate = deserialized.try_into().unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    }
}
