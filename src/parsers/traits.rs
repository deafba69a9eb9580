use crate::errors::ExtractResult;

pub trait Parser {
    type Output;

    fn parse(content: &str) -> ExtractResult<Vec<Self::Output>>;

    fn is_supported(filename: Option<&str>, content: &str) -> bool;
}
