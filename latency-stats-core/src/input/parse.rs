use crate::input::error::InputError;

/// Splits free-form text on every non-digit character and parses the runs of
/// digits as µs measurements.
///
/// Runs too large for `u64` are returned as errors in place; the caller
/// decides whether to skip them.
pub fn parse_numbers(text: &str) -> impl Iterator<Item = Result<u64, InputError>> + '_ {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u64>().map_err(|source| InputError::InvalidNumber {
                token: token.to_string(),
                source,
            })
        })
}
