//! Splitting input lines into tokens. No quoting or escaping: a token is any run of
//! non-whitespace characters.

/// Splits `line` on ASCII whitespace.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_ascii_whitespace().map(str::to_owned).collect()
}
