//! Error types for constraint parsing.
//!
//! The grammar distinguishes two failure kinds: the input does not match the
//! token shape at all (syntax), or it matches but violates a domain rule
//! (semantic). Callers outside the crate normally see neither — the
//! [`validate_token`](crate::grammar::validate_token) facade renders both
//! into a uniform human-readable string.

use thiserror::Error;

/// Errors produced while parsing a constraint token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The token does not match the grammar shape. Carries the byte position
    /// of the offending token, what was found there, and the set of token
    /// kinds that would have been accepted.
    #[error("syntax error at position {position}: expected {}; found {found}", expected.join(", "))]
    Syntax {
        position: usize,
        found: String,
        expected: Vec<&'static str>,
    },

    /// The token is grammatically valid but violates a domain rule
    /// (hour out of range, start not before end, impossible calendar date).
    #[error("{message}")]
    Semantic { message: String },
}

impl GrammarError {
    /// Shorthand for a semantic error with a formatted message.
    pub(crate) fn semantic(message: impl Into<String>) -> Self {
        GrammarError::Semantic {
            message: message.into(),
        }
    }

    /// Render this error against the original input as the multi-line,
    /// human-readable form the validator facade returns.
    ///
    /// Syntax errors get a caret line pointing at the offending position:
    ///
    /// ```text
    /// 1/15
    ///     ^
    /// Expected: '/'
    /// ```
    ///
    /// Semantic errors are prefixed with the offending input:
    ///
    /// ```text
    /// Feb 29 2023: Invalid date: day is out of range for month
    /// ```
    pub fn render(&self, input: &str) -> String {
        match self {
            GrammarError::Syntax {
                position, expected, ..
            } => {
                let caret_at = (*position).min(input.len());
                format!(
                    "{}\n{}^\nExpected: {}",
                    input,
                    " ".repeat(caret_at),
                    expected.join(", ")
                )
            }
            GrammarError::Semantic { message } => {
                format!("{}: {}", input.trim(), message)
            }
        }
    }
}

/// Convenience alias used throughout callboard-core.
pub type Result<T> = std::result::Result<T, GrammarError>;
