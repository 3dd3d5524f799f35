//! The public parser and the token-validator facade.
//!
//! [`ConstraintParser`] is stateless and reentrant — constructing one is
//! free, so callers may build one per call or share one across threads
//! without pooling. [`validate_token`] is the boundary every external
//! collaborator goes through: it never lets a parser-internal error type
//! escape, converting every failure into one human-readable string.

use crate::constraint::Constraint;
use crate::error::Result;
use crate::parser;
use crate::scanner::scan;
use crate::transform::Transformer;

/// Parser configuration, passed explicitly at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Emit `tracing` debug events through the transform pass. Off by
    /// default; there is no module-level toggle.
    pub trace: bool,
}

/// Parser for the unavailability micro-language.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintParser {
    trace: bool,
}

impl ConstraintParser {
    /// A parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// A parser with explicit options.
    pub fn with_options(options: ParseOptions) -> Self {
        ConstraintParser {
            trace: options.trace,
        }
    }

    /// Parse one comma group of unavailability text into constraints.
    ///
    /// The group may hold a single spec (`"m"`, `"w 2-4"`) or several
    /// (`"m, w 2-4, f after 5pm"`); the result preserves source order and
    /// is never empty on success.
    ///
    /// # Errors
    ///
    /// [`GrammarError::Syntax`](crate::GrammarError::Syntax) when the text
    /// does not match the grammar shape,
    /// [`GrammarError::Semantic`](crate::GrammarError::Semantic) when it
    /// does but violates a domain rule.
    pub fn parse(&self, text: &str) -> Result<Vec<Constraint>> {
        let tokens = scan(text)?;
        let specs = parser::parse(&tokens, text.len())?;
        Transformer::new(self.trace).transform(specs)
    }
}

/// Validate one unavailability token, returning either the parsed
/// constraints or a uniform human-readable error string.
///
/// This is the single supported entry point for external callers (CLI
/// tools, catalog generators, report formatters). All failure kinds —
/// syntax and semantic — are rendered into one multi-line message; no
/// internal error type crosses this boundary, and nothing panics.
///
/// # Examples
///
/// ```
/// use callboard_core::validate_token;
///
/// assert!(validate_token("sun after 5pm").is_ok());
///
/// let err = validate_token("Feb 29 2023").unwrap_err();
/// assert_eq!(err, "Feb 29 2023: Invalid date: day is out of range for month");
/// ```
pub fn validate_token(text: &str) -> std::result::Result<Vec<Constraint>, String> {
    ConstraintParser::new()
        .parse(text)
        .map_err(|e| e.render(text))
}
