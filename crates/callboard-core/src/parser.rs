//! Recursive-descent parser — the syntactic phase.
//!
//! Recognizes the token shape and builds an explicit syntax tree. No
//! domain validation happens here: hours, minutes, and calendar dates are
//! carried through as the raw numbers that appeared in the source, and the
//! transform pass decides whether they mean anything. Keeping this layer
//! purely structural is what makes the syntax/semantics split concrete.
//!
//! Grammar (one invocation parses a full comma group):
//!
//! ```text
//! token          := unavailability ("," unavailability)*
//! unavailability := day_spec time_range? | date_spec ("-" date_spec | time_range)?
//! day_spec       := WEEKDAY_NAME
//! date_spec      := MONTH DAY YEAR | INT "/" INT "/" INT
//! time_range     := ("until"|"before") time | "after" time | time "-" time
//! time           := INT (":" INT)? (AM|PM)?
//! ```

use crate::date::month_from_abbrev;
use crate::error::{GrammarError, Result};
use crate::scanner::{Tok, TokKind};
use crate::time::Meridiem;
use crate::weekday::Weekday;

/// A time literal as it appeared in the source: raw hour, optional minutes,
/// optional AM/PM marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimeNode {
    pub hour: u32,
    pub minute: Option<u32>,
    pub meridiem: Option<Meridiem>,
}

/// A recognized time range, bounds still unnormalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimeRangeNode {
    /// `until 5pm` / `before 5pm` — runs from the start of the day.
    Until(TimeNode),
    /// `after 5pm` — runs to the end of the day.
    After(TimeNode),
    /// `2-4`, `9am-12pm` — explicit bounds.
    Between(TimeNode, TimeNode),
}

/// How the month was written. Abbreviations are resolved to month numbers
/// by the scanner-level table; numeric months are validated semantically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MonthNode {
    Abbrev(u32),
    Number(u32),
}

/// A date literal: month, day-of-month, year — all unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateNode {
    pub month: MonthNode,
    pub day: u32,
    pub year: u32,
}

/// One recognized unavailability spec within a comma group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SpecNode {
    Day(Weekday),
    TimeOnDay { day: Weekday, range: TimeRangeNode },
    Date(DateNode),
    DateRange { start: DateNode, end: DateNode },
    TimeOnDate { date: DateNode, range: TimeRangeNode },
}

/// Parse a scanned token stream into spec nodes, one per comma group entry.
pub(crate) fn parse(tokens: &[Tok], input_len: usize) -> Result<Vec<SpecNode>> {
    let mut parser = Parser {
        tokens,
        input_len,
        idx: 0,
    };

    if parser.peek().is_none() {
        return Err(parser.err_here(vec!["WEEKDAY", "MONTH", "DATE"]));
    }

    let mut specs = vec![parser.parse_spec()?];
    while parser.peek_is(&TokKind::Comma) {
        parser.bump();
        specs.push(parser.parse_spec()?);
    }

    // parse_spec stops at a comma or a recognized range; anything left over
    // is trailing garbage the grammar has no rule for.
    if parser.peek().is_some() {
        return Err(parser.err_here(vec!["','", "end of input"]));
    }

    Ok(specs)
}

struct Parser<'a> {
    tokens: &'a [Tok],
    input_len: usize,
    idx: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.idx)
    }

    fn peek_kind(&self) -> Option<TokKind> {
        self.peek().map(|t| t.kind.clone())
    }

    fn peek_is(&self, kind: &TokKind) -> bool {
        self.peek().is_some_and(|t| &t.kind == kind)
    }

    fn bump(&mut self) {
        self.idx += 1;
    }

    /// Syntax error at the current position, describing what was found.
    fn err_here(&self, expected: Vec<&'static str>) -> GrammarError {
        match self.peek() {
            Some(tok) => GrammarError::Syntax {
                position: tok.pos,
                found: tok.describe(),
                expected,
            },
            None => GrammarError::Syntax {
                position: self.input_len,
                found: "end of input".to_string(),
                expected,
            },
        }
    }

    fn expect_int(&mut self, expected: &'static str) -> Result<u32> {
        match self.peek_kind() {
            Some(TokKind::Int(n)) => {
                self.bump();
                Ok(n)
            }
            _ => Err(self.err_here(vec![expected])),
        }
    }

    fn expect_punct(&mut self, kind: TokKind, name: &'static str) -> Result<()> {
        if self.peek_is(&kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.err_here(vec![name]))
        }
    }

    /// True at a comma or the end of input — the places a spec may stop.
    fn at_spec_end(&self) -> bool {
        matches!(self.peek_kind(), None | Some(TokKind::Comma))
    }

    /// True if the next tokens can begin a time range.
    fn at_time_range_start(&self) -> bool {
        match self.peek_kind() {
            Some(TokKind::Int(_)) => true,
            Some(TokKind::Word(w)) => matches!(w.as_str(), "until" | "before" | "after"),
            _ => false,
        }
    }

    fn parse_spec(&mut self) -> Result<SpecNode> {
        match self.peek_kind() {
            Some(TokKind::Word(w)) => {
                if let Some(day) = Weekday::from_token(&w) {
                    self.bump();
                    if self.at_time_range_start() {
                        let range = self.parse_time_range()?;
                        Ok(SpecNode::TimeOnDay { day, range })
                    } else if self.at_spec_end() {
                        Ok(SpecNode::Day(day))
                    } else {
                        Err(self.err_here(vec![
                            "','", "'until'", "'before'", "'after'", "TIME",
                        ]))
                    }
                } else if month_from_abbrev(&w).is_some() {
                    self.parse_date_tail()
                } else {
                    Err(self.err_here(vec!["WEEKDAY", "MONTH", "DATE"]))
                }
            }
            Some(TokKind::Int(_)) => self.parse_date_tail(),
            _ => Err(self.err_here(vec!["WEEKDAY", "MONTH", "DATE"])),
        }
    }

    /// A spec that began with a date: plain date, date range, or
    /// time-on-date. A dash after a date always starts a second date —
    /// time ranges never begin with a dash, so there is no ambiguity.
    fn parse_date_tail(&mut self) -> Result<SpecNode> {
        let start = self.parse_date_spec()?;

        if self.peek_is(&TokKind::Dash) {
            self.bump();
            let end = self.parse_date_spec()?;
            return Ok(SpecNode::DateRange { start, end });
        }

        if self.at_time_range_start() {
            let range = self.parse_time_range()?;
            return Ok(SpecNode::TimeOnDate { date: start, range });
        }

        if self.at_spec_end() {
            return Ok(SpecNode::Date(start));
        }

        Err(self.err_here(vec![
            "','", "'-'", "'until'", "'before'", "'after'", "TIME",
        ]))
    }

    fn parse_date_spec(&mut self) -> Result<DateNode> {
        match self.peek_kind() {
            Some(TokKind::Word(w)) => match month_from_abbrev(&w) {
                Some(month) => {
                    self.bump();
                    let day = self.expect_int("DAY")?;
                    let year = self.expect_int("YEAR")?;
                    Ok(DateNode {
                        month: MonthNode::Abbrev(month),
                        day,
                        year,
                    })
                }
                None => Err(self.err_here(vec!["MONTH"])),
            },
            Some(TokKind::Int(month)) => {
                self.bump();
                self.expect_punct(TokKind::Slash, "'/'")?;
                let day = self.expect_int("DAY")?;
                self.expect_punct(TokKind::Slash, "'/'")?;
                let year = self.expect_int("YEAR")?;
                Ok(DateNode {
                    month: MonthNode::Number(month),
                    day,
                    year,
                })
            }
            _ => Err(self.err_here(vec!["MONTH", "INT"])),
        }
    }

    fn parse_time_range(&mut self) -> Result<TimeRangeNode> {
        match self.peek_kind() {
            Some(TokKind::Word(w)) if w == "until" || w == "before" => {
                self.bump();
                Ok(TimeRangeNode::Until(self.parse_time()?))
            }
            Some(TokKind::Word(w)) if w == "after" => {
                self.bump();
                Ok(TimeRangeNode::After(self.parse_time()?))
            }
            Some(TokKind::Int(_)) => {
                let start = self.parse_time()?;
                self.expect_punct(TokKind::Dash, "'-'")?;
                let end = self.parse_time()?;
                Ok(TimeRangeNode::Between(start, end))
            }
            _ => Err(self.err_here(vec!["'until'", "'before'", "'after'", "TIME"])),
        }
    }

    fn parse_time(&mut self) -> Result<TimeNode> {
        let hour = match self.peek_kind() {
            Some(TokKind::Int(n)) => {
                self.bump();
                n
            }
            _ => return Err(self.err_here(vec!["TIME"])),
        };

        let minute = if self.peek_is(&TokKind::Colon) {
            self.bump();
            Some(self.expect_int("MINUTES")?)
        } else {
            None
        };

        let meridiem = match self.peek_kind() {
            Some(TokKind::Word(w)) if w == "am" => {
                self.bump();
                Some(Meridiem::Am)
            }
            Some(TokKind::Word(w)) if w == "pm" => {
                self.bump();
                Some(Meridiem::Pm)
            }
            _ => None,
        };

        Ok(TimeNode {
            hour,
            minute,
            meridiem,
        })
    }
}
