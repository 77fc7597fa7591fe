use std::fmt;

use super::error::ConditionParseError;

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Operator {
    /// Detection order. Two-character tokens must precede their
    /// one-character prefixes or `>=` would be read as `>`.
    pub const SCAN_ORDER: [Operator; 6] = [
        Operator::Ne,
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
        Operator::Eq,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// `column op operand`, as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub op: Operator,
    pub operand: String,
}

/// Split `text` at the first occurrence of the highest-priority operator
/// it contains and trim both halves.
pub fn parse_condition(text: &str) -> Result<Condition, ConditionParseError> {
    for op in Operator::SCAN_ORDER {
        if let Some((column, operand)) = text.split_once(op.token()) {
            return Ok(Condition {
                column: column.trim().to_string(),
                op,
                operand: operand.trim().to_string(),
            });
        }
    }
    Err(ConditionParseError::NoOperator(text.to_string()))
}

/// Parse a `column=name` pair with the condition parser.
///
/// Whichever operator splits the text is dropped, so `price>=min` reads as
/// column `price`, name `min`.
pub fn parse_assignment(text: &str) -> Result<(String, String), ConditionParseError> {
    let cond = parse_condition(text)?;
    Ok((cond.column, cond.operand))
}
