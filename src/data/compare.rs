use super::condition::Operator;
use super::model::parse_number;

/// Shown to the user each time an ordering operator meets text.
pub const TEXT_ORDERING_WARNING: &str = "Only \"=\" and \"!=\" can be used to compare strings";

/// Outcome of evaluating one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Miss,
    /// Ordering operator applied to non-numeric operands.
    Rejected,
}

impl Comparison {
    pub fn is_match(self) -> bool {
        self == Comparison::Match
    }

    fn from_bool(b: bool) -> Self {
        if b {
            Comparison::Match
        } else {
            Comparison::Miss
        }
    }
}

/// Compare two raw cells.
///
/// Both numeric → numeric comparison with any operator. Otherwise only
/// `=` and `!=` are defined, on the exact text.
pub fn evaluate(raw_a: &str, op: Operator, raw_b: &str) -> Comparison {
    if let (Some(a), Some(b)) = (parse_number(raw_a), parse_number(raw_b)) {
        let hit = match op {
            Operator::Eq => a == b,
            Operator::Ne => a != b,
            Operator::Lt => a < b,
            Operator::Gt => a > b,
            Operator::Le => a <= b,
            Operator::Ge => a >= b,
        };
        return Comparison::from_bool(hit);
    }

    match op {
        Operator::Eq => Comparison::from_bool(raw_a == raw_b),
        Operator::Ne => Comparison::from_bool(raw_a != raw_b),
        _ => Comparison::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, op: Operator, b: &str) -> bool {
        evaluate(a, op, b).is_match()
    }

    #[test]
    fn equality_is_reflexive() {
        for x in ["5", "0.25", "-3e2", "apple", "", "iPhone 15"] {
            assert!(compare(x, Operator::Eq, x), "{x:?} should equal itself");
            assert!(!compare(x, Operator::Ne, x));
        }
    }

    #[test]
    fn numeric_equality_is_by_value() {
        assert!(compare("5", Operator::Eq, "5.0"));
        assert!(compare(" 5", Operator::Eq, "5"));
        assert!(!compare("5", Operator::Ne, "5.00"));
    }

    #[test]
    fn numeric_ordering() {
        assert!(compare("999", Operator::Gt, "149"));
        assert!(compare("9", Operator::Lt, "10"));
        assert!(compare("10", Operator::Le, "10.0"));
        assert!(compare("10", Operator::Ge, "10"));
        assert!(!compare("10", Operator::Gt, "10"));
    }

    #[test]
    fn text_equality_is_exact() {
        assert!(compare("apple", Operator::Eq, "apple"));
        assert!(!compare("apple", Operator::Eq, "Apple"));
        assert!(compare("apple", Operator::Ne, "samsung"));
        // one side numeric, other not: text comparison
        assert!(!compare("5", Operator::Eq, "five"));
    }

    #[test]
    fn text_ordering_is_rejected() {
        assert_eq!(evaluate("apple", Operator::Lt, "banana"), Comparison::Rejected);
        assert_eq!(evaluate("5", Operator::Ge, "five"), Comparison::Rejected);
        assert!(!compare("banana", Operator::Gt, "apple"));
    }
}
