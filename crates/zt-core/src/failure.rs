//! Verification failures and their diagnostic messages.
//!
//! The `Display` form of each variant is the exact text written after the
//! `file:line: ` prefix of a diagnostic line. Existing golden outputs depend
//! on these strings, including the missing `assertion ` prefix of the
//! boolean inconsistent-relation message.

use crate::relation::Relation;
use crate::value::Value;
use std::fmt;
use thiserror::Error;

/// Result of running a verification predicate.
pub type Verdict = Result<(), Failure>;

/// Source form of a binary claim, e.g. `a + b == c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: String,
    pub relation: String,
    pub right: String,
}

impl Expression {
    #[must_use]
    pub fn new(left: &str, relation: &str, right: &str) -> Self {
        Self {
            left: left.to_string(),
            relation: relation.to_string(),
            right: right.to_string(),
        }
    }

    /// Expression built from the source text of three claim operands.
    #[must_use]
    pub fn of(left: &Value<'_>, relation: &Value<'_>, right: &Value<'_>) -> Self {
        Self::new(left.source(), relation.source(), right.source())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.relation, self.right)
    }
}

/// Operand side of a binary claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// An operand had a different kind than the verifier expects.
    #[error("{0}")]
    KindMismatch(&'static str),
    /// A numeric operand did not fit the kind the claim compares.
    #[error("assertion failed because {0} is out of range")]
    OutOfRange(String),
    #[error("unsupported number of arguments: {0}")]
    UnsupportedArity(usize),
    /// The relation operand's payload differs from its source text.
    #[error("{lead}{expr} uses inconsistent relation {relation}")]
    InconsistentRelation {
        lead: &'static str,
        expr: Expression,
        relation: String,
    },
    #[error("assertion {0} uses unsupported relation")]
    UnsupportedRelation(Expression),
    #[error("assertion {expr} failed because {side} hand side is NULL")]
    NullOperand { expr: Expression, side: Side },
    /// The relation did not hold; `inverted` is the relation that did.
    #[error("assertion {expr} failed because {left} {inverted} {right}")]
    RelationFailed {
        expr: Expression,
        left: String,
        inverted: Relation,
        right: String,
    },
    #[error("assertion failed because {0} is false")]
    NotTrue(String),
    #[error("assertion failed because {0} is true")]
    NotFalse(String),
    #[error("assertion {expr} == NULL failed because {address:#x} != NULL")]
    NotNull { expr: String, address: usize },
    #[error("assertion {0} != NULL failed")]
    IsNull(String),
    /// Free-form failure raised by caller-supplied predicates.
    #[error("{0}")]
    Custom(String),
}
