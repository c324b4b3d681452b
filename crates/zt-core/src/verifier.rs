//! Verifiers: expected operand kinds plus the predicate that checks a claim.
//!
//! A verifier is like a function signature. It does not hold values; those
//! come from the [`Claim`] being verified. Before the predicate runs, every
//! operand it declares is checked against the expected [`Kind`], so
//! predicates never see operands of the wrong kind.

use crate::claim::Claim;
use crate::failure::{Expression, Failure, Side, Verdict};
use crate::relation::Relation;
use crate::render::{boolean_as_text, quote_rune, quote_string};
use crate::test::Test;
use crate::value::{Kind, Value};

/// Expected kind of one predicate argument and the message used when the
/// actual operand has another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgInfo {
    pub kind: Kind,
    pub kind_mismatch_msg: &'static str,
}

impl ArgInfo {
    #[must_use]
    pub const fn new(kind: Kind, kind_mismatch_msg: &'static str) -> Self {
        Self {
            kind,
            kind_mismatch_msg,
        }
    }
}

pub type Verify0 = fn(&mut Test<'_>) -> Verdict;
pub type Verify1 = fn(&mut Test<'_>, Value<'_>) -> Verdict;
pub type Verify2 = fn(&mut Test<'_>, Value<'_>, Value<'_>) -> Verdict;
pub type Verify3 = fn(&mut Test<'_>, Value<'_>, Value<'_>, Value<'_>) -> Verdict;

/// Verification predicate, tagged by the number of operands it takes.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    Nullary(Verify0),
    Unary(Verify1),
    Binary(Verify2),
    Ternary(Verify3),
}

impl Predicate {
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Nullary(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
            Self::Ternary(_) => 3,
        }
    }
}

/// A predicate with its declared argument table.
///
/// The declared arity is `args.len()`; it must agree with the predicate
/// shape and may not exceed the three operands a claim carries.
#[derive(Debug, Clone, Copy)]
pub struct Verifier {
    pub predicate: Predicate,
    pub args: &'static [ArgInfo],
}

impl Verifier {
    #[must_use]
    pub const fn new(predicate: Predicate, args: &'static [ArgInfo]) -> Self {
        Self { predicate, args }
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.args.len()
    }

    fn run(&self, test: &mut Test<'_>, operands: &[Value<'_>; 3]) -> Verdict {
        let arity = self.arity();
        if arity > operands.len() || arity != self.predicate.arity() {
            return Err(Failure::UnsupportedArity(arity));
        }
        for (info, operand) in self.args.iter().zip(operands) {
            if operand.kind() != info.kind {
                return Err(Failure::KindMismatch(info.kind_mismatch_msg));
            }
            if operand.is_out_of_range() {
                return Err(Failure::OutOfRange(operand.source().to_owned()));
            }
        }
        let [a, b, c] = *operands;
        match self.predicate {
            Predicate::Nullary(f) => f(test),
            Predicate::Unary(f) => f(test, a),
            Predicate::Binary(f) => f(test, a, b),
            Predicate::Ternary(f) => f(test, a, b, c),
        }
    }
}

/// Verify a claim within a running test case.
///
/// Records the claim location in the context and writes a diagnostic line
/// when verification fails.
pub fn verify_claim(test: &mut Test<'_>, claim: &Claim<'_>) -> bool {
    let verifier = (claim.make_verifier)();
    test.set_location(claim.location);
    match verifier.run(test, &claim.args) {
        Ok(()) => true,
        Err(failure) => test.report(&failure),
    }
}

// Shared relation machinery.

const ASSERTION: &str = "assertion ";

/// Resolve the relation operand, rejecting operands whose token differs
/// from their source text.
fn resolve_relation(
    left: &Value<'_>,
    rel: &Value<'_>,
    right: &Value<'_>,
    lead: &'static str,
) -> Result<(Relation, Expression), Failure> {
    let token = rel.as_string().unwrap_or_default();
    let expr = Expression::of(left, rel, right);
    if token != rel.source() {
        return Err(Failure::InconsistentRelation {
            lead,
            expr,
            relation: token.to_string(),
        });
    }
    Ok((Relation::find(token), expr))
}

fn compare<T: Ord + ?Sized>(
    relation: Relation,
    expr: Expression,
    left: &T,
    right: &T,
    render: impl Fn(&T) -> String,
) -> Verdict {
    match relation.holds(left.cmp(right)) {
        None => Err(Failure::UnsupportedRelation(expr)),
        Some(true) => Ok(()),
        Some(false) => Err(Failure::RelationFailed {
            expr,
            left: render(left),
            inverted: relation.invert(),
            right: render(right),
        }),
    }
}

// True and false.

const BOOLEAN_VALUE: &[ArgInfo] = &[ArgInfo::new(Kind::Boolean, "value is not a boolean")];

fn verify_true(_: &mut Test<'_>, value: Value<'_>) -> Verdict {
    if value.as_boolean() {
        return Ok(());
    }
    Err(Failure::NotTrue(value.source().to_string()))
}

#[must_use]
pub const fn verifier_for_true() -> Verifier {
    Verifier::new(Predicate::Unary(verify_true), BOOLEAN_VALUE)
}

fn verify_false(_: &mut Test<'_>, value: Value<'_>) -> Verdict {
    if !value.as_boolean() {
        return Ok(());
    }
    Err(Failure::NotFalse(value.source().to_string()))
}

#[must_use]
pub const fn verifier_for_false() -> Verifier {
    Verifier::new(Predicate::Unary(verify_false), BOOLEAN_VALUE)
}

// Boolean relation. Only == and != are supported.

const BOOLEAN_RELATION: &[ArgInfo] = &[
    ArgInfo::new(Kind::Boolean, "left hand side is not a boolean"),
    ArgInfo::new(Kind::String, "relation is not a string"),
    ArgInfo::new(Kind::Boolean, "right hand side is not a boolean"),
];

fn verify_boolean_relation(
    _: &mut Test<'_>,
    left: Value<'_>,
    rel: Value<'_>,
    right: Value<'_>,
) -> Verdict {
    let (relation, expr) = resolve_relation(&left, &rel, &right, "")?;
    match relation {
        Relation::Eq | Relation::Ne => compare(
            relation,
            expr,
            &left.as_boolean(),
            &right.as_boolean(),
            |b| boolean_as_text(*b).to_string(),
        ),
        _ => Err(Failure::UnsupportedRelation(expr)),
    }
}

#[must_use]
pub const fn verifier_for_boolean_relation() -> Verifier {
    Verifier::new(Predicate::Ternary(verify_boolean_relation), BOOLEAN_RELATION)
}

// Rune relation.

const RUNE_RELATION: &[ArgInfo] = &[
    ArgInfo::new(Kind::Rune, "left hand side is not a rune"),
    ArgInfo::new(Kind::String, "relation is not a string"),
    ArgInfo::new(Kind::Rune, "right hand side is not a rune"),
];

/// Relation is one of `==`, `!=`, `<=`, `>=`, `<` and `>`.
fn verify_rune_relation(
    _: &mut Test<'_>,
    left: Value<'_>,
    rel: Value<'_>,
    right: Value<'_>,
) -> Verdict {
    let (relation, expr) = resolve_relation(&left, &rel, &right, ASSERTION)?;
    compare(relation, expr, &left.as_rune(), &right.as_rune(), |c| {
        quote_rune(*c)
    })
}

#[must_use]
pub const fn verifier_for_rune_relation() -> Verifier {
    Verifier::new(Predicate::Ternary(verify_rune_relation), RUNE_RELATION)
}

// Signed integer relation.

const INTEGER_RELATION: &[ArgInfo] = &[
    ArgInfo::new(Kind::Integer, "left hand side is not an integer"),
    ArgInfo::new(Kind::String, "relation is not a string"),
    ArgInfo::new(Kind::Integer, "right hand side is not an integer"),
];

fn verify_integer_relation(
    _: &mut Test<'_>,
    left: Value<'_>,
    rel: Value<'_>,
    right: Value<'_>,
) -> Verdict {
    let (relation, expr) = resolve_relation(&left, &rel, &right, ASSERTION)?;
    compare(
        relation,
        expr,
        &left.as_integer(),
        &right.as_integer(),
        ToString::to_string,
    )
}

#[must_use]
pub const fn verifier_for_integer_relation() -> Verifier {
    Verifier::new(Predicate::Ternary(verify_integer_relation), INTEGER_RELATION)
}

// Unsigned integer relation.

const UNSIGNED_RELATION: &[ArgInfo] = &[
    ArgInfo::new(Kind::Unsigned, "left hand side is not an unsigned integer"),
    ArgInfo::new(Kind::String, "relation is not a string"),
    ArgInfo::new(Kind::Unsigned, "right hand side is not an unsigned integer"),
];

fn verify_unsigned_relation(
    _: &mut Test<'_>,
    left: Value<'_>,
    rel: Value<'_>,
    right: Value<'_>,
) -> Verdict {
    let (relation, expr) = resolve_relation(&left, &rel, &right, ASSERTION)?;
    compare(
        relation,
        expr,
        &left.as_unsigned(),
        &right.as_unsigned(),
        ToString::to_string,
    )
}

#[must_use]
pub const fn verifier_for_unsigned_relation() -> Verifier {
    Verifier::new(
        Predicate::Ternary(verify_unsigned_relation),
        UNSIGNED_RELATION,
    )
}

// String relation. NULL operands fail regardless of the relation.

const STRING_RELATION: &[ArgInfo] = &[
    ArgInfo::new(Kind::String, "left hand side is not a string"),
    ArgInfo::new(Kind::String, "relation is not a string"),
    ArgInfo::new(Kind::String, "right hand side is not a string"),
];

fn verify_string_relation(
    _: &mut Test<'_>,
    left: Value<'_>,
    rel: Value<'_>,
    right: Value<'_>,
) -> Verdict {
    let (relation, expr) = resolve_relation(&left, &rel, &right, ASSERTION)?;
    let Some(lhs) = left.as_string() else {
        return Err(Failure::NullOperand {
            expr,
            side: Side::Left,
        });
    };
    let Some(rhs) = right.as_string() else {
        return Err(Failure::NullOperand {
            expr,
            side: Side::Right,
        });
    };
    compare(relation, expr, lhs, rhs, quote_string)
}

#[must_use]
pub const fn verifier_for_string_relation() -> Verifier {
    Verifier::new(Predicate::Ternary(verify_string_relation), STRING_RELATION)
}

// Null and not-null.

const POINTER_VALUE: &[ArgInfo] = &[ArgInfo::new(Kind::Pointer, "argument is not a pointer")];

fn verify_null(_: &mut Test<'_>, value: Value<'_>) -> Verdict {
    let pointer = value.as_pointer();
    if pointer.is_null() {
        return Ok(());
    }
    Err(Failure::NotNull {
        expr: value.source().to_string(),
        address: pointer.addr(),
    })
}

#[must_use]
pub const fn verifier_for_null() -> Verifier {
    Verifier::new(Predicate::Unary(verify_null), POINTER_VALUE)
}

fn verify_not_null(_: &mut Test<'_>, value: Value<'_>) -> Verdict {
    if !value.as_pointer().is_null() {
        return Ok(());
    }
    Err(Failure::IsNull(value.source().to_string()))
}

#[must_use]
pub const fn verifier_for_not_null() -> Verifier {
    Verifier::new(Predicate::Unary(verify_not_null), POINTER_VALUE)
}
