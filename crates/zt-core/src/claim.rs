//! Claims: a verifier factory, up to three operands and a source location.
//!
//! Claims are normally built by the macros exported from the crate root,
//! which capture the source text of every operand with `stringify!` and the
//! location with `file!`/`line!`.

use crate::value::Value;
use crate::verifier::{
    Verifier, verifier_for_boolean_relation, verifier_for_false, verifier_for_integer_relation,
    verifier_for_not_null, verifier_for_null, verifier_for_rune_relation,
    verifier_for_string_relation, verifier_for_true, verifier_for_unsigned_relation,
};

/// Source file and line of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

/// A verifiable claim about up to three values.
///
/// Unused operand slots hold [`Value::nothing`].
#[derive(Debug, Clone, Copy)]
pub struct Claim<'a> {
    pub make_verifier: fn() -> Verifier,
    pub args: [Value<'a>; 3],
    pub location: Location,
}

impl<'a> Claim<'a> {
    #[must_use]
    pub const fn new(
        location: Location,
        make_verifier: fn() -> Verifier,
        args: [Value<'a>; 3],
    ) -> Self {
        Self {
            make_verifier,
            args,
            location,
        }
    }

    const fn unary(location: Location, make_verifier: fn() -> Verifier, value: Value<'a>) -> Self {
        Self::new(
            location,
            make_verifier,
            [value, Value::nothing(), Value::nothing()],
        )
    }
}

#[must_use]
pub const fn is_true(location: Location, value: Value<'_>) -> Claim<'_> {
    Claim::unary(location, verifier_for_true, value)
}

#[must_use]
pub const fn is_false(location: Location, value: Value<'_>) -> Claim<'_> {
    Claim::unary(location, verifier_for_false, value)
}

#[must_use]
pub const fn cmp_bool<'a>(
    location: Location,
    left: Value<'a>,
    rel: Value<'a>,
    right: Value<'a>,
) -> Claim<'a> {
    Claim::new(location, verifier_for_boolean_relation, [left, rel, right])
}

#[must_use]
pub const fn cmp_rune<'a>(
    location: Location,
    left: Value<'a>,
    rel: Value<'a>,
    right: Value<'a>,
) -> Claim<'a> {
    Claim::new(location, verifier_for_rune_relation, [left, rel, right])
}

#[must_use]
pub const fn cmp_int<'a>(
    location: Location,
    left: Value<'a>,
    rel: Value<'a>,
    right: Value<'a>,
) -> Claim<'a> {
    Claim::new(location, verifier_for_integer_relation, [left, rel, right])
}

#[must_use]
pub const fn cmp_uint<'a>(
    location: Location,
    left: Value<'a>,
    rel: Value<'a>,
    right: Value<'a>,
) -> Claim<'a> {
    Claim::new(location, verifier_for_unsigned_relation, [left, rel, right])
}

#[must_use]
pub const fn cmp_str<'a>(
    location: Location,
    left: Value<'a>,
    rel: Value<'a>,
    right: Value<'a>,
) -> Claim<'a> {
    Claim::new(location, verifier_for_string_relation, [left, rel, right])
}

#[must_use]
pub const fn is_null(location: Location, value: Value<'_>) -> Claim<'_> {
    Claim::unary(location, verifier_for_null, value)
}

#[must_use]
pub const fn not_null(location: Location, value: Value<'_>) -> Claim<'_> {
    Claim::unary(location, verifier_for_not_null, value)
}
