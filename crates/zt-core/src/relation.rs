//! Binary relations used by comparison claims.

use std::cmp::Ordering;
use std::fmt;

/// One of the typical binary relations, or `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relation {
    #[default]
    Invalid,
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl Relation {
    /// All valid relations.
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Le, Self::Ge, Self::Lt, Self::Gt];

    /// Find a relation by its operator token. Unknown tokens are `Invalid`.
    #[must_use]
    pub fn find(token: &str) -> Self {
        match token {
            "==" => Self::Eq,
            "!=" => Self::Ne,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            "<" => Self::Lt,
            ">" => Self::Gt,
            _ => Self::Invalid,
        }
    }

    /// Map a numeric relation code. `0` is invalid and `1..=6` follow
    /// declaration order; anything else is invalid too.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Eq,
            2 => Self::Ne,
            3 => Self::Le,
            4 => Self::Ge,
            5 => Self::Lt,
            6 => Self::Gt,
            _ => Self::Invalid,
        }
    }

    #[must_use]
    pub const fn as_text(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }

    /// The logical complement. `Invalid` stays `Invalid`.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Invalid => Self::Invalid,
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Le => Self::Gt,
            Self::Ge => Self::Lt,
            Self::Lt => Self::Ge,
            Self::Gt => Self::Le,
        }
    }

    /// Whether the relation holds for two operands that compare as `ordering`.
    ///
    /// Returns `None` for `Invalid`.
    #[must_use]
    pub const fn holds(self, ordering: Ordering) -> Option<bool> {
        let holds = match self {
            Self::Invalid => return None,
            Self::Eq => ordering.is_eq(),
            Self::Ne => ordering.is_ne(),
            Self::Le => ordering.is_le(),
            Self::Ge => ordering.is_ge(),
            Self::Lt => ordering.is_lt(),
            Self::Gt => ordering.is_gt(),
        };
        Some(holds)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}
