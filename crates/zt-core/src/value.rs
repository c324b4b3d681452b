//! Typed claim operands paired with the source text that produced them.

use std::ptr;

/// Kind of payload carried by a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nothing,
    Boolean,
    /// A single byte-sized character.
    Rune,
    Integer,
    Unsigned,
    String,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload<'a> {
    Nothing,
    Boolean(bool),
    Rune(i32),
    Integer(i64),
    Unsigned(u64),
    String(Option<&'a str>),
    Pointer(*const ()),
    /// An operand whose value does not fit the payload of the given kind.
    OutOfRange(Kind),
}

/// A packed claim operand.
///
/// Values are immutable once packed. The source text is the literal
/// expression that produced the payload and is used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<'a> {
    payload: Payload<'a>,
    source: &'a str,
}

impl<'a> Value<'a> {
    /// The empty operand used for unused claim slots.
    #[must_use]
    pub const fn nothing() -> Self {
        Self {
            payload: Payload::Nothing,
            source: "",
        }
    }

    #[must_use]
    pub const fn boolean(value: bool, source: &'a str) -> Self {
        Self {
            payload: Payload::Boolean(value),
            source,
        }
    }

    /// Pack a character.
    ///
    /// Negative inputs come from sign-extended bytes on targets where
    /// `char` is signed; they are masked back into `0..=255`.
    #[must_use]
    pub const fn rune(value: i32, source: &'a str) -> Self {
        let value = if value < 0 { value & 0xFF } else { value };
        Self {
            payload: Payload::Rune(value),
            source,
        }
    }

    #[must_use]
    pub const fn integer(value: i64, source: &'a str) -> Self {
        Self {
            payload: Payload::Integer(value),
            source,
        }
    }

    #[must_use]
    pub const fn unsigned(value: u64, source: &'a str) -> Self {
        Self {
            payload: Payload::Unsigned(value),
            source,
        }
    }

    /// Pack a string. `None` stands for a NULL string.
    #[must_use]
    pub fn string(value: impl Into<Option<&'a str>>, source: &'a str) -> Self {
        Self {
            payload: Payload::String(value.into()),
            source,
        }
    }

    /// Pack an integer operand, or mark it out of range if it does not fit.
    #[must_use]
    pub fn integer_operand(value: impl IntegerOperand, source: &'a str) -> Self {
        match value.to_integer() {
            Some(value) => Self::integer(value, source),
            None => Self::out_of_range(Kind::Integer, source),
        }
    }

    /// Pack an unsigned operand, or mark it out of range if it does not fit.
    /// Negative values never fit.
    #[must_use]
    pub fn unsigned_operand(value: impl UnsignedOperand, source: &'a str) -> Self {
        match value.to_unsigned() {
            Some(value) => Self::unsigned(value, source),
            None => Self::out_of_range(Kind::Unsigned, source),
        }
    }

    /// Pack a character operand, or mark it out of range if it is not a
    /// single byte.
    #[must_use]
    pub fn rune_operand(value: impl RuneOperand, source: &'a str) -> Self {
        match value.to_rune() {
            Some(value) => Self::rune(value, source),
            None => Self::out_of_range(Kind::Rune, source),
        }
    }

    /// An operand of `kind` whose value could not be packed.
    ///
    /// It reports `kind` so verifiers accept it in that position, carries no
    /// payload, and fails verification before any predicate runs.
    #[must_use]
    pub const fn out_of_range(kind: Kind, source: &'a str) -> Self {
        Self {
            payload: Payload::OutOfRange(kind),
            source,
        }
    }

    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.payload, Payload::OutOfRange(_))
    }

    #[must_use]
    pub fn pointer(value: impl AsPointer, source: &'a str) -> Self {
        Self {
            payload: Payload::Pointer(value.as_pointer()),
            source,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self.payload {
            Payload::Nothing => Kind::Nothing,
            Payload::Boolean(_) => Kind::Boolean,
            Payload::Rune(_) => Kind::Rune,
            Payload::Integer(_) => Kind::Integer,
            Payload::Unsigned(_) => Kind::Unsigned,
            Payload::String(_) => Kind::String,
            Payload::Pointer(_) => Kind::Pointer,
            Payload::OutOfRange(kind) => kind,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Boolean payload, `false` for other kinds.
    #[must_use]
    pub const fn as_boolean(&self) -> bool {
        matches!(self.payload, Payload::Boolean(true))
    }

    /// Rune payload, `0` for other kinds.
    #[must_use]
    pub const fn as_rune(&self) -> i32 {
        match self.payload {
            Payload::Rune(value) => value,
            _ => 0,
        }
    }

    /// Integer payload, `0` for other kinds.
    #[must_use]
    pub const fn as_integer(&self) -> i64 {
        match self.payload {
            Payload::Integer(value) => value,
            _ => 0,
        }
    }

    /// Unsigned payload, `0` for other kinds.
    #[must_use]
    pub const fn as_unsigned(&self) -> u64 {
        match self.payload {
            Payload::Unsigned(value) => value,
            _ => 0,
        }
    }

    /// String payload, `None` for NULL strings and for other kinds.
    #[must_use]
    pub const fn as_string(&self) -> Option<&'a str> {
        match self.payload {
            Payload::String(value) => value,
            _ => None,
        }
    }

    /// Pointer payload, null for other kinds.
    #[must_use]
    pub const fn as_pointer(&self) -> *const () {
        match self.payload {
            Payload::Pointer(value) => value,
            _ => ptr::null(),
        }
    }
}

impl Default for Value<'_> {
    fn default() -> Self {
        Self::nothing()
    }
}

/// Anything whose identity can be packed as a pointer value.
pub trait AsPointer {
    fn as_pointer(&self) -> *const ();
}

impl<T> AsPointer for *const T {
    fn as_pointer(&self) -> *const () {
        self.cast()
    }
}

impl<T> AsPointer for *mut T {
    fn as_pointer(&self) -> *const () {
        self.cast_const().cast()
    }
}

impl<T> AsPointer for &T {
    fn as_pointer(&self) -> *const () {
        ptr::from_ref::<T>(*self).cast()
    }
}

impl<T> AsPointer for Option<&T> {
    fn as_pointer(&self) -> *const () {
        self.map_or(ptr::null(), |value| ptr::from_ref(value).cast())
    }
}

/// Integer types that a signed integer claim accepts.
///
/// Floating point types have no impl, so comparing a float fails to compile.
pub trait IntegerOperand {
    /// The value as `i64`, or `None` when it does not fit.
    fn to_integer(self) -> Option<i64>;
}

/// Integer types that an unsigned integer claim accepts.
pub trait UnsignedOperand {
    /// The value as `u64`, or `None` when it is negative or too large.
    fn to_unsigned(self) -> Option<u64>;
}

/// Character types that a rune claim accepts.
pub trait RuneOperand {
    /// The value as a rune payload, or `None` when it is not a single byte.
    fn to_rune(self) -> Option<i32>;
}

macro_rules! lossless {
    ($trait:ident, $method:ident, $target:ty: $($source:ty),*) => {
        $(impl $trait for $source {
            fn $method(self) -> Option<$target> {
                Some(<$target>::from(self))
            }
        })*
    };
}

macro_rules! checked {
    ($trait:ident, $method:ident, $target:ty: $($source:ty),*) => {
        $(impl $trait for $source {
            fn $method(self) -> Option<$target> {
                <$target>::try_from(self).ok()
            }
        })*
    };
}

lossless!(IntegerOperand, to_integer, i64: i8, i16, i32, i64, u8, u16, u32);
checked!(IntegerOperand, to_integer, i64: isize, i128, u64, usize, u128);
lossless!(UnsignedOperand, to_unsigned, u64: u8, u16, u32, u64);
checked!(UnsignedOperand, to_unsigned, u64: usize, u128, i8, i16, i32, i64, isize, i128);
lossless!(RuneOperand, to_rune, i32: u8, i8);

impl RuneOperand for char {
    fn to_rune(self) -> Option<i32> {
        u8::try_from(self).ok().map(i32::from)
    }
}

/// Plain `int` characters; negative values are sign-extended bytes.
impl RuneOperand for i32 {
    fn to_rune(self) -> Option<i32> {
        (-128..=255).contains(&self).then_some(self)
    }
}
