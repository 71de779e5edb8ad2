//! Extracted values and the arithmetic used to produce them.

/// A value read out of a word, either as an unsigned magnitude or a signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    I64(i64),
    U64(u64),
}

impl Value {
    /// Returns the value as `u64` if it is unsigned or a non-negative signed value.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Value::U64(v) => Some(v),
            Value::I64(v) => u64::try_from(v).ok(),
        }
    }

    /// Returns the value as `i64` if it fits.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(v),
            Value::U64(v) => i64::try_from(v).ok(),
        }
    }

    /// Returns true for a value read from a two's-complement field.
    pub fn is_signed(self) -> bool {
        matches!(self, Value::I64(_))
    }
}

/// Which mask and sign arithmetic [crate::bits::extract_field_with] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Right-justify the field and sign-extend from its top bit.
    #[default]
    Strict,
    /// Bit-for-bit reproduction of the older mask and sign arithmetic, see [crate::legacy].
    Legacy,
}
