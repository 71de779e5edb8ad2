//! Validated field descriptors for repeated reads of the same bit range.

use crate::{
    bits::{self, Word},
    errors::FieldError,
    value::{ExtractMode, Value},
};

/// A contiguous run of bits `[offset_bits, offset_bits + len_bits)` inside a [Word].
///
/// The range is checked once on construction, so [FieldSpec::extract] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    offset_bits: usize,
    len_bits: usize,
    signed: bool,
    mode: ExtractMode,
}

impl FieldSpec {
    /// Unsigned field of `len_bits` bits starting at `offset_bits`.
    pub fn new(offset_bits: usize, len_bits: usize) -> Result<Self, FieldError> {
        bits::check_field(offset_bits, len_bits)?;

        Ok(FieldSpec {
            offset_bits,
            len_bits,
            signed: false,
            mode: ExtractMode::Strict,
        })
    }

    /// Two's-complement field of `len_bits` bits starting at `offset_bits`.
    pub fn new_signed(offset_bits: usize, len_bits: usize) -> Result<Self, FieldError> {
        Ok(FieldSpec {
            signed: true,
            ..Self::new(offset_bits, len_bits)?
        })
    }

    /// Returns this descriptor reading with `mode` instead.
    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    /// Position of the field's least significant bit.
    pub fn offset_bits(&self) -> usize {
        self.offset_bits
    }

    /// Width of the field in bits.
    pub fn len_bits(&self) -> usize {
        self.len_bits
    }

    /// First bit position past the field.
    pub fn end_bits(&self) -> usize {
        self.offset_bits + self.len_bits
    }

    /// Whether the field is read as two's complement.
    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Mask and sign arithmetic used by [FieldSpec::extract].
    pub fn mode(&self) -> ExtractMode {
        self.mode
    }

    /// Word with exactly this field's bits set, in place.
    pub fn mask(&self) -> Word {
        bits::field_mask(self.offset_bits, self.len_bits)
    }

    /// Reads this field out of `word`.
    pub fn extract(&self, word: Word) -> Value {
        bits::extract_checked(
            self.mode,
            word,
            self.offset_bits,
            self.len_bits,
            self.signed,
        )
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::FieldSpecDef> for FieldSpec {
    type Error = FieldError;

    fn try_from(value: crate::serde::FieldSpecDef) -> Result<Self, Self::Error> {
        let spec = if value.signed {
            FieldSpec::new_signed(value.offset_bits, value.len_bits)?
        } else {
            FieldSpec::new(value.offset_bits, value.len_bits)?
        };

        Ok(spec.with_mode(value.mode.map(Into::into).unwrap_or_default()))
    }
}
