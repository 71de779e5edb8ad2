//! Bit-field insertion and extraction on a single 64-bit word.
//!
//! Bits are addressed LSB-first: bit 0 is the least significant bit of the word.
//! Every function is pure; words are taken and returned by value.

use log::{debug, trace};

use crate::{
    errors::FieldError,
    legacy,
    value::{ExtractMode, Value},
};

/// A 64-bit word holding packed sub-fields.
pub type Word = u64;

/// Number of bits in a [Word].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Checks that `[offset, offset + width)` lies inside a word.
pub fn check_field(offset: usize, width: usize) -> Result<(), FieldError> {
    let err = if offset >= WORD_BITS {
        FieldError::OffsetOutOfRange { offset }
    } else if width > WORD_BITS {
        FieldError::WidthOutOfRange { width }
    } else if offset + width > WORD_BITS {
        FieldError::FieldOverflow { offset, width }
    } else {
        return Ok(());
    };

    debug!("rejected field offset={} width={}: {}", offset, width, err);
    Err(err)
}

/// Shifts `value` left by `shift`, yielding 0 once the shift reaches the word width.
pub(crate) fn shl_or_zero(value: Word, shift: usize) -> Word {
    u32::try_from(shift)
        .ok()
        .and_then(|s| value.checked_shl(s))
        .unwrap_or(0)
}

/// ORs `value << offset` into `word`.
///
/// Destination bits are not cleared first, so a bit already set in `word` stays set.
/// Bits of `value` that would land above bit 63 are dropped.
pub fn insert_byte(word: Word, offset: usize, value: u8) -> Result<Word, FieldError> {
    if offset >= WORD_BITS {
        debug!("rejected byte insert at offset {}", offset);
        return Err(FieldError::OffsetOutOfRange { offset });
    }

    Ok(word | (Word::from(value) << offset))
}

/// Mask with exactly the bits `[offset, offset + width)` set. Inputs must already be checked.
pub(crate) fn field_mask(offset: usize, width: usize) -> Word {
    let lower_mask = !shl_or_zero(Word::MAX, offset);
    let upper_mask = shl_or_zero(Word::MAX, offset + width);

    !(upper_mask | lower_mask)
}

/// Right-justified bits of the field. Inputs must already be checked.
pub(crate) fn extract_raw(word: Word, offset: usize, width: usize) -> Word {
    (word & field_mask(offset, width)) >> offset
}

pub(crate) fn extract_checked(
    mode: ExtractMode,
    word: Word,
    offset: usize,
    width: usize,
    signed: bool,
) -> Value {
    match (mode, signed) {
        (ExtractMode::Strict, true) => {
            Value::I64(sign_extend(extract_raw(word, offset, width), width))
        }
        (ExtractMode::Strict, false) => Value::U64(extract_raw(word, offset, width)),
        (ExtractMode::Legacy, true) => {
            Value::I64(legacy::extract_unchecked(word, offset, width, true))
        }
        (ExtractMode::Legacy, false) => {
            Value::U64(legacy::extract_unchecked(word, offset, width, false) as u64)
        }
    }
}

/// Reads `width` bits starting at `offset`, right-justified.
///
/// With `signed` the field is read as two's complement and sign-extended from bit
/// `width - 1`; otherwise it is returned as an unsigned magnitude. A zero-width field
/// reads as zero.
pub fn extract_field(
    word: Word,
    offset: usize,
    width: usize,
    signed: bool,
) -> Result<Value, FieldError> {
    extract_field_with(ExtractMode::Strict, word, offset, width, signed)
}

/// Like [extract_field], choosing the mask and sign arithmetic with `mode`.
///
/// In [ExtractMode::Legacy] a signed field yields `Value::I64` and an unsigned one the
/// same bits as `Value::U64`.
pub fn extract_field_with(
    mode: ExtractMode,
    word: Word,
    offset: usize,
    width: usize,
    signed: bool,
) -> Result<Value, FieldError> {
    check_field(offset, width)?;

    let value = extract_checked(mode, word, offset, width, signed);
    trace!("extract offset={} width={} -> {:?}", offset, width, value);

    Ok(value)
}

/// Sign-extends the low `bits` of `value` to a full `i64`. Zero bits yields 0.
pub fn sign_extend(value: Word, bits: usize) -> i64 {
    if bits == 0 {
        return 0;
    }

    let shift = WORD_BITS - bits.min(WORD_BITS);
    ((value << shift) as i64) >> shift
}
