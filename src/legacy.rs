//! Compatibility extraction that keeps the older mask and sign arithmetic.
//!
//! The older routine built its lower mask by shifting all-ones *right* by the offset,
//! tested the sign on bit `width` rather than `width - 1`, and subtracted `2 << width`
//! for negative values. Here the same shift amounts are kept with the word width made
//! explicit: shifts of 64 or more give 0 and subtraction wraps.
//!
//! Consequences worth knowing before relying on this mode:
//! - only bits at positions `>= max(offset, 64 - offset)` survive the mask, so any
//!   field at offset 0 reads as 0;
//! - the masked value never has bit `width` set, so the negative branch is never taken
//!   for an in-range field and signed reads equal unsigned reads.
//!
//! Use [crate::bits::extract_field] unless bit-for-bit compatibility is required.

use crate::{
    bits::{Word, check_field, shl_or_zero},
    errors::FieldError,
};

/// Reads a field with the older arithmetic, returning the raw `i64` it produced.
///
/// See the module docs for how this differs from [crate::bits::extract_field].
pub fn extract_field_legacy(
    word: Word,
    offset: usize,
    width: usize,
    signed: bool,
) -> Result<i64, FieldError> {
    check_field(offset, width)?;

    Ok(extract_unchecked(word, offset, width, signed))
}

pub(crate) fn extract_unchecked(word: Word, offset: usize, width: usize, signed: bool) -> i64 {
    let lower_mask = Word::MAX >> offset;
    let upper_mask = shl_or_zero(Word::MAX, offset + width);
    let mask = !(upper_mask | lower_mask);

    let extract = (word & mask) >> offset;
    let negative = extract & shl_or_zero(1, width) != 0;

    if signed && negative {
        return extract.wrapping_sub(shl_or_zero(2, width)) as i64;
    }

    extract as i64
}

#[cfg(test)]
mod tests {
    use crate::{bits::extract_field, value::Value};

    use super::*;

    #[test]
    fn test_offset_zero_reads_zero() {
        assert_eq!(extract_field_legacy(0b1111, 0, 4, false).unwrap(), 0);
        assert_eq!(extract_field_legacy(u64::MAX, 0, 64, true).unwrap(), 0);
    }

    #[test]
    fn test_high_field() {
        let word = 0xF000_0000_0000_0000;
        assert_eq!(extract_field_legacy(word, 60, 4, false).unwrap(), 15);
        assert_eq!(extract_field_legacy(word, 60, 4, true).unwrap(), 15);
    }

    #[test]
    fn test_upper_half() {
        let word = 0xFFFF_FFFF_0000_0000;
        assert_eq!(extract_field_legacy(word, 32, 32, true).unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_low_bits_of_field_masked_off() {
        // lower mask covers bits 0..34, so only bits 34..38 of the field survive
        let word: u64 = 0xFF << 30;
        assert_eq!(extract_field_legacy(word, 30, 8, false).unwrap(), 0xF0);
        assert_eq!(extract_field(word, 30, 8, false).unwrap(), Value::U64(0xFF));
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(
            extract_field_legacy(0, 64, 0, false).unwrap_err(),
            FieldError::OffsetOutOfRange { offset: 64 }
        );
        assert_eq!(
            extract_field_legacy(0, 40, 30, true).unwrap_err(),
            FieldError::FieldOverflow {
                offset: 40,
                width: 30
            }
        );
    }
}
