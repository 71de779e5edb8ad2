//! Error types for field descriptors that do not fit in a [crate::bits::Word].

use thiserror::Error;

/// Errors produced when an offset/width pair does not describe a field inside a 64-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Bit offset is 64 or more.
    #[error("bit offset {offset} is outside the word (max 63)")]
    OffsetOutOfRange { offset: usize },
    /// Field width is more than 64 bits.
    #[error("field width {width} is wider than the word (max 64)")]
    WidthOutOfRange { width: usize },
    /// Field runs past the top of the word.
    #[error("field of {width} bits at offset {offset} runs past bit 63")]
    FieldOverflow { offset: usize, width: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FieldError::OffsetOutOfRange { offset: 64 }.to_string(),
            "bit offset 64 is outside the word (max 63)"
        );
        assert_eq!(
            FieldError::FieldOverflow {
                offset: 60,
                width: 8
            }
            .to_string(),
            "field of 8 bits at offset 60 runs past bit 63"
        );
    }
}
