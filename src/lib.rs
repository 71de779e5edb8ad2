//! # wordfield
//!
//! Bit-field insertion and extraction on a single 64-bit word.
//!
//! Insert a byte at any bit offset, or read back any contiguous run of bits as an
//! unsigned or two's-complement value. Every operation is a pure function; offsets and
//! widths that do not fit in the word are rejected with a [errors::FieldError].
//!
//! ## Example
//!
//! ```
//! use wordfield::bits::{extract_field, insert_byte};
//! use wordfield::value::Value;
//!
//! let word = insert_byte(0, 4, 0xFF).unwrap();
//! assert_eq!(word, 0x0FF0);
//! assert_eq!(extract_field(word, 4, 8, false).unwrap(), Value::U64(0xFF));
//! assert_eq!(extract_field(word, 4, 4, true).unwrap(), Value::I64(-1));
//! ```
//!
//! Fields read repeatedly can be described once with [field::FieldSpec]. With the `serde`
//! feature, descriptors can also be loaded from JSON through `serde::FieldSpecDef`.

pub mod bits;
pub mod errors;
pub mod field;
pub mod legacy;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;
