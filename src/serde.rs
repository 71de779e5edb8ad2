//! JSON‑deserializable field descriptions.
//!
//! These types describe where a field sits in a word and how to read it. They are
//! intended to be loaded from a layout file and converted into [crate::field::FieldSpec]
//! with `TryFrom`, which rejects ranges that do not fit in a word.

use serde::{Deserialize, Serialize};

/// Mask and sign arithmetic to use when reading a field.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExtractModeDef {
    #[default]
    /// Right‑justify and sign‑extend from the field's top bit.
    Strict,
    /// Older mask and sign arithmetic, kept for compatibility.
    Legacy,
}

impl From<ExtractModeDef> for crate::value::ExtractMode {
    fn from(value: ExtractModeDef) -> Self {
        match value {
            ExtractModeDef::Strict => crate::value::ExtractMode::Strict,
            ExtractModeDef::Legacy => crate::value::ExtractMode::Legacy,
        }
    }
}

/// Description of a single field inside a 64‑bit word.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldSpecDef {
    /// Position of the field's least significant bit.
    pub offset_bits: usize,
    /// Width of the field in bits.
    pub len_bits: usize,
    /// Whether the field holds a two's‑complement value.
    #[serde(default)]
    pub signed: bool,
    /// Optional extraction mode; defaults to strict.
    #[serde(default)]
    pub mode: Option<ExtractModeDef>,
}
