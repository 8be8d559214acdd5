//! Error Types
//!
//! Recognition itself never fails: unknown strokes, missing matches and
//! unauthorized combos are ordinary outcomes. Errors only exist where data
//! enters the system (combo libraries, slot boards).

use core::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// LIBRARY ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Combo library load error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibraryError {
    /// Combo pattern has no gestures
    EmptyPattern,
    /// Combo pattern exceeds the maximum sequence length
    PatternTooLong,
    /// Another combo already uses this identifier
    DuplicateId,
    /// Combo identifier is empty
    EmptyId,
    /// Pattern notation contains a character that is not a gesture glyph
    UnknownSymbol(char),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::EmptyPattern => write!(f, "combo pattern is empty"),
            LibraryError::PatternTooLong => write!(f, "combo pattern is too long"),
            LibraryError::DuplicateId => write!(f, "combo id is already registered"),
            LibraryError::EmptyId => write!(f, "combo id is empty"),
            LibraryError::UnknownSymbol(c) => write!(f, "unknown gesture symbol {:?}", c),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SLOT ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Slot board error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// Slot index out of range
    NoSuchSlot,
    /// Another slot is already bound to this key
    KeyInUse,
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::NoSuchSlot => write!(f, "no such slot"),
            SlotError::KeyInUse => write!(f, "key already bound to a slot"),
        }
    }
}
