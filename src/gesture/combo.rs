//! Combo Library - Gesture sequences to effects
//!
//! Unlike the primitive classifier, which only knows directions, the
//! library gives sequences meaning: each combo maps an ordered pattern of
//! primitives to an identifier and an effect token.
//!
//! # Architecture
//! ```text
//! [Slash, Backslash] → "FireSlash" → EffectToken
//! ```
//!
//! Registration order is kept; the matcher uses it as the tie-break between
//! patterns of equal length.

use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use super::primitive::PrimitiveGesture;
use crate::error::LibraryError;

// ═══════════════════════════════════════════════════════════════════════════════
// EFFECT TOKEN
// ═══════════════════════════════════════════════════════════════════════════════

/// Opaque handle the effect collaborator resolves to something visible
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectToken(pub u64);

impl EffectToken {
    pub const fn new(id: u64) -> Self {
        EffectToken(id)
    }

    /// Derive a token from a name (FNV-1a hash)
    pub const fn from_name(s: &str) -> Self {
        let mut hash: u64 = 0xcbf29ce484222325;
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(0x100000001b3);
            i += 1;
        }
        EffectToken(hash)
    }

    /// Get raw value
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PATTERN
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum gestures in a combo pattern
pub const MAX_PATTERN_LEN: usize = 8;

/// An ordered, non-empty gesture sequence
pub type Pattern = heapless::Vec<PrimitiveGesture, MAX_PATTERN_LEN>;

/// Build a pattern from gestures
pub fn pattern_from(gestures: &[PrimitiveGesture]) -> Result<Pattern, LibraryError> {
    if gestures.is_empty() {
        return Err(LibraryError::EmptyPattern);
    }
    if let Some(&bad) = gestures.iter().find(|g| !g.is_known()) {
        return Err(LibraryError::UnknownSymbol(bad.glyph()));
    }
    Pattern::from_slice(gestures).map_err(|_| LibraryError::PatternTooLong)
}

/// Parse pattern notation: `-` `|` `/` `\`, whitespace ignored
///
/// Examples: `"-"`, `"/\\"`, `"- / |"`
pub fn parse_pattern(notation: &str) -> Result<Pattern, LibraryError> {
    let mut pattern = Pattern::new();
    for c in notation.chars().filter(|c| !c.is_whitespace()) {
        let gesture = PrimitiveGesture::from_glyph(c).ok_or(LibraryError::UnknownSymbol(c))?;
        pattern
            .push(gesture)
            .map_err(|_| LibraryError::PatternTooLong)?;
    }
    if pattern.is_empty() {
        return Err(LibraryError::EmptyPattern);
    }
    Ok(pattern)
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMBO
// ═══════════════════════════════════════════════════════════════════════════════

/// A named gesture sequence and the effect it triggers
#[derive(Clone, Debug, PartialEq)]
pub struct Combo {
    /// Unique identifier (what whitelists refer to)
    pub id: String,
    /// Gestures, oldest first
    pub pattern: Pattern,
    /// Effect handed to the effect collaborator on cast
    pub effect: EffectToken,
}

impl Combo {
    /// Create a combo from gestures
    pub fn new(
        id: impl Into<String>,
        gestures: &[PrimitiveGesture],
        effect: EffectToken,
    ) -> Result<Self, LibraryError> {
        Self::build(id.into(), pattern_from(gestures)?, effect)
    }

    /// Create a combo from pattern notation
    pub fn from_notation(
        id: impl Into<String>,
        notation: &str,
        effect: EffectToken,
    ) -> Result<Self, LibraryError> {
        Self::build(id.into(), parse_pattern(notation)?, effect)
    }

    fn build(id: String, pattern: Pattern, effect: EffectToken) -> Result<Self, LibraryError> {
        if id.is_empty() {
            return Err(LibraryError::EmptyId);
        }
        Ok(Self {
            id,
            pattern,
            effect,
        })
    }

    /// Pattern length
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always false for a constructed combo
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Does the pattern equal the last `len()` symbols of `recent`?
    pub fn matches_suffix(&self, recent: &[PrimitiveGesture]) -> bool {
        recent.ends_with(&self.pattern)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMBO LIBRARY
// ═══════════════════════════════════════════════════════════════════════════════

/// Registration-ordered combo collection, read-only once a session starts
#[derive(Clone, Debug, Default)]
pub struct ComboLibrary {
    combos: Vec<Combo>,
    /// Longest registered pattern
    max_len: usize,
}

impl ComboLibrary {
    /// Create an empty library
    pub const fn new() -> Self {
        Self {
            combos: Vec::new(),
            max_len: 0,
        }
    }

    /// Create a library holding the stock spells
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.init_defaults();
        library
    }

    /// Register the stock spells
    pub fn init_defaults(&mut self) {
        const DEFAULTS: &[(&str, &str)] = &[
            ("Spell_H", "-"),
            ("Spell_V", "|"),
            ("Spell_Slash", "/"),
            ("Spell_H_S_V", "- / |"),
        ];
        for &(id, notation) in DEFAULTS {
            let registered = Combo::from_notation(id, notation, EffectToken::from_name(id))
                .and_then(|combo| self.register(combo));
            if let Err(e) = registered {
                warn!("default combo {} rejected: {}", id, e);
            }
        }
    }

    /// Build a library from combos, stopping at the first invalid one
    pub fn from_combos<I: IntoIterator<Item = Combo>>(combos: I) -> Result<Self, LibraryError> {
        let mut library = Self::new();
        for combo in combos {
            library.register(combo)?;
        }
        Ok(library)
    }

    /// Add a combo after every existing one
    ///
    /// Rejects empty patterns and duplicate identifiers, so the matcher can
    /// assume every pattern is non-empty and every id is unambiguous.
    pub fn register(&mut self, combo: Combo) -> Result<(), LibraryError> {
        if combo.pattern.is_empty() {
            return Err(LibraryError::EmptyPattern);
        }
        if combo.id.is_empty() {
            return Err(LibraryError::EmptyId);
        }
        if self.lookup(&combo.id).is_some() {
            return Err(LibraryError::DuplicateId);
        }
        self.max_len = self.max_len.max(combo.len());
        self.combos.push(combo);
        Ok(())
    }

    /// Find a combo by identifier
    pub fn lookup(&self, id: &str) -> Option<&Combo> {
        self.combos.iter().find(|combo| combo.id == id)
    }

    /// Combos in registration order
    pub fn iter(&self) -> core::slice::Iter<'_, Combo> {
        self.combos.iter()
    }

    /// Longest pattern length (0 when empty)
    pub fn max_pattern_len(&self) -> usize {
        self.max_len
    }

    /// Get the number of combos
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComboLibrary {
    type Item = &'a Combo;
    type IntoIter = core::slice::Iter<'a, Combo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
