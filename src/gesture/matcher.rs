//! Combo Matcher - Longest-suffix resolution
//!
//! Looks at the tail of the gesture buffer and asks: which combo ends here?
//! Longer patterns always win over shorter ones; among equal lengths the
//! first registered combo wins. A whitelist can then veto the winner.

use alloc::string::String;
use alloc::vec::Vec;

use super::combo::{Combo, ComboLibrary};
use super::primitive::PrimitiveGesture;

// ═══════════════════════════════════════════════════════════════════════════════
// MATCH RESULT
// ═══════════════════════════════════════════════════════════════════════════════

/// A combo whose pattern equals the buffer's tail
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComboMatch<'a> {
    pub combo: &'a Combo,
    /// Trailing buffer entries the match covers
    pub consumed: usize,
}

/// Find the longest combo ending at the last symbol of `recent`
///
/// Returns `None` when no pattern matches. `recent` is read only.
pub fn find_match<'a>(recent: &[PrimitiveGesture], library: &'a ComboLibrary) -> Option<ComboMatch<'a>> {
    let try_len = library.max_pattern_len().min(recent.len());

    for len in (1..=try_len).rev() {
        let found = library
            .iter()
            .filter(|combo| combo.len() == len)
            .find(|combo| combo.matches_suffix(recent));

        if let Some(combo) = found {
            return Some(ComboMatch {
                combo,
                consumed: len,
            });
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════════
// WHITELIST
// ═══════════════════════════════════════════════════════════════════════════════

/// Combo identifiers allowed in the current context
///
/// An empty whitelist allows everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Whitelist {
    ids: Vec<String>,
}

impl Whitelist {
    /// A whitelist that allows every combo
    pub const fn allow_all() -> Self {
        Self { ids: Vec::new() }
    }

    /// Restrict to the given identifiers
    pub fn only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Is the combo with this id allowed?
    pub fn allows(&self, id: &str) -> bool {
        self.ids.is_empty() || self.ids.iter().any(|allowed| allowed == id)
    }

    /// Allowed identifiers (empty = no restriction)
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_restricted(&self) -> bool {
        !self.ids.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Outcome of matching the buffer against the library and a whitelist
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchOutcome<'a> {
    /// No pattern ends at the buffer's tail
    NoMatch,
    /// A pattern matched but the whitelist forbids it; keep the buffer
    Unauthorized(&'a Combo),
    /// Cast it: consume `consumed` symbols and fire the effect
    Accepted(ComboMatch<'a>),
}

/// Match and apply the whitelist
///
/// An unauthorized match is not a miss: the caller must leave the buffer
/// intact so further strokes can still complete an allowed combo.
pub fn resolve<'a>(
    recent: &[PrimitiveGesture],
    library: &'a ComboLibrary,
    whitelist: Option<&Whitelist>,
) -> MatchOutcome<'a> {
    match find_match(recent, library) {
        None => MatchOutcome::NoMatch,
        Some(found) if whitelist.map_or(true, |w| w.allows(&found.combo.id)) => {
            MatchOutcome::Accepted(found)
        }
        Some(found) => MatchOutcome::Unauthorized(found.combo),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
