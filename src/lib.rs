//! ╔═══════════════════════════════════════════════════════════════════════════╗
//! ║                        SPELLPAD - LIBRARY ROOT                            ║
//! ║                  Straight Strokes In, Combos Out                          ║
//! ╚═══════════════════════════════════════════════════════════════════════════╝
//!
//! Recognition core for hand-drawn spell pads: strokes are classified into
//! directional primitives and matched, within a rolling time window,
//! against a library of multi-stroke combos.
//!
//! The crate is `no_std` (with `alloc`) so it can sit inside a game loop or
//! on a device. Rendering, effects and camera control stay with the host,
//! behind the traits in [`gesture::surface`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// ═══════════════════════════════════════════════════════════════════════════════
// PUBLIC MODULES
// ═══════════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod error;
pub mod gesture;    // Primitive classification, history, combo matching
pub mod slots;      // Hotkey slots that open the pad with a whitelist

// ═══════════════════════════════════════════════════════════════════════════════
// RE-EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

pub use config::{ClassifierConfig, PadConfig};
pub use error::{LibraryError, SlotError};
pub use gesture::{
    classify, CastOutcome, CastingSession, Combo, ComboLibrary, EffectToken, PointerEvent,
    Point2, PrimitiveGesture, Whitelist,
};
pub use slots::{Key, Slot, SlotBoard, SlotCommand};
