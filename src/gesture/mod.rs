//! Gesture Recognition Engine
//!
//! Straight strokes are the alphabet; combos are the words.
//! A stroke collapses to one of four directional primitives, primitives
//! accumulate in a short-lived history, and the history's tail is matched
//! against a combo library.
//!
//! # Architecture
//! ```text
//! Pointer → StrokeSampler → classify → GestureHistory → resolve → Effect
//!                                          ↑                 ↓
//!                                        prune          consume tail
//! ```
//!
//! # Primitives
//! ```text
//!   -  Horizontal   (0° / 180°)
//!   |  Vertical     (90° / 270°)
//!   /  Slash        (45° / 225°)
//!   \  Backslash    (135° / 315°)
//! ```

pub mod primitive;
pub mod sampler;
pub mod history;
pub mod combo;
pub mod matcher;
pub mod surface;
pub mod session;

pub use primitive::{classify, classify_with, axis_distance, Point2, PrimitiveGesture, AXES};
pub use sampler::{SampleAction, StrokePoints, StrokeSampler, MAX_STROKE_POINTS};
pub use history::{GestureHistory, GestureSnapshot, GestureStamp, HISTORY_SIZE};
pub use combo::{parse_pattern, Combo, ComboLibrary, EffectToken, Pattern, MAX_PATTERN_LEN};
pub use matcher::{find_match, resolve, ComboMatch, MatchOutcome, Whitelist};
pub use surface::{DrawSurface, EffectSink, FlatSurface, LookLock, PadHost, Pose, StrokeRenderer};
pub use session::{CastOutcome, CastingSession, EngineStats, PointerEvent, SessionState};
