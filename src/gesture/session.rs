//! Casting Session - The stroke-to-combo processor
//!
//! One session per drawing pad. Pointer events flow in, cast outcomes flow
//! out; the session owns the only mutable recognition state (the stroke in
//! progress and the gesture history).
//!
//! # Processing Pipeline
//! ```text
//! Begin/Move → StrokeSampler → (End) → classify → prune → history → resolve
//!                                                                     ↓
//!                                               consume tail + spawn effect
//! ```

use alloc::string::String;
use alloc::sync::Arc;

use log::{debug, info, warn};

use super::combo::{ComboLibrary, EffectToken};
use super::history::GestureHistory;
use super::matcher::{resolve, MatchOutcome, Whitelist};
use super::primitive::{classify_with, Point2, PrimitiveGesture};
use super::sampler::{SampleAction, StrokeSampler};
use super::surface::PadHost;
use crate::config::PadConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// EVENTS AND OUTCOMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Edge-triggered pointer input, positions in screen pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed
    Begin(Point2),
    /// Pointer moved while pressed
    Move(Point2),
    /// Pointer released
    End,
}

/// What a finished stroke led to
#[derive(Clone, Debug, PartialEq)]
pub enum CastOutcome {
    /// Not a primitive; nothing buffered
    Unrecognized,
    /// Buffered, no combo ends here yet
    Buffered(PrimitiveGesture),
    /// A combo matched but is not allowed in this context; buffer kept
    Unauthorized {
        gesture: PrimitiveGesture,
        combo_id: String,
    },
    /// A combo was cast
    Cast {
        gesture: PrimitiveGesture,
        combo_id: String,
        effect: EffectToken,
        consumed: usize,
    },
}

/// Session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Pad put away; input ignored
    Inactive,
    /// Open, nothing buffered
    Ready,
    /// A stroke is being drawn
    Drawing,
    /// Open, gestures buffered toward a combo
    Pending,
}

/// Session statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Strokes completed (pointer released)
    pub strokes_processed: u64,
    /// Strokes that classified as Unknown
    pub unrecognized: u64,
    /// Gestures added to the history
    pub buffered: u64,
    /// Matches vetoed by the whitelist
    pub unauthorized: u64,
    /// Combos cast
    pub casts: u64,
    /// Gestures expired by pruning
    pub pruned: u64,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CASTING SESSION
// ═══════════════════════════════════════════════════════════════════════════════

/// Recognition state of one drawing pad
pub struct CastingSession<H: PadHost> {
    /// Projection, rendering, effects and look lock
    host: H,
    /// Combos, shared read-only across sessions
    library: Arc<ComboLibrary>,
    config: PadConfig,
    sampler: StrokeSampler,
    history: GestureHistory,
    /// Allowed combos for the current activation (`None` = all)
    whitelist: Option<Whitelist>,
    state: SessionState,
    last_gesture: Option<PrimitiveGesture>,
    stats: EngineStats,
}

impl<H: PadHost> CastingSession<H> {
    /// Create an inactive session
    pub fn new(host: H, library: Arc<ComboLibrary>, config: PadConfig) -> Self {
        Self {
            host,
            library,
            sampler: StrokeSampler::from_config(&config),
            config,
            history: GestureHistory::new(),
            whitelist: None,
            state: SessionState::Inactive,
            last_gesture: None,
            stats: EngineStats::default(),
        }
    }

    /// Open the pad
    ///
    /// Starts from a clean slate, applies the whitelist for this context and
    /// freezes external view rotation so the pointer can draw.
    pub fn activate(&mut self, whitelist: Option<Whitelist>) {
        self.sampler.cancel();
        self.history.clear();
        self.host.clear();
        self.host.set_look_enabled(false);
        info!(
            "pad opened ({} combos, whitelist: {:?})",
            self.library.len(),
            whitelist.as_ref().map(|w| w.ids())
        );
        self.whitelist = whitelist;
        self.state = SessionState::Ready;
    }

    /// Put the pad away, dropping the stroke and any combo progress
    pub fn deactivate(&mut self) {
        if self.state == SessionState::Inactive {
            return;
        }
        self.sampler.cancel();
        self.history.clear();
        self.host.clear();
        self.host.set_look_enabled(true);
        self.whitelist = None;
        self.state = SessionState::Inactive;
        debug!("pad closed");
    }

    /// Process one pointer event
    ///
    /// Returns an outcome only when a stroke ends.
    pub fn handle(&mut self, event: PointerEvent, now: u64) -> Option<CastOutcome> {
        if self.state == SessionState::Inactive {
            return None;
        }

        match event {
            PointerEvent::Begin(pointer) => {
                if self.sampler.is_active() {
                    // Release was never seen; the old stroke is abandoned
                    self.host.clear();
                }
                self.host.begin_stroke();
                let action = self.sampler.begin(&self.host, pointer);
                self.render(action);
                self.state = SessionState::Drawing;
                None
            }
            PointerEvent::Move(pointer) => {
                let action = self.sampler.extend(&self.host, pointer);
                self.render(action);
                None
            }
            PointerEvent::End => {
                let points = self.sampler.finish()?;
                Some(self.complete_stroke(&points, now))
            }
        }
    }

    /// Periodic tick: expire gestures older than the sequence timeout
    ///
    /// Returns the number of gestures removed.
    pub fn tick(&mut self, now: u64) -> usize {
        if self.state == SessionState::Inactive {
            return 0;
        }
        let removed = self.prune(now);
        self.settle_state();
        removed
    }

    fn prune(&mut self, now: u64) -> usize {
        let removed = self.history.prune(self.config.prune_cutoff(now));
        self.stats.pruned += removed as u64;
        removed
    }

    fn render(&mut self, action: SampleAction) {
        match action {
            SampleAction::Appended(local) => self.host.push_point(local),
            SampleAction::Previewed(local) => self.host.move_last(local),
            SampleAction::Skipped => {}
        }
    }

    fn complete_stroke(&mut self, points: &[Point2], now: u64) -> CastOutcome {
        self.stats.strokes_processed += 1;

        let gesture = classify_with(points, &self.config.classifier);
        debug!("stroke of {} samples classified as {:?}", points.len(), gesture);

        if !gesture.is_known() {
            self.stats.unrecognized += 1;
            self.host.clear();
            self.settle_state();
            return CastOutcome::Unrecognized;
        }

        self.prune(now);
        self.history.push(gesture, now);
        self.stats.buffered += 1;
        self.last_gesture = Some(gesture);

        let snapshot = self.history.snapshot();
        let library = Arc::clone(&self.library);

        let outcome = match resolve(&snapshot, &library, self.whitelist.as_ref()) {
            MatchOutcome::NoMatch => CastOutcome::Buffered(gesture),
            MatchOutcome::Unauthorized(combo) => {
                warn!("combo {} matched but is not allowed here", combo.id);
                self.stats.unauthorized += 1;
                CastOutcome::Unauthorized {
                    gesture,
                    combo_id: combo.id.clone(),
                }
            }
            MatchOutcome::Accepted(found) => {
                let combo = found.combo;
                if let Some(view) = self.host.view_pose() {
                    self.host
                        .spawn(combo.effect, view.ahead(self.config.effect_distance));
                }
                self.history.consume_tail(found.consumed);
                self.stats.casts += 1;
                info!("cast {} (consumed {})", combo.id, found.consumed);

                if self.config.auto_hide_on_success {
                    self.deactivate();
                }
                CastOutcome::Cast {
                    gesture,
                    combo_id: combo.id.clone(),
                    effect: combo.effect,
                    consumed: found.consumed,
                }
            }
        };

        if self.state != SessionState::Inactive {
            self.host.clear();
            self.settle_state();
        }
        outcome
    }

    fn settle_state(&mut self) {
        self.state = match self.state {
            SessionState::Inactive => SessionState::Inactive,
            _ if self.sampler.is_active() => SessionState::Drawing,
            _ if self.history.is_empty() => SessionState::Ready,
            _ => SessionState::Pending,
        };
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Get current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != SessionState::Inactive
    }

    /// Get statistics
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = EngineStats::default();
    }

    /// Gesture history (read only)
    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    /// Samples of the stroke in progress
    pub fn stroke_points(&self) -> &[Point2] {
        self.sampler.points()
    }

    /// Most recently recognized gesture
    pub fn last_gesture(&self) -> Option<PrimitiveGesture> {
        self.last_gesture
    }

    pub fn whitelist(&self) -> Option<&Whitelist> {
        self.whitelist.as_ref()
    }

    pub fn library(&self) -> &ComboLibrary {
        &self.library
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
