//! Spellpad - Host-Based Test Fixtures
//!
//! A recording host that stands in for the camera, line renderer, effect
//! spawner and look controller, plus helpers that drive whole strokes
//! through a session.

use std::sync::Arc;

use spellpad::gesture::{DrawSurface, EffectSink, FlatSurface, LookLock, Pose, StrokeRenderer};
use spellpad::{CastOutcome, CastingSession, Combo, ComboLibrary, EffectToken, PadConfig, Point2, PointerEvent};

/// Pad center on screen
pub const CENTER: Point2 = Point2::new(400.0, 300.0);

/// Screen pixels per local unit (pad spans 200 px)
pub const SCALE: f32 = 200.0;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDING HOST
// ═══════════════════════════════════════════════════════════════════════════════

/// Host that records every call the session makes
#[derive(Debug)]
pub struct RecordingHost {
    pub surface: FlatSurface,
    /// Visible stroke samples
    pub points: Vec<Point2>,
    pub clears: usize,
    pub spawned: Vec<(EffectToken, Pose)>,
    pub look_enabled: bool,
    /// Pose reported to the session (`None` = camera unavailable)
    pub pose: Option<Pose>,
    /// Refuse every projection
    pub blind: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            surface: FlatSurface::new(CENTER, SCALE),
            points: Vec::new(),
            clears: 0,
            spawned: Vec::new(),
            look_enabled: true,
            pose: Some(Pose::IDENTITY),
            blind: false,
        }
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingHost {
    fn project(&self, pointer: Point2) -> Option<Point2> {
        if self.blind {
            return None;
        }
        self.surface.project(pointer)
    }

    fn to_screen(&self, local: Point2) -> Point2 {
        self.surface.to_screen(local)
    }
}

impl StrokeRenderer for RecordingHost {
    fn push_point(&mut self, local: Point2) {
        self.points.push(local);
    }

    fn move_last(&mut self, local: Point2) {
        if let Some(last) = self.points.last_mut() {
            *last = local;
        }
    }

    fn clear(&mut self) {
        self.points.clear();
        self.clears += 1;
    }
}

impl EffectSink for RecordingHost {
    fn view_pose(&self) -> Option<Pose> {
        self.pose
    }

    fn spawn(&mut self, effect: EffectToken, anchor: Pose) {
        self.spawned.push((effect, anchor));
    }
}

impl LookLock for RecordingHost {
    fn set_look_enabled(&mut self, enabled: bool) {
        self.look_enabled = enabled;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SESSION HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

pub type TestSession = CastingSession<RecordingHost>;

/// Library from `(id, notation)` pairs, effects named after the ids
pub fn library_of(combos: &[(&str, &str)]) -> ComboLibrary {
    let mut library = ComboLibrary::new();
    for &(id, notation) in combos {
        let combo = Combo::from_notation(id, notation, EffectToken::from_name(id)).expect("valid combo");
        library.register(combo).expect("unique combo");
    }
    library
}

/// Inactive session over the given combos
pub fn session_with(combos: &[(&str, &str)], config: PadConfig) -> TestSession {
    CastingSession::new(RecordingHost::new(), Arc::new(library_of(combos)), config)
}

/// Screen offset of an 80 px stroke drawing `glyph`
///
/// Screen Y points down, so "up" on the pad is negative dy.
pub fn screen_delta(glyph: char) -> (f32, f32) {
    match glyph {
        '-' => (80.0, 0.0),
        '|' => (0.0, -80.0),
        '/' => (56.0, -56.0),
        '\\' => (-56.0, -56.0),
        _ => (0.0, 0.0),
    }
}

/// Straight stroke in 10 moves from `start` by (dx, dy), released at `now`
pub fn draw_line(session: &mut TestSession, start: Point2, dx: f32, dy: f32, now: u64) -> Option<CastOutcome> {
    session.handle(PointerEvent::Begin(start), now);
    for i in 1..=10 {
        let t = i as f32 / 10.0;
        session.handle(PointerEvent::Move(Point2::new(start.x + dx * t, start.y + dy * t)), now);
    }
    session.handle(PointerEvent::End, now)
}

/// Draw the primitive for a notation glyph, centered on the pad
pub fn draw(session: &mut TestSession, glyph: char, now: u64) -> Option<CastOutcome> {
    let (dx, dy) = screen_delta(glyph);
    let start = Point2::new(CENTER.x - dx / 2.0, CENTER.y - dy / 2.0);
    draw_line(session, start, dx, dy, now)
}

/// Local-frame points of a straight segment at `angle_deg`
pub fn segment(angle_deg: f32, length: f32, steps: usize) -> Vec<Point2> {
    let rad = angle_deg.to_radians();
    (0..=steps)
        .map(|i| {
            let d = length * i as f32 / steps as f32;
            Point2::new(d * rad.cos(), d * rad.sin())
        })
        .collect()
}
