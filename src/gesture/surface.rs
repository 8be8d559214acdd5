//! Pad Surfaces - Collaborator boundaries
//!
//! The core never touches a camera, a line renderer or a particle system.
//! It talks to them through the traits below; a host implements all of
//! them (usually on one struct) and hands that to the session.

use super::combo::EffectToken;
use super::primitive::Point2;

// ═══════════════════════════════════════════════════════════════════════════════
// INPUT PROJECTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Maps pointer positions onto the drawing pad
pub trait DrawSurface {
    /// Project a raw pointer position into the pad's local frame
    ///
    /// Returns `None` when no valid projection exists this tick (for
    /// example, the view ray misses the pad plane). The result is not
    /// clamped.
    fn project(&self, pointer: Point2) -> Option<Point2>;

    /// Map a local point back to screen pixels (used for sample spacing)
    fn to_screen(&self, local: Point2) -> Point2;
}

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

/// Receives live stroke geometry for visual feedback
pub trait StrokeRenderer {
    /// A new stroke started
    fn begin_stroke(&mut self) {}

    /// A sample was appended
    fn push_point(&mut self, local: Point2);

    /// Preview only: move the most recent sample without growing the stroke
    fn move_last(&mut self, local: Point2);

    /// Discard every stroke visual
    fn clear(&mut self);
}

// ═══════════════════════════════════════════════════════════════════════════════
// EFFECTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Spatial anchor for spawned effects
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// World position
    pub position: [f32; 3],
    /// Unit forward vector
    pub forward: [f32; 3],
    /// Orientation quaternion (x, y, z, w)
    pub rotation: [f32; 4],
}

impl Pose {
    /// Identity pose at the origin looking down +Z
    pub const IDENTITY: Pose = Pose {
        position: [0.0, 0.0, 0.0],
        forward: [0.0, 0.0, 1.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
    };

    /// Same orientation, moved `distance` along the forward vector
    pub fn ahead(&self, distance: f32) -> Pose {
        let [px, py, pz] = self.position;
        let [fx, fy, fz] = self.forward;
        Pose {
            position: [px + fx * distance, py + fy * distance, pz + fz * distance],
            ..*self
        }
    }
}

/// Fire-and-forget effect spawner
pub trait EffectSink {
    /// Current view pose, if one is available
    fn view_pose(&self) -> Option<Pose>;

    /// Spawn the effect for an accepted combo
    fn spawn(&mut self, effect: EffectToken, anchor: Pose);
}

// ═══════════════════════════════════════════════════════════════════════════════
// VIEW LOCK
// ═══════════════════════════════════════════════════════════════════════════════

/// Advisory control over external view rotation
pub trait LookLock {
    /// `false` while drawing: freeze look, free the cursor
    fn set_look_enabled(&mut self, enabled: bool);
}

/// Everything a casting session needs from its host
pub trait PadHost: DrawSurface + StrokeRenderer + EffectSink + LookLock {}

impl<T: DrawSurface + StrokeRenderer + EffectSink + LookLock> PadHost for T {}

// ═══════════════════════════════════════════════════════════════════════════════
// FLAT SURFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// Pad drawn as an axis-aligned square on screen
///
/// Screen Y grows downward, local Y grows upward. One local unit spans
/// `pixels_per_unit` pixels, so the default pad ([-0.5, 0.5]) covers a
/// square of that side length centered on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatSurface {
    center: Point2,
    pixels_per_unit: f32,
}

impl FlatSurface {
    pub const fn new(center: Point2, pixels_per_unit: f32) -> Self {
        Self {
            center,
            pixels_per_unit,
        }
    }
}

impl DrawSurface for FlatSurface {
    fn project(&self, pointer: Point2) -> Option<Point2> {
        if self.pixels_per_unit <= 0.0 {
            return None;
        }
        Some(Point2::new(
            (pointer.x - self.center.x) / self.pixels_per_unit,
            (self.center.y - pointer.y) / self.pixels_per_unit,
        ))
    }

    fn to_screen(&self, local: Point2) -> Point2 {
        Point2::new(
            self.center.x + local.x * self.pixels_per_unit,
            self.center.y - local.y * self.pixels_per_unit,
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
