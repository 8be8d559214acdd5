//! Stroke Sampler - Pointer stream to decimated local points
//!
//! One stroke at a time: `begin` on pointer-down, `extend` on every move,
//! `finish` on pointer-up. Samples are clamped to the pad and spaced by a
//! minimum screen distance, so the classifier sees a short, even path
//! while the renderer still gets smooth feedback through previews.

use log::debug;

use super::primitive::Point2;
use super::surface::DrawSurface;
use crate::config::PadConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum recorded samples per stroke
pub const MAX_STROKE_POINTS: usize = 256;

/// Points of one stroke, in local pad units
pub type StrokePoints = heapless::Vec<Point2, MAX_STROKE_POINTS>;

// ═══════════════════════════════════════════════════════════════════════════════
// SAMPLE ACTION
// ═══════════════════════════════════════════════════════════════════════════════

/// What a pointer sample did to the stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleAction {
    /// Appended as a new sample
    Appended(Point2),
    /// Too close to the previous sample: only its preview moves
    Previewed(Point2),
    /// Nothing recorded (no projection, or no active stroke)
    Skipped,
}

// ═══════════════════════════════════════════════════════════════════════════════
// STROKE SAMPLER
// ═══════════════════════════════════════════════════════════════════════════════

/// Accumulates one stroke between pointer-down and pointer-up
pub struct StrokeSampler {
    /// Recorded samples (local frame, clamped)
    points: StrokePoints,
    /// Screen position of the last appended sample
    last_screen: Point2,
    /// A stroke is in progress
    active: bool,
    /// Some sample fell outside the pad and was clamped
    clamped: bool,
    /// Capacity was hit; later samples overwrite the endpoint
    saturated: bool,
    min_pixel_step: f32,
    half_extent: f32,
}

impl StrokeSampler {
    pub const fn new(min_pixel_step: f32, half_extent: f32) -> Self {
        Self {
            points: heapless::Vec::new(),
            last_screen: Point2::ZERO,
            active: false,
            clamped: false,
            saturated: false,
            min_pixel_step,
            half_extent,
        }
    }

    pub fn from_config(config: &PadConfig) -> Self {
        Self::new(config.min_pixel_step, config.pad_half_extent)
    }

    /// Is a stroke in progress?
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Samples recorded so far
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Did the current stroke leave the pad at any point?
    pub fn was_clamped(&self) -> bool {
        self.clamped
    }

    /// Start a new stroke, discarding anything accumulated before
    ///
    /// The first successfully projected sample is always recorded.
    pub fn begin<S: DrawSurface + ?Sized>(&mut self, surface: &S, pointer: Point2) -> SampleAction {
        self.reset();
        self.active = true;
        self.sample(surface, pointer)
    }

    /// Feed a pointer position while the stroke is held
    pub fn extend<S: DrawSurface + ?Sized>(&mut self, surface: &S, pointer: Point2) -> SampleAction {
        if !self.active {
            return SampleAction::Skipped;
        }
        self.sample(surface, pointer)
    }

    /// End the stroke and hand over its samples
    ///
    /// Returns `None` if no stroke was active, so a stroke is never
    /// delivered twice.
    pub fn finish(&mut self) -> Option<StrokePoints> {
        if !self.active {
            return None;
        }
        let points = core::mem::replace(&mut self.points, heapless::Vec::new());
        self.reset();
        Some(points)
    }

    /// Drop the stroke in progress
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.points.clear();
        self.active = false;
        self.clamped = false;
        self.saturated = false;
    }

    fn sample<S: DrawSurface + ?Sized>(&mut self, surface: &S, pointer: Point2) -> SampleAction {
        let Some(raw) = surface.project(pointer) else {
            return SampleAction::Skipped;
        };

        let (local, inside) = raw.clamp_to_pad(self.half_extent);
        self.clamped |= !inside;
        let screen = surface.to_screen(local);

        if !self.points.is_empty() && !self.far_enough(screen) {
            return SampleAction::Previewed(local);
        }

        if self.points.push(local).is_err() {
            if !self.saturated {
                debug!("stroke reached {} samples, tracking endpoint only", MAX_STROKE_POINTS);
                self.saturated = true;
            }
            if let Some(last) = self.points.last_mut() {
                *last = local;
            }
            self.last_screen = screen;
            return SampleAction::Previewed(local);
        }

        self.last_screen = screen;
        SampleAction::Appended(local)
    }

    fn far_enough(&self, screen: Point2) -> bool {
        let dx = screen.x - self.last_screen.x;
        let dy = screen.y - self.last_screen.y;
        dx * dx + dy * dy >= self.min_pixel_step * self.min_pixel_step
    }
}

impl Default for StrokeSampler {
    fn default() -> Self {
        Self::from_config(&PadConfig::new())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
