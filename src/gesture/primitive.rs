//! Primitive Gestures - Stroke geometry to symbol
//!
//! A stroke is reduced to one of four straight-line directions. Direction
//! is sign-free: a left-to-right and a right-to-left stroke are both
//! `Horizontal`, so every axis folds onto [0°, 90°] of angular distance.
//!
//! # Pipeline
//! ```text
//! points → path length / end-to-end → straightness → angle → axis
//! ```

use core::fmt;

use crate::config::{ClassifierConfig, DEFAULT_PAD_HALF_EXTENT, PATH_EPSILON};

// ═══════════════════════════════════════════════════════════════════════════════
// POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// A point in the pad's local frame (or in screen pixels, for spacing checks)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    /// Origin
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance(self, other: Point2) -> f32 {
        libm::hypotf(other.x - self.x, other.y - self.y)
    }

    /// Clamp both axes to `[-half_extent, half_extent]`
    ///
    /// Returns the clamped point and whether the input was already inside.
    /// A negative extent counts by magnitude; NaN falls back to the default.
    pub fn clamp_to_pad(self, half_extent: f32) -> (Point2, bool) {
        let half = libm::fabsf(half_extent);
        let half = if half.is_nan() { DEFAULT_PAD_HALF_EXTENT } else { half };

        let inside = self.x >= -half && self.x <= half && self.y >= -half && self.y <= half;
        let clamped = Point2 {
            x: self.x.max(-half).min(half),
            y: self.y.max(-half).min(half),
        };
        (clamped, inside)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PRIMITIVE GESTURE
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of classifying one stroke
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrimitiveGesture {
    /// Below confidence thresholds; never buffered
    #[default]
    Unknown = 0,
    /// 0° / 180°
    Horizontal = 1,
    /// 90° / 270°
    Vertical = 2,
    /// 45° / 225°
    Slash = 3,
    /// 135° / 315°
    Backslash = 4,
}

/// Axes in evaluation order. The order is the tie-break when tolerance
/// windows overlap.
pub const AXES: [(PrimitiveGesture, f32); 4] = [
    (PrimitiveGesture::Horizontal, 0.0),
    (PrimitiveGesture::Vertical, 90.0),
    (PrimitiveGesture::Slash, 45.0),
    (PrimitiveGesture::Backslash, 135.0),
];

impl PrimitiveGesture {
    /// True for every variant except `Unknown`
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, PrimitiveGesture::Unknown)
    }

    /// Pattern notation glyph
    pub const fn glyph(&self) -> char {
        match self {
            PrimitiveGesture::Unknown => '?',
            PrimitiveGesture::Horizontal => '-',
            PrimitiveGesture::Vertical => '|',
            PrimitiveGesture::Slash => '/',
            PrimitiveGesture::Backslash => '\\',
        }
    }

    /// Parse a pattern notation glyph
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '-' => Some(PrimitiveGesture::Horizontal),
            '|' => Some(PrimitiveGesture::Vertical),
            '/' => Some(PrimitiveGesture::Slash),
            '\\' => Some(PrimitiveGesture::Backslash),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSIFIER
// ═══════════════════════════════════════════════════════════════════════════════

/// Classify a stroke with the default thresholds
pub fn classify(points: &[Point2]) -> PrimitiveGesture {
    classify_with(points, &ClassifierConfig::new())
}

/// Classify a stroke
///
/// Pure: the same points and config always produce the same gesture.
pub fn classify_with(points: &[Point2], config: &ClassifierConfig) -> PrimitiveGesture {
    let (first, last) = match (points.first(), points.last()) {
        (Some(&first), Some(&last)) if points.len() >= 2 => (first, last),
        _ => return PrimitiveGesture::Unknown,
    };

    let end_to_end = first.distance(last);
    if end_to_end < config.min_length {
        return PrimitiveGesture::Unknown;
    }

    let straightness = end_to_end / path_length(points).max(PATH_EPSILON);
    if straightness < config.straightness_min {
        return PrimitiveGesture::Unknown;
    }

    let angle = direction_deg(first, last);
    for (gesture, axis) in AXES {
        if axis_distance(angle, axis) <= config.angle_tolerance_deg {
            return gesture;
        }
    }

    PrimitiveGesture::Unknown
}

/// Sum of distances between consecutive points
pub fn path_length(points: &[Point2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Angle of the vector `from → to`, in degrees within (-180, 180]
pub fn direction_deg(from: Point2, to: Point2) -> f32 {
    normalize_deg(libm::atan2f(to.y - from.y, to.x - from.x).to_degrees())
}

/// Wrap an angle into (-180, 180]
pub fn normalize_deg(deg: f32) -> f32 {
    let mut deg = libm::fmodf(deg, 360.0);
    if deg <= -180.0 {
        deg += 360.0;
    }
    if deg > 180.0 {
        deg -= 360.0;
    }
    deg
}

/// Angular distance between `angle` and `axis`, treating opposite
/// directions as equal. Always within [0, 90].
pub fn axis_distance(angle: f32, axis: f32) -> f32 {
    let diff = libm::fabsf(normalize_deg(angle - axis));
    diff.min(libm::fabsf(diff - 180.0))
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
