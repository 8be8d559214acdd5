//! Pad Configuration
//!
//! Every tunable of the recognition pipeline lives here. Defaults match the
//! values the pad ships with; hosts override them through the `with_*`
//! builders before handing the config to a session.

// ═══════════════════════════════════════════════════════════════════════════════
// DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Minimum end-to-end extent of a stroke, in local pad units
pub const DEFAULT_MIN_LENGTH: f32 = 0.05;

/// Minimum end-to-end / path-length ratio (1.0 = perfectly straight)
pub const DEFAULT_STRAIGHTNESS_MIN: f32 = 0.85;

/// Angular tolerance around each axis, in degrees
pub const DEFAULT_ANGLE_TOLERANCE_DEG: f32 = 20.0;

/// Guard against division by zero when computing straightness
pub const PATH_EPSILON: f32 = 0.0001;

/// Half extent of the drawable area (pad spans [-0.5, 0.5] on both axes)
pub const DEFAULT_PAD_HALF_EXTENT: f32 = 0.5;

/// Screen pixels between two recorded samples
pub const DEFAULT_MIN_PIXEL_STEP: f32 = 6.0;

/// Rolling window a combo's strokes must fit in (ms)
pub const DEFAULT_SEQUENCE_TIMEOUT_MS: u64 = 600;

/// Distance in front of the view where effects are spawned
pub const DEFAULT_EFFECT_DISTANCE: f32 = 1.0;

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSIFIER CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Thresholds used by the geometry classifier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Strokes shorter than this (end to end) are rejected
    pub min_length: f32,
    /// Strokes less straight than this are rejected
    pub straightness_min: f32,
    /// Max folded angular distance from an axis, in degrees
    pub angle_tolerance_deg: f32,
}

impl ClassifierConfig {
    /// Default thresholds
    pub const fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            straightness_min: DEFAULT_STRAIGHTNESS_MIN,
            angle_tolerance_deg: DEFAULT_ANGLE_TOLERANCE_DEG,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PAD CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Full configuration of a casting session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadConfig {
    /// Classifier thresholds
    pub classifier: ClassifierConfig,
    /// Clamp range for local coordinates, symmetric around zero
    pub pad_half_extent: f32,
    /// Screen-space spacing between recorded samples
    pub min_pixel_step: f32,
    /// Gesture expiry window in milliseconds
    pub sequence_timeout_ms: u64,
    /// Put the pad away after a successful cast
    pub auto_hide_on_success: bool,
    /// Offset along the view forward vector for spawned effects
    pub effect_distance: f32,
}

impl PadConfig {
    /// Create with default settings
    pub const fn new() -> Self {
        Self {
            classifier: ClassifierConfig::new(),
            pad_half_extent: DEFAULT_PAD_HALF_EXTENT,
            min_pixel_step: DEFAULT_MIN_PIXEL_STEP,
            sequence_timeout_ms: DEFAULT_SEQUENCE_TIMEOUT_MS,
            auto_hide_on_success: true,
            effect_distance: DEFAULT_EFFECT_DISTANCE,
        }
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_angle_tolerance(mut self, degrees: f32) -> Self {
        self.classifier.angle_tolerance_deg = degrees;
        self
    }

    pub fn with_min_pixel_step(mut self, pixels: f32) -> Self {
        self.min_pixel_step = pixels;
        self
    }

    pub fn with_sequence_timeout(mut self, timeout_ms: u64) -> Self {
        self.sequence_timeout_ms = timeout_ms;
        self
    }

    pub fn with_auto_hide(mut self, enabled: bool) -> Self {
        self.auto_hide_on_success = enabled;
        self
    }

    pub fn with_effect_distance(mut self, distance: f32) -> Self {
        self.effect_distance = distance;
        self
    }

    /// Cutoff timestamp for pruning at `now`
    ///
    /// Saturates at zero so early ticks never underflow.
    pub fn prune_cutoff(&self, now: u64) -> u64 {
        now.saturating_sub(self.sequence_timeout_ms)
    }
}

impl Default for PadConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
