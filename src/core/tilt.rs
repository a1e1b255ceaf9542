use glam::Vec2;
use std::time::Duration;

use super::constants::{
    GLOSS_HOVER_OPACITY, TILT_HOVER_SCALE, TILT_MAX_ANGLE_DEG, TILT_PERSPECTIVE_PX,
    TILT_RESET_DURATION,
};

/// Bounding box of a tracked surface in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// False until the surface has been laid out with a non-zero size.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

#[derive(Clone, Debug)]
pub struct TiltConfig {
    pub max_angle_deg: f32,
    pub perspective_px: f32,
    pub hover_scale: f32,
    pub reset_duration: Duration,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: TILT_MAX_ANGLE_DEG,
            perspective_px: TILT_PERSPECTIVE_PX,
            hover_scale: TILT_HOVER_SCALE,
            reset_duration: TILT_RESET_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl TiltTransform {
    pub const IDENTITY: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` value including the perspective term.
    pub fn to_css(&self, perspective_px: f32) -> String {
        format!(
            "perspective({:.0}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3})",
            perspective_px, self.rotate_x_deg, self.rotate_y_deg, self.scale
        )
    }
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// How a new transform should be applied to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Tracking updates snap so the card follows the cursor.
    Immediate,
    /// Return-to-rest eases over the given duration.
    Ease(Duration),
}

impl Transition {
    pub fn to_css(&self) -> String {
        match self {
            Transition::Immediate => "none".to_string(),
            Transition::Ease(d) => format!("transform {}ms ease-out", d.as_millis()),
        }
    }
}

/// Highlight overlay that follows the cursor while hovering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gloss {
    pub opacity: f32,
    /// Highlight centre as percentages of the surface size.
    pub center_pct: Vec2,
}

impl Gloss {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        center_pct: Vec2::new(50.0, 50.0),
    };

    pub fn background_css(&self) -> String {
        format!(
            "radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,0.8) 0%, transparent 60%)",
            self.center_pct.x, self.center_pct.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    pub transform: TiltTransform,
    pub transition: Transition,
    pub gloss: Gloss,
}

/// Pointer position relative to the surface centre, scaled by half extents.
///
/// Returns `None` for a surface that has no size yet. Values are not clamped:
/// a pointer outside the rectangle maps outside [-1, 1].
#[inline]
pub fn normalized_sample(rect: &SurfaceRect, pointer: Vec2) -> Option<Vec2> {
    if !rect.is_laid_out() {
        return None;
    }
    let half = Vec2::new(rect.width * 0.5, rect.height * 0.5);
    Some((pointer - rect.center()) / half)
}

/// Rotation for a normalized sample. Moving up tilts the top edge away.
#[inline]
pub fn tilt_for_sample(config: &TiltConfig, sample: Vec2) -> TiltTransform {
    TiltTransform {
        rotate_x_deg: -sample.y * config.max_angle_deg,
        rotate_y_deg: sample.x * config.max_angle_deg,
        scale: config.hover_scale,
    }
}

/// Per-surface tilt state. One engine is owned by each card.
#[derive(Clone, Debug)]
pub struct TiltEngine {
    config: TiltConfig,
    hovering: bool,
    sample: Vec2,
    transform: TiltTransform,
}

impl TiltEngine {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            hovering: false,
            sample: Vec2::ZERO,
            transform: TiltTransform::IDENTITY,
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn transform(&self) -> TiltTransform {
        self.transform
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn gloss(&self) -> Gloss {
        if self.hovering {
            Gloss {
                opacity: GLOSS_HOVER_OPACITY,
                center_pct: Vec2::splat(50.0) + self.sample * 50.0,
            }
        } else {
            Gloss::HIDDEN
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    /// Track a pointer move. `None` means the surface has no layout yet and
    /// nothing changed.
    pub fn pointer_move(&mut self, rect: &SurfaceRect, pointer: Vec2) -> Option<TiltFrame> {
        let sample = normalized_sample(rect, pointer)?;
        // mousemove can arrive without a preceding mouseenter (e.g. on mount)
        self.hovering = true;
        self.sample = sample;
        self.transform = tilt_for_sample(&self.config, sample);
        Some(TiltFrame {
            transform: self.transform,
            transition: Transition::Immediate,
            gloss: self.gloss(),
        })
    }

    /// Return to rest regardless of the last sample.
    pub fn pointer_leave(&mut self) -> TiltFrame {
        self.hovering = false;
        self.sample = Vec2::ZERO;
        self.transform = TiltTransform::IDENTITY;
        TiltFrame {
            transform: self.transform,
            transition: Transition::Ease(self.config.reset_duration),
            gloss: Gloss::HIDDEN,
        }
    }
}

impl Default for TiltEngine {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}
