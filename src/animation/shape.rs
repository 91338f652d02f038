use crate::{animation::ease::Ease, foundation::math::EPSILON};

/// One eased `start -> end` curve over stage progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeChannel {
    /// Value at progress 0.
    pub start: f32,
    /// Value at progress 1.
    pub end: f32,
    /// Curve between the two.
    pub ease: Ease,
}

impl ShapeChannel {
    /// Constant `1.0`.
    pub const IDENTITY: Self = Self::constant(1.0);

    /// Build a curve.
    pub const fn new(start: f32, end: f32, ease: Ease) -> Self {
        Self { start, end, ease }
    }

    /// A curve that holds `value`.
    pub const fn constant(value: f32) -> Self {
        Self::new(value, value, Ease::Linear)
    }

    /// Evaluate at progress `t`, clamped to `[0, 1]`.
    pub fn compute(&self, t: f32) -> f32 {
        self.ease.lerp(self.start, self.end, t)
    }

    /// `true` when start and end differ by more than float noise.
    pub fn is_animated(&self) -> bool {
        (self.start - self.end).abs() > EPSILON
    }
}

impl Default for ShapeChannel {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Per-stage shape curves for scale, length, radius and alpha.
///
/// Values are multipliers on the primitive's authored geometry. The renderer reads them at the
/// current stage progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeModifier {
    /// Uniform scale multiplier.
    pub scale: ShapeChannel,
    /// Length multiplier (beams, rays).
    pub length: ShapeChannel,
    /// Radius multiplier.
    pub radius: ShapeChannel,
    /// Opacity multiplier.
    pub alpha: ShapeChannel,
}

impl ShapeModifier {
    /// Leaves every quantity at `1.0`.
    pub const IDENTITY: Self = Self {
        scale: ShapeChannel::IDENTITY,
        length: ShapeChannel::IDENTITY,
        radius: ShapeChannel::IDENTITY,
        alpha: ShapeChannel::IDENTITY,
    };

    /// Replace the scale curve.
    pub const fn with_scale(mut self, start: f32, end: f32, ease: Ease) -> Self {
        self.scale = ShapeChannel::new(start, end, ease);
        self
    }

    /// Replace the length curve.
    pub const fn with_length(mut self, start: f32, end: f32, ease: Ease) -> Self {
        self.length = ShapeChannel::new(start, end, ease);
        self
    }

    /// Replace the radius curve.
    pub const fn with_radius(mut self, start: f32, end: f32, ease: Ease) -> Self {
        self.radius = ShapeChannel::new(start, end, ease);
        self
    }

    /// Replace the alpha curve.
    pub const fn with_alpha(mut self, start: f32, end: f32, ease: Ease) -> Self {
        self.alpha = ShapeChannel::new(start, end, ease);
        self
    }

    /// Scale `0 -> 1`.
    pub const fn grow(ease: Ease) -> Self {
        Self::IDENTITY.with_scale(0.0, 1.0, ease)
    }

    /// Scale `1 -> 0`.
    pub const fn shrink(ease: Ease) -> Self {
        Self::IDENTITY.with_scale(1.0, 0.0, ease)
    }

    /// Alpha `0 -> 1`.
    pub const fn fade_in(ease: Ease) -> Self {
        Self::IDENTITY.with_alpha(0.0, 1.0, ease)
    }

    /// Alpha `1 -> 0`.
    pub const fn fade_out(ease: Ease) -> Self {
        Self::IDENTITY.with_alpha(1.0, 0.0, ease)
    }

    /// Scale at stage progress `t`, clamped to `[0, 1]`.
    pub fn compute_scale(&self, t: f32) -> f32 {
        self.scale.compute(t)
    }

    /// Length at stage progress `t`, clamped to `[0, 1]`.
    pub fn compute_length(&self, t: f32) -> f32 {
        self.length.compute(t)
    }

    /// Radius at stage progress `t`, clamped to `[0, 1]`.
    pub fn compute_radius(&self, t: f32) -> f32 {
        self.radius.compute(t)
    }

    /// Alpha at stage progress `t`, clamped to `[0, 1]`.
    pub fn compute_alpha(&self, t: f32) -> f32 {
        self.alpha.compute(t)
    }

    /// Whether the scale curve changes over the stage.
    pub fn has_scale_animation(&self) -> bool {
        self.scale.is_animated()
    }

    /// Whether the length curve changes over the stage.
    pub fn has_length_animation(&self) -> bool {
        self.length.is_animated()
    }

    /// Whether the radius curve changes over the stage.
    pub fn has_radius_animation(&self) -> bool {
        self.radius.is_animated()
    }

    /// Whether the alpha curve changes over the stage.
    pub fn has_alpha_animation(&self) -> bool {
        self.alpha.is_animated()
    }

    /// `true` if any of the four curves changes over the stage.
    pub fn has_any_animation(&self) -> bool {
        self.has_scale_animation()
            || self.has_length_animation()
            || self.has_radius_animation()
            || self.has_alpha_animation()
    }
}

impl Default for ShapeModifier {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;
