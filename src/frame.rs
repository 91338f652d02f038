use glam::{Quat, Vec3};

use crate::{
    channels::{Animation, Channel},
    foundation::core::Rgb,
    lifecycle::animator::LifecycleAnimator,
};

/// Everything a renderer needs for one primitive on one frame, flattened to plain numbers.
///
/// Stage shape multipliers are combined with the active animation's pulse channels; rotation
/// is precession applied on top of spin.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameModifiers {
    /// Current stage id.
    pub stage: String,
    /// Current stage index.
    pub stage_index: usize,
    /// Progress through the current stage.
    pub stage_progress: f32,
    /// Estimated progress through the whole lifecycle.
    pub lifecycle_progress: f32,
    /// Whether to draw at all.
    pub visible: bool,
    /// Stage scale times pulse multiplier.
    pub scale: f32,
    /// Stage length multiplier.
    pub length: f32,
    /// Stage radius multiplier.
    pub radius: f32,
    /// Stage alpha times alpha pulse.
    pub alpha: f32,
    /// Spin angle in radians.
    pub spin_angle: f32,
    /// Combined orientation.
    pub rotation: Quat,
    /// Positional offset from wobble.
    pub wobble: Vec3,
    /// Color from an active color cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl FrameModifiers {
    /// Sample `animator` at world `time` (ticks), using `base` unless the stage overrides it.
    pub fn sample(animator: &LifecycleAnimator, base: &Animation, time: f32) -> Self {
        let anim = animator.effective_animation(base);

        let pulse = anim.pulse.as_ref().map_or(1.0, |p| p.multiplier(time));
        let alpha_pulse = anim.alpha_pulse.as_ref().map_or(1.0, |p| p.alpha(time));
        let spin_angle = anim.spin.as_ref().map_or(0.0, |s| s.angle(time));
        let spin = anim.spin.as_ref().map_or(Quat::IDENTITY, |s| s.rotation(time));
        let tilt = anim
            .precession
            .as_ref()
            .map_or(Quat::IDENTITY, |p| p.rotation(time));

        Self {
            stage: animator.current_stage().id.clone(),
            stage_index: animator.current_stage_index(),
            stage_progress: animator.stage_progress(),
            lifecycle_progress: animator.lifecycle_progress(),
            visible: animator.is_visible(),
            scale: animator.current_scale() * pulse,
            length: animator.current_length(),
            radius: animator.current_radius(),
            alpha: (animator.current_alpha() * alpha_pulse).clamp(0.0, 1.0),
            spin_angle,
            rotation: tilt * spin,
            wobble: anim.wobble.as_ref().map_or(Vec3::ZERO, |w| w.offset(time)),
            color: anim
                .color_cycle
                .as_ref()
                .filter(|c| c.is_active())
                .map(|c| c.color(time)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/frame.rs"]
mod tests;
