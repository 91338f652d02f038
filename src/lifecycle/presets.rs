//! Ready-made lifecycles for common effect shapes.

use crate::{
    animation::{ease::Ease, shape::ShapeModifier},
    channels::Animation,
    lifecycle::{
        animator::LifecycleAnimator,
        stage::{StageConfig, StageTransition},
    },
};

/// Grow in, hold until told to leave, shrink out.
///
/// The hold stage ends with [`LifecycleAnimator::next_stage`] or `go_to_stage("despawn")`.
pub fn spawn_hold_despawn(
    id: impl Into<String>,
    spawn_ticks: u32,
    despawn_ticks: u32,
) -> LifecycleAnimator {
    LifecycleAnimator::builder(id)
        .stage(StageConfig::spawn(spawn_ticks))
        .stage(StageConfig::active())
        .stage(StageConfig::despawn(despawn_ticks))
        .build()
}

/// Fade in, stay for `hold_ticks`, fade out. A zero `hold_ticks` holds forever.
pub fn fade_in_out(
    id: impl Into<String>,
    fade_in_ticks: u32,
    hold_ticks: u32,
    fade_out_ticks: u32,
) -> LifecycleAnimator {
    LifecycleAnimator::builder(id)
        .stage(
            StageConfig::builder("fade_in")
                .duration(fade_in_ticks)
                .shape(ShapeModifier::fade_in(Ease::OutQuad))
                .build(),
        )
        .stage(StageConfig::builder("hold").duration(hold_ticks).build())
        .stage(
            StageConfig::builder("fade_out")
                .duration(fade_out_ticks)
                .shape(ShapeModifier::fade_out(Ease::InQuad))
                .build(),
        )
        .build()
}

/// A single burst that swells and fades over `ticks`.
pub fn flash(id: impl Into<String>, ticks: u32) -> LifecycleAnimator {
    LifecycleAnimator::builder(id)
        .stage(
            StageConfig::builder("flash")
                .duration(ticks)
                .shape(
                    ShapeModifier::IDENTITY
                        .with_scale(0.6, 1.4, Ease::OutExpo)
                        .with_alpha(1.0, 0.0, Ease::InCubic),
                )
                .build(),
        )
        .build()
}

/// Build up, wait for a trigger, then release outward.
///
/// The charge stage pulses while it grows. The `ready` stage is manual, so the effect stays
/// primed until [`LifecycleAnimator::trigger_transition`].
pub fn charge_release(
    id: impl Into<String>,
    charge_ticks: u32,
    release_ticks: u32,
) -> LifecycleAnimator {
    LifecycleAnimator::builder(id)
        .stage(
            StageConfig::builder("charge")
                .duration(charge_ticks)
                .shape(
                    ShapeModifier::IDENTITY
                        .with_scale(0.2, 1.0, Ease::InQuad)
                        .with_radius(0.5, 1.0, Ease::InOutSine),
                )
                .animation(Animation::pulse(0.1, 0.6))
                .build(),
        )
        .stage(
            StageConfig::builder("ready")
                .transition(StageTransition::Manual)
                .animation(Animation::pulse(0.15, 1.2))
                .build(),
        )
        .stage(
            StageConfig::builder("release")
                .duration(release_ticks)
                .shape(
                    ShapeModifier::IDENTITY
                        .with_scale(1.0, 2.5, Ease::OutExpo)
                        .with_length(1.0, 3.0, Ease::OutCubic)
                        .with_alpha(1.0, 0.0, Ease::InQuad),
                )
                .build(),
        )
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/presets.rs"]
mod tests;
