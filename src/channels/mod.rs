//! Stateless animation channels and the [`Animation`] bundle that groups them.
//!
//! Every channel is an immutable config plus pure evaluators keyed by world time in ticks.

pub(crate) mod color_cycle;
pub(crate) mod precession;
pub(crate) mod pulse;
pub(crate) mod ray;
pub(crate) mod spin;
pub(crate) mod wave;
pub(crate) mod waveform;
pub(crate) mod wobble;

use self::{
    color_cycle::ColorCycleConfig,
    precession::PrecessionConfig,
    pulse::{AlphaPulseConfig, PulseConfig},
    ray::{flow::RayFlowConfig, motion::RayMotion, twist::RayTwist, wiggle::RayWiggle},
    spin::SpinConfig,
    wave::WaveConfig,
    wobble::WobbleConfig,
};

/// Shared by every channel config.
pub trait Channel {
    /// Whether evaluating this channel can produce anything other than its rest value.
    fn is_active(&self) -> bool;
}

impl<C: Channel> Channel for Option<C> {
    fn is_active(&self) -> bool {
        self.as_ref().is_some_and(Channel::is_active)
    }
}

/// One optional instance of every channel.
///
/// Values are replaced rather than edited: each `with_*` returns a new bundle.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Animation {
    /// Rotation about an axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin: Option<SpinConfig>,
    /// Scale breathing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse: Option<PulseConfig>,
    /// Alpha breathing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_pulse: Option<AlphaPulseConfig>,
    /// Color cycling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_cycle: Option<ColorCycleConfig>,
    /// Positional sway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wobble: Option<WobbleConfig>,
    /// Surface wave.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave: Option<WaveConfig>,
    /// Axis precession.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precession: Option<PrecessionConfig>,
    /// Ray visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ray_flow: Option<RayFlowConfig>,
    /// Ray position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ray_motion: Option<RayMotion>,
    /// Ray bending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ray_wiggle: Option<RayWiggle>,
    /// Ray roll.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ray_twist: Option<RayTwist>,
}

macro_rules! channel_accessors {
    ($($field:ident: $ty:ty => $get:ident, $has:ident, $with:ident;)*) => {
        $(
            #[doc = concat!("Whether `", stringify!($field), "` is set and active.")]
            pub fn $has(&self) -> bool {
                self.$field.is_active()
            }

            #[doc = concat!("The `", stringify!($field), "` channel, if set.")]
            pub fn $get(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            #[doc = concat!("Replace the `", stringify!($field), "` channel.")]
            pub fn $with(self, $field: impl Into<Option<$ty>>) -> Self {
                Self {
                    $field: $field.into(),
                    ..self
                }
            }
        )*
    };
}

impl Animation {
    /// No channels.
    pub const NONE: Self = Self {
        spin: None,
        pulse: None,
        alpha_pulse: None,
        color_cycle: None,
        wobble: None,
        wave: None,
        precession: None,
        ray_flow: None,
        ray_motion: None,
        ray_wiggle: None,
        ray_twist: None,
    };

    /// Just a spin at `speed` radians per tick about Y.
    pub fn spin(speed: f32) -> Self {
        Self::NONE.with_spin(SpinConfig::new(speed))
    }

    /// Just a scale pulse.
    pub fn pulse(scale: f32, speed: f32) -> Self {
        Self::NONE.with_pulse(PulseConfig::new(scale, speed))
    }

    channel_accessors! {
        spin: SpinConfig => spin_config, has_spin, with_spin;
        pulse: PulseConfig => pulse_config, has_pulse, with_pulse;
        alpha_pulse: AlphaPulseConfig => alpha_pulse_config, has_alpha_pulse, with_alpha_pulse;
        color_cycle: ColorCycleConfig => color_cycle_config, has_color_cycle, with_color_cycle;
        wobble: WobbleConfig => wobble_config, has_wobble, with_wobble;
        wave: WaveConfig => wave_config, has_wave, with_wave;
        precession: PrecessionConfig => precession_config, has_precession, with_precession;
        ray_flow: RayFlowConfig => ray_flow_config, has_ray_flow, with_ray_flow;
        ray_motion: RayMotion => ray_motion_config, has_ray_motion, with_ray_motion;
        ray_wiggle: RayWiggle => ray_wiggle_config, has_ray_wiggle, with_ray_wiggle;
        ray_twist: RayTwist => ray_twist_config, has_ray_twist, with_ray_twist;
    }

    /// Whether any of the four ray channels is active.
    pub fn has_ray_animation(&self) -> bool {
        self.has_ray_flow() || self.has_ray_motion() || self.has_ray_wiggle() || self.has_ray_twist()
    }
}

impl Channel for Animation {
    fn is_active(&self) -> bool {
        self.has_spin()
            || self.has_pulse()
            || self.has_alpha_pulse()
            || self.has_color_cycle()
            || self.has_wobble()
            || self.has_wave()
            || self.has_precession()
            || self.has_ray_animation()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channels/animation.rs"]
mod tests;
