use glam::Quat;

use crate::{
    channels::Channel,
    foundation::{core::Axis, math::TAU},
};

/// Continuous or oscillating rotation about one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Rotation axis.
    pub axis: Axis,
    /// Radians per tick. Negative spins the other way.
    pub speed: f32,
    /// Swing back and forth instead of turning continuously.
    pub oscillate: bool,
    /// Full swing in degrees when `oscillate` is set.
    pub range_degrees: f32,
}

impl SpinConfig {
    /// Default spin speed in radians per tick.
    pub const DEFAULT_SPEED: f32 = 0.02;

    /// Continuous spin about Y at `speed`.
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Same config on another axis.
    pub fn with_axis(self, axis: Axis) -> Self {
        Self { axis, ..self }
    }

    /// Oscillate through `range_degrees` instead of spinning.
    pub fn oscillating(self, range_degrees: f32) -> Self {
        Self {
            oscillate: true,
            range_degrees,
            ..self
        }
    }

    /// Angle in radians at `time` ticks.
    ///
    /// Continuous spins wrap into `[0, TAU)`; oscillation stays within `±range/2`.
    pub fn angle(&self, time: f32) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        if self.oscillate {
            let half = self.range_degrees.to_radians() * 0.5;
            (time * self.speed).sin() * half
        } else {
            (time * self.speed).rem_euclid(TAU)
        }
    }

    /// Rotation at `time` ticks.
    pub fn rotation(&self, time: f32) -> Quat {
        Quat::from_axis_angle(self.axis.vector(), self.angle(time))
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            speed: Self::DEFAULT_SPEED,
            oscillate: false,
            range_degrees: 360.0,
        }
    }
}

impl Channel for SpinConfig {
    fn is_active(&self) -> bool {
        self.speed != 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channels/spin.rs"]
mod tests;
