use glam::{Quat, Vec3};

use crate::{channels::Channel, foundation::core::Axis};

/// Tilts the primitive off its axis and sweeps the tilt direction around it, like a top.
///
/// The body itself does not spin; combine with [`SpinConfig`](crate::SpinConfig) for that.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PrecessionConfig {
    /// Axis the tilt circles around.
    pub axis: Axis,
    /// Tilt away from `axis`, in degrees.
    pub tilt_degrees: f32,
    /// Radians of sweep per tick.
    pub speed: f32,
}

impl PrecessionConfig {
    /// Precession about Y.
    pub fn new(tilt_degrees: f32, speed: f32) -> Self {
        Self {
            axis: Axis::Y,
            tilt_degrees,
            speed,
        }
    }

    /// Same precession about another axis.
    pub fn with_axis(self, axis: Axis) -> Self {
        Self { axis, ..self }
    }

    /// Sweep angle in radians at `time` ticks.
    pub fn sweep(&self, time: f32) -> f32 {
        time * self.speed
    }

    /// Orientation at `time` ticks.
    pub fn rotation(&self, time: f32) -> Quat {
        if !self.is_active() {
            return Quat::IDENTITY;
        }
        let (e1, _) = self.axis.basis();
        let around = Quat::from_axis_angle(self.axis.vector(), self.sweep(time));
        let tilt = Quat::from_axis_angle(e1, self.tilt_degrees.to_radians());
        // conjugating the tilt by the sweep moves the tilt direction without spinning the body
        around * tilt * around.conjugate()
    }

    /// Where the primitive's own axis points at `time` ticks.
    pub fn tilted_axis(&self, time: f32) -> Vec3 {
        self.rotation(time) * self.axis.vector()
    }
}

impl Default for PrecessionConfig {
    fn default() -> Self {
        Self::new(15.0, 0.05)
    }
}

impl Channel for PrecessionConfig {
    fn is_active(&self) -> bool {
        self.speed != 0.0 && self.tilt_degrees != 0.0
    }
}
