use glam::Vec3;

use crate::{
    channels::Channel,
    foundation::{core::Axis, math::TAU},
};

/// Travelling sine displacement across a primitive's surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Peak displacement in world units.
    pub amplitude: f32,
    /// Spatial cycles per world unit.
    pub frequency: f32,
    /// Temporal cycles per tick.
    pub speed: f32,
    /// Displacement direction; the wave travels along it too.
    pub axis: Axis,
}

impl WaveConfig {
    /// Wave along Y.
    pub fn new(amplitude: f32, frequency: f32, speed: f32) -> Self {
        Self {
            amplitude,
            frequency,
            speed,
            axis: Axis::Y,
        }
    }

    /// Same wave on another axis.
    pub fn with_axis(self, axis: Axis) -> Self {
        Self { axis, ..self }
    }

    /// Scalar displacement at coordinate `position` along the wave at `time` ticks.
    pub fn displacement(&self, position: f32, time: f32) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        self.amplitude * (TAU * (self.frequency * position - self.speed * time)).sin()
    }

    /// Displace `vertex` along the axis, phased by its distance from the axis.
    pub fn displace(&self, vertex: Vec3, time: f32) -> Vec3 {
        let axis = self.axis.vector();
        let radial = (vertex - axis * vertex.dot(axis)).length();
        vertex + axis * self.displacement(radial, time)
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self::new(0.1, 2.0, 0.05)
    }
}

impl Channel for WaveConfig {
    fn is_active(&self) -> bool {
        self.amplitude != 0.0 && self.speed != 0.0
    }
}
