use glam::Vec3;

use crate::channels::Channel;

// Irrational ratios keep the three axes from ever lining up into a visible loop.
const Y_RATE: f32 = 0.731;
const Z_RATE: f32 = 1.317;
const Y_PHASE: f32 = 1.3;
const Z_PHASE: f32 = 2.1;

/// Quasi-random positional sway on three axes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WobbleConfig {
    /// Peak offset per axis, in world units.
    pub amplitude: Vec3,
    /// Radians of phase per tick on the X axis; Y and Z run at fixed ratios of it.
    pub speed: f32,
}

impl WobbleConfig {
    /// Wobble with a given amplitude and speed.
    pub fn new(amplitude: Vec3, speed: f32) -> Self {
        Self { amplitude, speed }
    }

    /// Positional offset at `time` ticks, bounded by `amplitude` per axis.
    pub fn offset(&self, time: f32) -> Vec3 {
        if !self.is_active() {
            return Vec3::ZERO;
        }
        let p = time * self.speed;
        Vec3::new(
            self.amplitude.x * p.sin(),
            self.amplitude.y * (p * Y_RATE + Y_PHASE).sin(),
            self.amplitude.z * (p * Z_RATE + Z_PHASE).cos(),
        )
    }
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self::new(Vec3::new(0.1, 0.05, 0.1), 0.05)
    }
}

impl Channel for WobbleConfig {
    fn is_active(&self) -> bool {
        self.speed != 0.0 && self.amplitude != Vec3::ZERO
    }
}
