use glam::Vec2;

use crate::{
    channels::Channel,
    foundation::{
        core::normalize_name,
        math::{TAU, ray_phase, value_noise},
    },
};

const SHIMMER_SALT: u64 = 0x51AA_E3C0_76D2_0B4F;

/// Numbers shared by every wiggle shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiggleParams {
    /// Peak sideways deflection in world units.
    pub amplitude: f32,
    /// Spatial cycles along the ray.
    pub frequency: f32,
    /// Radians of phase per tick.
    pub speed: f32,
}

impl WiggleParams {
    /// Bundle the three numbers.
    pub const fn new(amplitude: f32, frequency: f32, speed: f32) -> Self {
        Self {
            amplitude,
            frequency,
            speed,
        }
    }
}

/// Sideways deformation of a ray along its length.
///
/// Deflections are in the plane across the ray (x lateral, y binormal). Every shape except
/// [`RayWiggle::Ripple`] is pinned to zero at the base.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RayWiggleDef", into = "RayWiggleDef")]
pub enum RayWiggle {
    /// Straight rays.
    #[default]
    None,
    /// A lateral sine wave travelling out from the base.
    Wiggle(WiggleParams),
    /// The whole ray bends side to side; `frequency` is unused.
    Sway(WiggleParams),
    /// A helix: lateral and binormal waves a quarter cycle apart.
    Writhe(WiggleParams),
    /// Fine noise on both axes.
    Shimmer(WiggleParams),
    /// A travelling wave with a free base.
    Ripple(WiggleParams),
    /// Like `Wiggle` but growing quadratically towards the tip.
    Whip(WiggleParams),
}

impl RayWiggle {
    /// Parameters of the current shape, `None` when straight.
    pub fn params(&self) -> Option<WiggleParams> {
        match *self {
            Self::None => None,
            Self::Wiggle(p)
            | Self::Sway(p)
            | Self::Writhe(p)
            | Self::Shimmer(p)
            | Self::Ripple(p)
            | Self::Whip(p) => Some(p),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Wiggle(_) => "wiggle",
            Self::Sway(_) => "sway",
            Self::Writhe(_) => "writhe",
            Self::Shimmer(_) => "shimmer",
            Self::Ripple(_) => "ripple",
            Self::Whip(_) => "whip",
        }
    }

    /// Deflection at fraction `s` along ray `index` of `count`, at `time` ticks.
    pub fn deflection(&self, s: f32, index: u32, count: u32, time: f32) -> Vec2 {
        let Some(p) = self.params().filter(|_| self.is_active()) else {
            return Vec2::ZERO;
        };
        let s = s.clamp(0.0, 1.0);
        let phase = ray_phase(index, count);
        let wave = TAU * p.frequency * s - p.speed * time + phase;
        match self {
            Self::None => Vec2::ZERO,
            Self::Wiggle(_) => Vec2::new(p.amplitude * s * wave.sin(), 0.0),
            Self::Sway(_) => Vec2::new(p.amplitude * s * (p.speed * time + phase).sin(), 0.0),
            Self::Writhe(_) => Vec2::new(wave.sin(), wave.cos()) * (p.amplitude * s),
            Self::Shimmer(_) => {
                let seed = SHIMMER_SALT ^ u64::from(index);
                let x = p.frequency * s * 8.0 + p.speed * time;
                let n = |k: u64| 2.0 * value_noise(seed.wrapping_add(k), x) - 1.0;
                Vec2::new(n(0), n(1)) * (p.amplitude * s)
            }
            Self::Ripple(_) => Vec2::new(p.amplitude * wave.sin(), 0.0),
            Self::Whip(_) => Vec2::new(p.amplitude * s * s * wave.sin(), 0.0),
        }
    }
}

impl Channel for RayWiggle {
    fn is_active(&self) -> bool {
        self.params()
            .is_some_and(|p| p.amplitude != 0.0 && p.speed != 0.0)
    }
}

/// Flat serde form of [`RayWiggle`].
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RayWiggleDef {
    pub mode: String,
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
}

impl Default for RayWiggleDef {
    fn default() -> Self {
        Self {
            mode: "none".to_owned(),
            amplitude: 0.05,
            frequency: 2.0,
            speed: 0.2,
        }
    }
}

impl From<RayWiggleDef> for RayWiggle {
    fn from(def: RayWiggleDef) -> Self {
        let p = WiggleParams::new(def.amplitude, def.frequency, def.speed);
        match normalize_name(&def.mode).as_str() {
            "none" | "" => Self::None,
            "wiggle" => Self::Wiggle(p),
            "sway" => Self::Sway(p),
            "writhe" => Self::Writhe(p),
            "shimmer" => Self::Shimmer(p),
            "ripple" => Self::Ripple(p),
            "whip" => Self::Whip(p),
            _ => {
                tracing::warn!(value = %def.mode, "unknown ray wiggle mode, using none");
                Self::None
            }
        }
    }
}

impl From<RayWiggle> for RayWiggleDef {
    fn from(wiggle: RayWiggle) -> Self {
        let d = Self::default();
        let p = wiggle
            .params()
            .unwrap_or(WiggleParams::new(d.amplitude, d.frequency, d.speed));
        Self {
            mode: wiggle.name().to_owned(),
            amplitude: p.amplitude,
            frequency: p.frequency,
            speed: p.speed,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/channels/ray/wiggle.rs"]
mod tests;
