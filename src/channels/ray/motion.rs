use glam::Vec3;

use crate::{
    channels::Channel,
    foundation::{
        core::{Axis, normalize_name},
        math::{ray_phase, value_noise},
    },
};

const JITTER_SALT: u64 = 0x3D1F_77A0_C4E2_9B65;

/// Per-ray positional animation, expressed in the ray's own frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RayMotionDef", into = "RayMotionDef")]
pub enum RayMotion {
    /// Rays stay put.
    #[default]
    None,
    /// Rays slide in and out along their own direction, phased around the primitive.
    Radial {
        /// Peak slide in world units.
        amplitude: f32,
        /// Radians of phase per tick.
        speed: f32,
    },
    /// The whole fan rotates about the primitive's axis.
    Orbit {
        /// Radians per tick.
        speed: f32,
    },
    /// Rays swing along one local axis.
    Oscillate {
        /// Local axis: X lateral, Y along the ray, Z binormal.
        axis: Axis,
        /// Peak offset in world units.
        amplitude: f32,
        /// Radians of phase per tick.
        speed: f32,
    },
    /// The ray base circles in the plane across the ray.
    Spiral {
        /// Circle radius in world units.
        radius: f32,
        /// Radians per tick.
        speed: f32,
    },
    /// Smooth random drift on all three local axes.
    Jitter {
        /// Peak offset per axis in world units.
        amplitude: f32,
        /// Noise lattice points per tick.
        speed: f32,
    },
}

/// Where ray `index` sits relative to its rest pose.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct RayMotionSample {
    /// Offset in the ray frame: x lateral, y along the ray, z binormal.
    pub offset: Vec3,
    /// Extra rotation of the ray about the primitive's axis, in radians.
    pub angle: f32,
}

impl RayMotion {
    /// Evaluate ray `index` of `count` at `time` ticks.
    pub fn sample(&self, index: u32, count: u32, time: f32) -> RayMotionSample {
        if !self.is_active() {
            return RayMotionSample::default();
        }
        let phase = ray_phase(index, count);
        match *self {
            Self::None => RayMotionSample::default(),
            Self::Radial { amplitude, speed } => RayMotionSample {
                offset: Vec3::Y * amplitude * (speed * time + phase).sin(),
                angle: 0.0,
            },
            Self::Orbit { speed } => RayMotionSample {
                offset: Vec3::ZERO,
                angle: speed * time,
            },
            Self::Oscillate {
                axis,
                amplitude,
                speed,
            } => RayMotionSample {
                offset: axis.vector() * amplitude * (speed * time + phase).sin(),
                angle: 0.0,
            },
            Self::Spiral { radius, speed } => {
                let a = speed * time + phase;
                RayMotionSample {
                    offset: Vec3::new(radius * a.cos(), 0.0, radius * a.sin()),
                    angle: 0.0,
                }
            }
            Self::Jitter { amplitude, speed } => {
                let seed = JITTER_SALT ^ u64::from(index).wrapping_mul(0x2545_F491);
                let x = time * speed;
                let axis = |k: u64| amplitude * (2.0 * value_noise(seed.wrapping_add(k), x) - 1.0);
                RayMotionSample {
                    offset: Vec3::new(axis(0), axis(1), axis(2)),
                    angle: 0.0,
                }
            }
        }
    }
}

impl Channel for RayMotion {
    fn is_active(&self) -> bool {
        match *self {
            Self::None => false,
            Self::Orbit { speed } => speed != 0.0,
            Self::Radial { amplitude, speed }
            | Self::Oscillate {
                amplitude, speed, ..
            }
            | Self::Jitter { amplitude, speed } => amplitude != 0.0 && speed != 0.0,
            Self::Spiral { radius, speed } => radius != 0.0 && speed != 0.0,
        }
    }
}

/// Flat serde form of [`RayMotion`]. `amplitude` doubles as the spiral radius.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RayMotionDef {
    pub mode: String,
    pub amplitude: f32,
    pub speed: f32,
    pub axis: Axis,
}

impl Default for RayMotionDef {
    fn default() -> Self {
        Self {
            mode: "none".to_owned(),
            amplitude: 0.1,
            speed: 0.05,
            axis: Axis::Y,
        }
    }
}

impl From<RayMotionDef> for RayMotion {
    fn from(def: RayMotionDef) -> Self {
        let RayMotionDef {
            mode,
            amplitude,
            speed,
            axis,
        } = def;
        match normalize_name(&mode).as_str() {
            "none" | "" => Self::None,
            "radial" => Self::Radial { amplitude, speed },
            "orbit" => Self::Orbit { speed },
            "oscillate" => Self::Oscillate {
                axis,
                amplitude,
                speed,
            },
            "spiral" => Self::Spiral {
                radius: amplitude,
                speed,
            },
            "jitter" => Self::Jitter { amplitude, speed },
            _ => {
                tracing::warn!(value = %mode, "unknown ray motion mode, using none");
                Self::None
            }
        }
    }
}

impl From<RayMotion> for RayMotionDef {
    fn from(motion: RayMotion) -> Self {
        let d = Self::default();
        let (mode, amplitude, speed, axis) = match motion {
            RayMotion::None => ("none", d.amplitude, d.speed, d.axis),
            RayMotion::Radial { amplitude, speed } => ("radial", amplitude, speed, d.axis),
            RayMotion::Orbit { speed } => ("orbit", d.amplitude, speed, d.axis),
            RayMotion::Oscillate {
                axis,
                amplitude,
                speed,
            } => ("oscillate", amplitude, speed, axis),
            RayMotion::Spiral { radius, speed } => ("spiral", radius, speed, d.axis),
            RayMotion::Jitter { amplitude, speed } => ("jitter", amplitude, speed, d.axis),
        };
        Self {
            mode: mode.to_owned(),
            amplitude,
            speed,
            axis,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/channels/ray/motion.rs"]
mod tests;
