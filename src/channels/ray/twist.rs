use crate::{
    channels::Channel,
    foundation::{
        core::normalize_name,
        math::{TAU, ray_phase},
    },
};

/// Rotation of a ray about its own long axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RayTwistDef", into = "RayTwistDef")]
pub enum RayTwist {
    /// No roll.
    #[default]
    None,
    /// Constant roll, the same along the whole ray.
    Spin {
        /// Radians per tick.
        speed: f32,
    },
    /// Roll back and forth, phased per ray.
    Oscillate {
        /// Peak roll in degrees.
        amount_degrees: f32,
        /// Radians of phase per tick.
        speed: f32,
    },
    /// A fixed number of turns from base to tip, optionally rolling.
    Wind {
        /// Full turns between base and tip.
        turns: f32,
        /// Radians per tick added uniformly.
        speed: f32,
    },
    /// Oscillating roll that grows from nothing at the base to `amount_degrees` at the tip.
    Progressive {
        /// Peak roll at the tip in degrees.
        amount_degrees: f32,
        /// Radians of phase per tick.
        speed: f32,
    },
}

impl RayTwist {
    /// Roll in radians at fraction `s` along ray `index` of `count`, at `time` ticks.
    pub fn angle(&self, s: f32, index: u32, count: u32, time: f32) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        let s = s.clamp(0.0, 1.0);
        let phase = ray_phase(index, count);
        match *self {
            Self::None => 0.0,
            Self::Spin { speed } => speed * time,
            Self::Oscillate {
                amount_degrees,
                speed,
            } => amount_degrees.to_radians() * (speed * time + phase).sin(),
            Self::Wind { turns, speed } => TAU * turns * s + speed * time,
            Self::Progressive {
                amount_degrees,
                speed,
            } => s * amount_degrees.to_radians() * (speed * time + phase).sin(),
        }
    }
}

impl Channel for RayTwist {
    fn is_active(&self) -> bool {
        match *self {
            Self::None => false,
            Self::Spin { speed } => speed != 0.0,
            Self::Wind { turns, speed } => turns != 0.0 || speed != 0.0,
            Self::Oscillate {
                amount_degrees,
                speed,
            }
            | Self::Progressive {
                amount_degrees,
                speed,
            } => amount_degrees != 0.0 && speed != 0.0,
        }
    }
}

/// Flat serde form of [`RayTwist`].
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RayTwistDef {
    pub mode: String,
    pub speed: f32,
    pub amount_degrees: f32,
    pub turns: f32,
}

impl Default for RayTwistDef {
    fn default() -> Self {
        Self {
            mode: "none".to_owned(),
            speed: 0.05,
            amount_degrees: 45.0,
            turns: 1.0,
        }
    }
}

impl From<RayTwistDef> for RayTwist {
    fn from(def: RayTwistDef) -> Self {
        let RayTwistDef {
            mode,
            speed,
            amount_degrees,
            turns,
        } = def;
        match normalize_name(&mode).as_str() {
            "none" | "" => Self::None,
            "spin" => Self::Spin { speed },
            "oscillate" => Self::Oscillate {
                amount_degrees,
                speed,
            },
            "wind" => Self::Wind { turns, speed },
            "progressive" => Self::Progressive {
                amount_degrees,
                speed,
            },
            _ => {
                tracing::warn!(value = %mode, "unknown ray twist mode, using none");
                Self::None
            }
        }
    }
}

impl From<RayTwist> for RayTwistDef {
    fn from(twist: RayTwist) -> Self {
        let mut def = Self::default();
        match twist {
            RayTwist::None => {}
            RayTwist::Spin { speed } => {
                def.mode = "spin".to_owned();
                def.speed = speed;
            }
            RayTwist::Oscillate {
                amount_degrees,
                speed,
            } => {
                def.mode = "oscillate".to_owned();
                def.amount_degrees = amount_degrees;
                def.speed = speed;
            }
            RayTwist::Wind { turns, speed } => {
                def.mode = "wind".to_owned();
                def.turns = turns;
                def.speed = speed;
            }
            RayTwist::Progressive {
                amount_degrees,
                speed,
            } => {
                def.mode = "progressive".to_owned();
                def.amount_degrees = amount_degrees;
                def.speed = speed;
            }
        }
        def
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/channels/ray/twist.rs"]
mod tests;
