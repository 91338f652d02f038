use crate::{
    channels::Channel,
    foundation::{
        core::normalize_name,
        math::{TAU, noise01, ray_phase, value_noise, wrap01},
    },
};

/// Cells along a ray that sparks can occupy.
const SPARK_CELLS: f32 = 16.0;
const SPARK_SALT: u64 = 0x5A17_0F1E_2B3C_4D5E;
const FLICKER_SALT: u64 = 0x0F11_CC3E_7A5B_9D21;

/// How much of a ray's length is drawn over time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LengthFlow {
    /// Whole ray visible.
    #[default]
    None,
    /// Grows from the base out to the tip, then restarts. `speed` in cycles per tick.
    Radiate {
        /// Cycles per tick.
        speed: f32,
    },
    /// Grows from the tip in towards the base, then restarts.
    Absorb {
        /// Cycles per tick.
        speed: f32,
    },
    /// Tip breathes between `min` and full length.
    Pulse {
        /// Radians of phase per tick.
        speed: f32,
        /// Shortest visible fraction.
        min: f32,
    },
    /// A window of `length` slides from base to tip.
    Segment {
        /// Cycles per tick.
        speed: f32,
        /// Window size as a fraction of the ray.
        length: f32,
    },
}

/// Brightness travelling along a ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TravelFlow {
    /// Uniform brightness.
    #[default]
    None,
    /// `count` evenly spaced bright bands of half-width `width` run outward.
    Chase {
        /// Cycles per tick.
        speed: f32,
        /// Number of bands.
        count: u32,
        /// Half-width of each band as a fraction of the ray.
        width: f32,
    },
    /// Sinusoidal brightness scrolling outward.
    Scroll {
        /// Cycles per tick.
        speed: f32,
    },
    /// Bright head with a linear fading tail.
    Comet {
        /// Cycles per tick.
        speed: f32,
        /// Tail length as a fraction of the ray.
        tail: f32,
    },
    /// Random cells light up, re-rolled `speed` times per tick.
    Spark {
        /// Re-rolls per tick.
        speed: f32,
        /// Fraction of lit cells.
        density: f32,
    },
}

/// Per-ray brightness noise independent of position along the ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FlickerFlow {
    /// Steady.
    #[default]
    None,
    /// Smooth twinkle.
    Scintillate {
        /// Maximum dimming, `0..=1`.
        intensity: f32,
        /// Noise lattice points per tick.
        frequency: f32,
    },
    /// Hard on/off.
    Strobe {
        /// Cycles per tick.
        frequency: f32,
        /// Fraction of each cycle spent on.
        duty: f32,
    },
    /// Slow cosine dimming, phased per ray.
    FadePulse {
        /// Radians of phase per tick.
        speed: f32,
        /// Maximum dimming, `0..=1`.
        depth: f32,
    },
    /// Stepped random dimming.
    Flicker {
        /// Maximum dimming, `0..=1`.
        intensity: f32,
        /// Steps per tick.
        frequency: f32,
    },
}

/// Visibility of a ray over its length and over time.
///
/// The three parts are independent: `length` masks which part of the ray exists, `travel`
/// modulates brightness along it and `flicker` modulates the whole ray.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RayFlowDef", into = "RayFlowDef")]
pub struct RayFlowConfig {
    /// Visible span animation.
    pub length: LengthFlow,
    /// Brightness along the ray.
    pub travel: TravelFlow,
    /// Whole-ray brightness noise.
    pub flicker: FlickerFlow,
    /// Offset each ray's length and travel cycle by `index / count`.
    pub stagger: bool,
}

impl LengthFlow {
    fn is_active(&self) -> bool {
        match *self {
            Self::None => false,
            Self::Radiate { speed } | Self::Absorb { speed } => speed != 0.0,
            Self::Pulse { speed, min } => speed != 0.0 && min < 1.0,
            Self::Segment { speed, .. } => speed != 0.0,
        }
    }
}

impl TravelFlow {
    fn is_active(&self) -> bool {
        match *self {
            Self::None => false,
            Self::Chase { speed, count, width } => speed != 0.0 && count > 0 && width > 0.0,
            Self::Scroll { speed } => speed != 0.0,
            Self::Comet { speed, tail } => speed != 0.0 && tail > 0.0,
            Self::Spark { speed, density } => speed != 0.0 && density < 1.0,
        }
    }
}

impl FlickerFlow {
    fn is_active(&self) -> bool {
        match *self {
            Self::None => false,
            Self::Scintillate {
                intensity,
                frequency,
            }
            | Self::Flicker {
                intensity,
                frequency,
            } => intensity > 0.0 && frequency > 0.0,
            Self::Strobe { frequency, duty } => frequency > 0.0 && duty < 1.0,
            Self::FadePulse { speed, depth } => speed != 0.0 && depth > 0.0,
        }
    }
}

impl RayFlowConfig {
    /// Only a length animation.
    pub fn length(length: LengthFlow) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Only a travel animation.
    pub fn travel(travel: TravelFlow) -> Self {
        Self {
            travel,
            ..Self::default()
        }
    }

    /// Only a flicker animation.
    pub fn flicker(flicker: FlickerFlow) -> Self {
        Self {
            flicker,
            ..Self::default()
        }
    }

    /// Replace the length part.
    pub fn with_length(self, length: LengthFlow) -> Self {
        Self { length, ..self }
    }

    /// Replace the travel part.
    pub fn with_travel(self, travel: TravelFlow) -> Self {
        Self { travel, ..self }
    }

    /// Replace the flicker part.
    pub fn with_flicker(self, flicker: FlickerFlow) -> Self {
        Self { flicker, ..self }
    }

    /// Stagger rays against each other.
    pub fn staggered(self) -> Self {
        Self {
            stagger: true,
            ..self
        }
    }

    fn cycle(&self, speed: f32, index: u32, count: u32, time: f32) -> f32 {
        let offset = if self.stagger && count > 0 {
            (index % count) as f32 / count as f32
        } else {
            0.0
        };
        wrap01(speed * time + offset)
    }

    /// Visible `(start, end)` fractions of ray `index` of `count` at `time` ticks.
    pub fn visible_span(&self, index: u32, count: u32, time: f32) -> (f32, f32) {
        match self.length {
            LengthFlow::None => (0.0, 1.0),
            l if !l.is_active() => (0.0, 1.0),
            LengthFlow::Radiate { speed } => (0.0, self.cycle(speed, index, count, time)),
            LengthFlow::Absorb { speed } => (1.0 - self.cycle(speed, index, count, time), 1.0),
            LengthFlow::Pulse { speed, min } => {
                let min = min.clamp(0.0, 1.0);
                let phase = speed * time
                    + if self.stagger {
                        ray_phase(index, count)
                    } else {
                        0.0
                    };
                (0.0, min + (1.0 - min) * (0.5 + 0.5 * phase.sin()))
            }
            LengthFlow::Segment { speed, length } => {
                let length = length.clamp(0.0, 1.0);
                let head = self.cycle(speed, index, count, time) * (1.0 + length);
                ((head - length).clamp(0.0, 1.0), head.clamp(0.0, 1.0))
            }
        }
    }

    /// Brightness multiplier at fraction `s` along ray `index` of `count`.
    pub fn travel_alpha(&self, s: f32, index: u32, count: u32, time: f32) -> f32 {
        let s = s.clamp(0.0, 1.0);
        if !self.travel.is_active() {
            return 1.0;
        }
        match self.travel {
            TravelFlow::None => 1.0,
            TravelFlow::Chase {
                speed,
                count: bands,
                width,
            } => {
                let head = self.cycle(speed, index, count, time);
                (0..bands)
                    .map(|k| {
                        let center = wrap01(head + k as f32 / bands as f32);
                        let d = (s - center).abs();
                        let d = d.min(1.0 - d);
                        (1.0 - d / width).max(0.0)
                    })
                    .fold(0.0, f32::max)
            }
            TravelFlow::Scroll { speed } => {
                let p = self.cycle(speed, index, count, time);
                0.5 + 0.5 * (TAU * (s - p)).sin()
            }
            TravelFlow::Comet { speed, tail } => {
                let head = self.cycle(speed, index, count, time);
                let behind = wrap01(head - s);
                if behind <= tail {
                    1.0 - behind / tail
                } else {
                    0.0
                }
            }
            TravelFlow::Spark { speed, density } => {
                let step = (speed * time).floor() as i64;
                let cell = (s * SPARK_CELLS).floor().min(SPARK_CELLS - 1.0) as i64;
                let seed = SPARK_SALT ^ u64::from(index).wrapping_mul(0x9E37_79B9) ^ step as u64;
                if noise01(seed, cell) < density {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Whole-ray brightness multiplier for ray `index` of `count`.
    pub fn flicker_alpha(&self, index: u32, count: u32, time: f32) -> f32 {
        if !self.flicker.is_active() {
            return 1.0;
        }
        let seed = FLICKER_SALT ^ u64::from(index);
        let v = match self.flicker {
            FlickerFlow::None => 1.0,
            FlickerFlow::Scintillate {
                intensity,
                frequency,
            } => 1.0 - intensity * value_noise(seed, time * frequency),
            FlickerFlow::Strobe { frequency, duty } => {
                if self.cycle(frequency, index, count, time) < duty {
                    1.0
                } else {
                    0.0
                }
            }
            FlickerFlow::FadePulse { speed, depth } => {
                let phase = speed * time + ray_phase(index, count);
                1.0 - depth * (0.5 - 0.5 * phase.cos())
            }
            FlickerFlow::Flicker {
                intensity,
                frequency,
            } => 1.0 - intensity * noise01(seed, (time * frequency).floor() as i64),
        };
        v.clamp(0.0, 1.0)
    }

    /// Final alpha at fraction `s` along ray `index`: zero outside the visible span, otherwise
    /// travel times flicker.
    pub fn alpha_at(&self, s: f32, index: u32, count: u32, time: f32) -> f32 {
        let (start, end) = self.visible_span(index, count, time);
        if s < start || s > end {
            return 0.0;
        }
        self.travel_alpha(s, index, count, time) * self.flicker_alpha(index, count, time)
    }
}

impl Channel for RayFlowConfig {
    fn is_active(&self) -> bool {
        self.length.is_active() || self.travel.is_active() || self.flicker.is_active()
    }
}

/// Flat serde form of [`RayFlowConfig`], one `*_mode` string per part.
///
/// Parameters that the selected modes do not use are ignored. Unknown modes load as `none`.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RayFlowDef {
    pub length_mode: String,
    pub length_speed: f32,
    pub length_min: f32,
    pub segment_length: f32,
    pub travel_mode: String,
    pub travel_speed: f32,
    pub chase_count: u32,
    pub chase_width: f32,
    pub comet_tail: f32,
    pub spark_density: f32,
    pub flicker_mode: String,
    pub flicker_intensity: f32,
    pub flicker_frequency: f32,
    pub strobe_duty: f32,
    pub stagger: bool,
}

impl Default for RayFlowDef {
    fn default() -> Self {
        Self {
            length_mode: "none".to_owned(),
            length_speed: 0.05,
            length_min: 0.2,
            segment_length: 0.3,
            travel_mode: "none".to_owned(),
            travel_speed: 0.05,
            chase_count: 1,
            chase_width: 0.2,
            comet_tail: 0.4,
            spark_density: 0.3,
            flicker_mode: "none".to_owned(),
            flicker_intensity: 0.5,
            flicker_frequency: 0.5,
            strobe_duty: 0.5,
            stagger: false,
        }
    }
}

impl From<RayFlowDef> for RayFlowConfig {
    fn from(def: RayFlowDef) -> Self {
        let length = match normalize_name(&def.length_mode).as_str() {
            "none" | "" => LengthFlow::None,
            "radiate" => LengthFlow::Radiate {
                speed: def.length_speed,
            },
            "absorb" => LengthFlow::Absorb {
                speed: def.length_speed,
            },
            "pulse" => LengthFlow::Pulse {
                speed: def.length_speed,
                min: def.length_min,
            },
            "segment" => LengthFlow::Segment {
                speed: def.length_speed,
                length: def.segment_length,
            },
            _ => {
                tracing::warn!(value = %def.length_mode, "unknown ray length mode, using none");
                LengthFlow::None
            }
        };
        let travel = match normalize_name(&def.travel_mode).as_str() {
            "none" | "" => TravelFlow::None,
            "chase" => TravelFlow::Chase {
                speed: def.travel_speed,
                count: def.chase_count,
                width: def.chase_width,
            },
            "scroll" => TravelFlow::Scroll {
                speed: def.travel_speed,
            },
            "comet" => TravelFlow::Comet {
                speed: def.travel_speed,
                tail: def.comet_tail,
            },
            "spark" => TravelFlow::Spark {
                speed: def.travel_speed,
                density: def.spark_density,
            },
            _ => {
                tracing::warn!(value = %def.travel_mode, "unknown ray travel mode, using none");
                TravelFlow::None
            }
        };
        let flicker = match normalize_name(&def.flicker_mode).as_str() {
            "none" | "" => FlickerFlow::None,
            "scintillate" | "scintillation" => FlickerFlow::Scintillate {
                intensity: def.flicker_intensity,
                frequency: def.flicker_frequency,
            },
            "strobe" => FlickerFlow::Strobe {
                frequency: def.flicker_frequency,
                duty: def.strobe_duty,
            },
            "fadepulse" => FlickerFlow::FadePulse {
                speed: def.flicker_frequency,
                depth: def.flicker_intensity,
            },
            "flicker" => FlickerFlow::Flicker {
                intensity: def.flicker_intensity,
                frequency: def.flicker_frequency,
            },
            _ => {
                tracing::warn!(value = %def.flicker_mode, "unknown ray flicker mode, using none");
                FlickerFlow::None
            }
        };
        Self {
            length,
            travel,
            flicker,
            stagger: def.stagger,
        }
    }
}

impl From<RayFlowConfig> for RayFlowDef {
    fn from(cfg: RayFlowConfig) -> Self {
        let mut def = Self {
            stagger: cfg.stagger,
            ..Self::default()
        };
        match cfg.length {
            LengthFlow::None => {}
            LengthFlow::Radiate { speed } => {
                def.length_mode = "radiate".to_owned();
                def.length_speed = speed;
            }
            LengthFlow::Absorb { speed } => {
                def.length_mode = "absorb".to_owned();
                def.length_speed = speed;
            }
            LengthFlow::Pulse { speed, min } => {
                def.length_mode = "pulse".to_owned();
                def.length_speed = speed;
                def.length_min = min;
            }
            LengthFlow::Segment { speed, length } => {
                def.length_mode = "segment".to_owned();
                def.length_speed = speed;
                def.segment_length = length;
            }
        }
        match cfg.travel {
            TravelFlow::None => {}
            TravelFlow::Chase { speed, count, width } => {
                def.travel_mode = "chase".to_owned();
                def.travel_speed = speed;
                def.chase_count = count;
                def.chase_width = width;
            }
            TravelFlow::Scroll { speed } => {
                def.travel_mode = "scroll".to_owned();
                def.travel_speed = speed;
            }
            TravelFlow::Comet { speed, tail } => {
                def.travel_mode = "comet".to_owned();
                def.travel_speed = speed;
                def.comet_tail = tail;
            }
            TravelFlow::Spark { speed, density } => {
                def.travel_mode = "spark".to_owned();
                def.travel_speed = speed;
                def.spark_density = density;
            }
        }
        match cfg.flicker {
            FlickerFlow::None => {}
            FlickerFlow::Scintillate {
                intensity,
                frequency,
            } => {
                def.flicker_mode = "scintillate".to_owned();
                def.flicker_intensity = intensity;
                def.flicker_frequency = frequency;
            }
            FlickerFlow::Strobe { frequency, duty } => {
                def.flicker_mode = "strobe".to_owned();
                def.flicker_frequency = frequency;
                def.strobe_duty = duty;
            }
            FlickerFlow::FadePulse { speed, depth } => {
                def.flicker_mode = "fade_pulse".to_owned();
                def.flicker_frequency = speed;
                def.flicker_intensity = depth;
            }
            FlickerFlow::Flicker {
                intensity,
                frequency,
            } => {
                def.flicker_mode = "flicker".to_owned();
                def.flicker_intensity = intensity;
                def.flicker_frequency = frequency;
            }
        }
        def
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/channels/ray/flow.rs"]
mod tests;
