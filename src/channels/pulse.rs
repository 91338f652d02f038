use crate::{
    channels::{Channel, waveform::Waveform},
    foundation::math::EPSILON,
};

/// Periodic scale breathing around `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Peak deviation from `1.0`; `0.1` pulses between `0.9` and `1.1`.
    pub scale: f32,
    /// Radians of phase per tick.
    pub speed: f32,
    /// Pulse shape.
    pub waveform: Waveform,
}

impl PulseConfig {
    /// Sine pulse.
    pub fn new(scale: f32, speed: f32) -> Self {
        Self {
            scale,
            speed,
            waveform: Waveform::Sine,
        }
    }

    /// Same pulse with another waveform.
    pub fn with_waveform(self, waveform: Waveform) -> Self {
        Self { waveform, ..self }
    }

    /// Scale multiplier at `time` ticks.
    pub fn multiplier(&self, time: f32) -> f32 {
        if !self.is_active() {
            return 1.0;
        }
        1.0 + self.scale * self.waveform.sample(time * self.speed)
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::new(0.1, 0.1)
    }
}

impl Channel for PulseConfig {
    fn is_active(&self) -> bool {
        self.speed != 0.0 && self.scale != 0.0
    }
}

/// Periodic opacity between `min` and `max`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlphaPulseConfig {
    /// Radians of phase per tick.
    pub speed: f32,
    /// Lowest alpha.
    pub min: f32,
    /// Highest alpha.
    pub max: f32,
    /// Pulse shape.
    pub waveform: Waveform,
}

impl AlphaPulseConfig {
    /// Sine pulse between `min` and `max`.
    pub fn new(speed: f32, min: f32, max: f32) -> Self {
        Self {
            speed,
            min,
            max,
            waveform: Waveform::Sine,
        }
    }

    /// Same pulse with another waveform.
    pub fn with_waveform(self, waveform: Waveform) -> Self {
        Self { waveform, ..self }
    }

    /// Alpha at `time` ticks. Inactive pulses hold `max`.
    pub fn alpha(&self, time: f32) -> f32 {
        if !self.is_active() {
            return self.max;
        }
        self.min + (self.max - self.min) * self.waveform.sample01(time * self.speed)
    }
}

impl Default for AlphaPulseConfig {
    fn default() -> Self {
        Self::new(0.1, 0.3, 1.0)
    }
}

impl Channel for AlphaPulseConfig {
    fn is_active(&self) -> bool {
        self.speed != 0.0 && (self.max - self.min).abs() > EPSILON
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channels/pulse.rs"]
mod tests;
