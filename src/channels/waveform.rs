use crate::foundation::{
    core::normalize_name,
    math::{TAU, wrap01},
};

/// Periodic shape shared by the pulsing channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Waveform {
    /// Smooth sine.
    #[default]
    Sine,
    /// Hard on/off.
    Square,
    /// Linear up and down.
    Triangle,
    /// Linear ramp with a hard reset.
    Sawtooth,
}

impl Waveform {
    /// Sample at `phase` radians; output in `[-1, 1]`, period `TAU`.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Self::Sine => phase.sin(),
            Self::Square => {
                if wrap01(phase / TAU) < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Triangle => {
                // matches sine at the quarter points: 0, 1, 0, -1
                let u = wrap01(phase / TAU + 0.25);
                if u < 0.5 {
                    4.0 * u - 1.0
                } else {
                    3.0 - 4.0 * u
                }
            }
            Self::Sawtooth => 2.0 * wrap01(phase / TAU + 0.5) - 1.0,
        }
    }

    /// [`Waveform::sample`] remapped to `[0, 1]`.
    pub fn sample01(self, phase: f32) -> f32 {
        self.sample(phase) * 0.5 + 0.5
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Sawtooth => "sawtooth",
        }
    }

    /// Lenient lookup; unknown names fall back to [`Waveform::Sine`].
    pub fn from_name(raw: &str) -> Self {
        match normalize_name(raw).as_str() {
            "sine" | "sin" => Self::Sine,
            "square" => Self::Square,
            "triangle" | "tri" => Self::Triangle,
            "sawtooth" | "saw" => Self::Sawtooth,
            _ => {
                tracing::warn!(value = raw, "unknown waveform, falling back to sine");
                Self::Sine
            }
        }
    }
}

impl From<String> for Waveform {
    fn from(raw: String) -> Self {
        Self::from_name(&raw)
    }
}

impl From<Waveform> for String {
    fn from(w: Waveform) -> Self {
        w.name().to_owned()
    }
}
