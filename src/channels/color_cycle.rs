use crate::{
    animation::{ease::Ease, lerp::Lerp},
    channels::Channel,
    foundation::core::Rgb,
};

/// Cycles through a palette, optionally blending between neighbours.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorCycleConfig {
    /// Palette, visited in order and wrapping around.
    pub colors: Vec<Rgb>,
    /// Palette entries advanced per tick.
    pub speed: f32,
    /// Blend between neighbours; when unset the color steps.
    pub blend: bool,
    /// Curve applied to each blend.
    pub ease: Ease,
}

/// Position of a color cycle at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSample {
    /// Palette index being left.
    pub from: usize,
    /// Palette index being approached.
    pub to: usize,
    /// Eased blend factor from `from` towards `to`, `0` when stepping.
    pub factor: f32,
}

impl ColorCycleConfig {
    /// Blended cycle over `colors`.
    pub fn new(colors: Vec<Rgb>, speed: f32) -> Self {
        Self {
            colors,
            speed,
            ..Self::default()
        }
    }

    /// Step between colors without blending.
    pub fn stepped(self) -> Self {
        Self {
            blend: false,
            ..self
        }
    }

    /// Blend curve.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Palette position at `time` ticks, or `None` with an empty palette.
    pub fn sample(&self, time: f32) -> Option<ColorSample> {
        let n = self.colors.len();
        if n == 0 {
            return None;
        }
        if n == 1 || self.speed == 0.0 {
            return Some(ColorSample {
                from: 0,
                to: 0,
                factor: 0.0,
            });
        }
        let pos = (time * self.speed).rem_euclid(n as f32);
        // rem_euclid may round up to exactly n
        let from = (pos.floor() as usize) % n;
        let to = (from + 1) % n;
        let factor = if self.blend {
            self.ease.apply((pos - pos.floor()).clamp(0.0, 1.0))
        } else {
            0.0
        };
        Some(ColorSample { from, to, factor })
    }

    /// Color at `time` ticks; white with an empty palette.
    pub fn color(&self, time: f32) -> Rgb {
        let Some(s) = self.sample(time) else {
            return Rgb::WHITE;
        };
        Rgb::lerp(&self.colors[s.from], &self.colors[s.to], s.factor)
    }
}

impl Default for ColorCycleConfig {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            speed: 0.05,
            blend: true,
            ease: Ease::Linear,
        }
    }
}

impl Channel for ColorCycleConfig {
    fn is_active(&self) -> bool {
        self.colors.len() >= 2 && self.speed != 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channels/color_cycle.rs"]
mod tests;
