use std::f32::consts::PI;

use crate::{animation::lerp::Lerp, foundation::core::normalize_name};

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;

/// Easing functions used to map normalized stage progress.
///
/// `apply` does not clamp its input; [`Ease::lerp`] does. Every variant maps `0 -> 0` and
/// `1 -> 1`; the back and elastic families overshoot in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Sine ease-in.
    InSine,
    /// Sine ease-out.
    OutSine,
    /// Sine ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Ease-in that pulls back below zero first.
    InBack,
    /// Ease-out that overshoots past one.
    OutBack,
    /// Back ease on both ends.
    InOutBack,
    /// Bounce at the start.
    InBounce,
    /// Bounce at the end.
    OutBounce,
    /// Bounce on both ends.
    InOutBounce,
    /// Spring-like ease-in.
    InElastic,
    /// Spring-like ease-out.
    OutElastic,
    /// Spring-like ease on both ends.
    InOutElastic,
}

impl Ease {
    /// Every variant, in declaration order.
    pub const ALL: [Ease; 22] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
    ];

    /// Apply this easing function to progress `t`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InBack => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Self::OutBack => {
                1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
            }
            Self::InOutBack => {
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2)
                        + 2.0)
                        / 2.0
                }
            }
            Self::InBounce => 1.0 - bounce_out(1.0 - t),
            Self::OutBounce => bounce_out(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
            Self::InElastic => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
                }
            }
            Self::OutElastic => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
                }
            }
            Self::InOutElastic => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin())
                        / 2.0
                } else {
                    (2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin())
                        / 2.0
                        + 1.0
                }
            }
        }
    }

    /// Interpolate from `start` to `end` at progress `t`, clamped to `[0, 1]` before easing.
    pub fn lerp(self, start: f32, end: f32, t: f32) -> f32 {
        self.lerp_value(&start, &end, t)
    }

    /// [`Ease::lerp`] for any [`Lerp`] value.
    pub fn lerp_value<T: Lerp>(self, start: &T, end: &T, t: f32) -> T {
        T::lerp(start, end, self.apply(t.clamp(0.0, 1.0)))
    }

    /// Returns `true` for variants whose output leaves `[0, 1]` on the way.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InBack
                | Self::OutBack
                | Self::InOutBack
                | Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
        )
    }

    /// Canonical snake_case name, as written to config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::InSine => "in_sine",
            Self::OutSine => "out_sine",
            Self::InOutSine => "in_out_sine",
            Self::InExpo => "in_expo",
            Self::OutExpo => "out_expo",
            Self::InOutExpo => "in_out_expo",
            Self::InBack => "in_back",
            Self::OutBack => "out_back",
            Self::InOutBack => "in_out_back",
            Self::InBounce => "in_bounce",
            Self::OutBounce => "out_bounce",
            Self::InOutBounce => "in_out_bounce",
            Self::InElastic => "in_elastic",
            Self::OutElastic => "out_elastic",
            Self::InOutElastic => "in_out_elastic",
        }
    }

    /// Lenient lookup by name.
    ///
    /// Case and separators are ignored, an `ease` prefix is optional and the family may come
    /// first (`"quad_out"`) or last (`"out_quad"`). Unknown names fall back to [`Ease::Linear`].
    pub fn from_name(raw: &str) -> Self {
        let norm = normalize_name(raw);
        let key = norm.strip_prefix("ease").unwrap_or(&norm);
        let found = Self::ALL.into_iter().find(|e| {
            let canonical = normalize_name(e.name());
            canonical == key || family_first(&canonical).is_some_and(|alt| alt == key)
        });
        match found {
            Some(ease) => ease,
            None => {
                tracing::warn!(value = raw, "unknown ease function, falling back to linear");
                Self::Linear
            }
        }
    }
}

/// `"inoutquad"` -> `"quadinout"`, `"outback"` -> `"backout"`.
fn family_first(canonical: &str) -> Option<String> {
    for dir in ["inout", "in", "out"] {
        if let Some(family) = canonical.strip_prefix(dir) {
            if !family.is_empty() {
                return Some(format!("{family}{dir}"));
            }
        }
    }
    None
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl From<String> for Ease {
    fn from(raw: String) -> Self {
        Self::from_name(&raw)
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.name().to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
