//! fieldfx drives tick-based visual effects for renderable primitives.
//!
//! A primitive walks through a [`LifecycleAnimator`]: an ordered list of [`StageConfig`]s, each
//! with a duration, a [`StageTransition`] policy and a [`ShapeModifier`] whose eased curves map
//! stage progress to scale, length, radius and alpha. On top of that an [`Animation`] bundles
//! stateless channels (spin, pulse, color cycling, per-ray flow and friends) that are pure
//! functions of world time.
//!
//! - Load a [`LifecycleConfig`] from JSON, or build stages in code
//! - [`start`](LifecycleAnimator::start) the animator and [`tick`](LifecycleAnimator::tick) it
//!   once per game tick
//! - Sample [`FrameModifiers`] per rendered frame
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod channels;
pub(crate) mod config;
pub(crate) mod frame;
pub(crate) mod lifecycle;

pub use crate::foundation::core::{Axis, Rgb, TICKS_PER_SECOND, ticks_to_secs, world_time};
pub use crate::foundation::error::{FieldFxError, FieldFxResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::Lerp;
pub use crate::animation::shape::{ShapeChannel, ShapeModifier};

pub use crate::channels::color_cycle::{ColorCycleConfig, ColorSample};
pub use crate::channels::precession::PrecessionConfig;
pub use crate::channels::pulse::{AlphaPulseConfig, PulseConfig};
pub use crate::channels::ray::flow::{
    FlickerFlow, LengthFlow, RayFlowConfig, RayFlowDef, TravelFlow,
};
pub use crate::channels::ray::motion::{RayMotion, RayMotionDef, RayMotionSample};
pub use crate::channels::ray::twist::{RayTwist, RayTwistDef};
pub use crate::channels::ray::wiggle::{RayWiggle, RayWiggleDef, WiggleParams};
pub use crate::channels::spin::SpinConfig;
pub use crate::channels::wave::WaveConfig;
pub use crate::channels::waveform::Waveform;
pub use crate::channels::wobble::WobbleConfig;
pub use crate::channels::{Animation, Channel};

pub use crate::config::LifecycleConfig;
pub use crate::frame::FrameModifiers;
pub use crate::lifecycle::animator::{LifecycleAnimator, LifecycleBuilder};
pub use crate::lifecycle::presets;
pub use crate::lifecycle::stage::{StageBuilder, StageConfig, StageTransition};
