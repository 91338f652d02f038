use crate::{
    animation::{ease::Ease, shape::ShapeModifier},
    channels::Animation,
    foundation::core::normalize_name,
};

/// How a stage hands over to the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StageTransition {
    /// Advance once the stage has run for its duration. A zero duration never advances.
    #[default]
    Time,
    /// Wait for [`LifecycleAnimator::trigger_transition`](crate::LifecycleAnimator::trigger_transition).
    Manual,
    /// Wait for [`LifecycleAnimator::fire_event`](crate::LifecycleAnimator::fire_event).
    Event,
    /// Stay until moved by explicit navigation.
    Hold,
    /// Pass straight through on the tick the stage is entered.
    Chain,
}

impl StageTransition {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Manual => "manual",
            Self::Event => "event",
            Self::Hold => "hold",
            Self::Chain => "chain",
        }
    }

    /// Parse a transition name. Unknown names fall back to `Time`.
    pub fn from_name(raw: &str) -> Self {
        match normalize_name(raw).as_str() {
            "time" | "timed" => Self::Time,
            "manual" => Self::Manual,
            "event" => Self::Event,
            "hold" => Self::Hold,
            "chain" => Self::Chain,
            _ => {
                tracing::warn!(value = raw, "unknown stage transition, using time");
                Self::Time
            }
        }
    }
}

impl From<String> for StageTransition {
    fn from(raw: String) -> Self {
        Self::from_name(&raw)
    }
}

impl From<StageTransition> for String {
    fn from(t: StageTransition) -> Self {
        t.name().to_owned()
    }
}

/// One stage of a lifecycle: how long it runs, how it exits and what it does to the primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Identifier used by explicit navigation.
    pub id: String,
    /// Length in ticks; `0` means indefinite. Ignored by `Chain`, `Event` and `Hold`.
    pub duration: u32,
    /// Exit policy.
    pub transition: StageTransition,
    /// Shape curves driven by this stage's progress.
    pub shape: ShapeModifier,
    /// Replaces the lifecycle's base animation while this stage is current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    /// Whether the primitive is drawn during this stage.
    pub visible: bool,
    /// Stage to go to instead of the sequential successor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_stage: Option<String>,
    /// For `Event` stages, the only event name that advances; unset accepts any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl StageConfig {
    /// Start building a stage.
    pub fn builder(id: impl Into<String>) -> StageBuilder {
        StageBuilder::new(id)
    }

    /// Timed grow-in from nothing.
    pub fn spawn(duration: u32) -> Self {
        Self::builder("spawn")
            .duration(duration)
            .shape(ShapeModifier::grow(Ease::OutBack).with_alpha(0.0, 1.0, Ease::OutQuad))
            .build()
    }

    /// Indefinite steady state.
    pub fn active() -> Self {
        Self::builder("active")
            .transition(StageTransition::Hold)
            .build()
    }

    /// Timed shrink-out to nothing.
    pub fn despawn(duration: u32) -> Self {
        Self::builder("despawn")
            .duration(duration)
            .shape(ShapeModifier::shrink(Ease::InBack).with_alpha(1.0, 0.0, Ease::InQuad))
            .build()
    }

    /// Fraction of the stage completed after `elapsed` ticks. Indefinite stages report `1`.
    pub fn progress(&self, elapsed: u64) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (elapsed as f64 / f64::from(self.duration)).min(1.0) as f32
    }

    /// `true` once a timed stage has run its full duration.
    pub fn is_complete(&self, elapsed: u64) -> bool {
        self.transition == StageTransition::Time
            && self.duration > 0
            && elapsed >= u64::from(self.duration)
    }

    /// `true` when the stage only ends through outside action.
    pub fn is_indefinite(&self) -> bool {
        match self.transition {
            StageTransition::Time => self.duration == 0,
            StageTransition::Chain => false,
            StageTransition::Manual | StageTransition::Event | StageTransition::Hold => true,
        }
    }

    /// Whether `name` may advance this stage.
    pub fn accepts_event(&self, name: &str) -> bool {
        self.transition == StageTransition::Event
            && self.event.as_deref().is_none_or(|e| e == name)
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        StageBuilder::new(String::new()).build()
    }
}

/// Builder for [`StageConfig`].
#[derive(Clone, Debug)]
pub struct StageBuilder {
    stage: StageConfig,
}

impl StageBuilder {
    /// A visible `Time` stage with no duration, identity shape and no animation override.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            stage: StageConfig {
                id: id.into(),
                duration: 0,
                transition: StageTransition::Time,
                shape: ShapeModifier::IDENTITY,
                animation: None,
                visible: true,
                next_stage: None,
                event: None,
            },
        }
    }

    /// Length in ticks.
    pub fn duration(mut self, ticks: u32) -> Self {
        self.stage.duration = ticks;
        self
    }

    /// Exit policy.
    pub fn transition(mut self, transition: StageTransition) -> Self {
        self.stage.transition = transition;
        self
    }

    /// Shape curves.
    pub fn shape(mut self, shape: ShapeModifier) -> Self {
        self.stage.shape = shape;
        self
    }

    /// Animation override for this stage.
    pub fn animation(mut self, animation: impl Into<Option<Animation>>) -> Self {
        self.stage.animation = animation.into();
        self
    }

    /// Visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.stage.visible = visible;
        self
    }

    /// Explicit successor.
    pub fn next_stage(mut self, id: impl Into<String>) -> Self {
        self.stage.next_stage = Some(id.into());
        self
    }

    /// Event filter; also switches the transition to `Event`.
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.stage.event = Some(name.into());
        self.stage.transition = StageTransition::Event;
        self
    }

    /// Finish.
    pub fn build(self) -> StageConfig {
        self.stage
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/stage.rs"]
mod tests;
