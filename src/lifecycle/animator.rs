use crate::{
    channels::Animation,
    lifecycle::stage::{StageConfig, StageTransition},
};

/// Weight given to stages without a fixed length when estimating overall progress.
const INDEFINITE_STAGE_TICKS: u64 = 100;

/// Drives one primitive through its stages, one tick at a time.
///
/// The animator owns its stages and a cursor into them. It never fails: navigation to unknown
/// stages is logged and ignored, and the stage list is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct LifecycleAnimator {
    id: String,
    stages: Vec<StageConfig>,
    looping: bool,
    current_index: usize,
    stage_start_tick: u64,
    total_elapsed: u64,
    started: bool,
    complete: bool,
    paused: bool,
}

impl LifecycleAnimator {
    /// Animator over `stages`. An empty list gets a single [`StageConfig::active`] stage.
    pub fn new(id: impl Into<String>, stages: Vec<StageConfig>, looping: bool) -> Self {
        let stages = if stages.is_empty() {
            vec![StageConfig::active()]
        } else {
            stages
        };
        Self {
            id: id.into(),
            stages,
            looping,
            current_index: 0,
            stage_start_tick: 0,
            total_elapsed: 0,
            started: false,
            complete: false,
            paused: false,
        }
    }

    /// Start building an animator.
    pub fn builder(id: impl Into<String>) -> LifecycleBuilder {
        LifecycleBuilder::new(id)
    }

    /// Rewind to the first stage and start running. Calling it again restarts.
    pub fn start(&mut self) {
        self.current_index = 0;
        self.stage_start_tick = 0;
        self.total_elapsed = 0;
        self.started = true;
        self.complete = false;
        self.paused = false;
        tracing::debug!(animator = %self.id, stage = %self.stages[0].id, "lifecycle started");
    }

    /// Back to the state before [`start`](Self::start).
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.stage_start_tick = 0;
        self.total_elapsed = 0;
        self.started = false;
        self.complete = false;
        self.paused = false;
    }

    /// Stop ticking until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Undo [`pause`](Self::pause).
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance one tick.
    ///
    /// Does nothing unless started, running and not complete. A finished `Time` stage or any
    /// `Chain` stage moves on; `Chain` stages reached that way are passed through on the same
    /// tick.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.total_elapsed += 1;

        let stage = self.current_stage();
        let advance = match stage.transition {
            StageTransition::Chain => true,
            StageTransition::Time => stage.is_complete(self.stage_elapsed()),
            StageTransition::Manual | StageTransition::Event | StageTransition::Hold => false,
        };
        if advance && self.next_stage() {
            self.pass_through_chains();
        }
    }

    fn pass_through_chains(&mut self) {
        // one pass per stage at most, so a ring of chain stages cannot spin forever
        for _ in 0..self.stages.len() {
            if self.current_stage().transition != StageTransition::Chain {
                return;
            }
            if !self.next_stage() {
                return;
            }
        }
    }

    /// Move to the next stage.
    ///
    /// Follows the stage's `next_stage` id when it resolves, otherwise the sequential successor,
    /// otherwise wraps to the first stage when looping. With nowhere left to go the lifecycle
    /// completes and this returns `false`.
    pub fn next_stage(&mut self) -> bool {
        match self.resolve_next() {
            Some(index) => {
                self.enter(index);
                true
            }
            None => {
                self.complete = true;
                tracing::debug!(
                    animator = %self.id,
                    stage = %self.current_stage().id,
                    tick = self.total_elapsed,
                    "lifecycle complete"
                );
                false
            }
        }
    }

    fn resolve_next(&self) -> Option<usize> {
        let stage = self.current_stage();
        if let Some(target) = stage.next_stage.as_deref() {
            match self.index_of(target) {
                Some(index) => return Some(index),
                None => tracing::warn!(
                    animator = %self.id,
                    stage = %stage.id,
                    next_stage = target,
                    "next_stage does not name a stage, falling back to sequence"
                ),
            }
        }
        if self.current_index + 1 < self.stages.len() {
            Some(self.current_index + 1)
        } else if self.looping {
            Some(0)
        } else {
            None
        }
    }

    fn enter(&mut self, index: usize) {
        let from = self.current_index;
        self.current_index = index;
        self.stage_start_tick = self.total_elapsed;
        tracing::debug!(
            animator = %self.id,
            from = %self.stages[from].id,
            to = %self.stages[index].id,
            tick = self.total_elapsed,
            "stage transition"
        );
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.id == id)
    }

    /// Jump to the stage named `id`. Unknown ids are logged and leave the cursor alone.
    pub fn go_to_stage(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => self.jump(index),
            None => {
                tracing::warn!(animator = %self.id, stage = id, "go_to_stage: no such stage");
                false
            }
        }
    }

    /// Jump to stage `index`. Out of range indices are logged and ignored.
    pub fn go_to_stage_index(&mut self, index: usize) -> bool {
        if index >= self.stages.len() {
            tracing::warn!(
                animator = %self.id,
                index,
                stages = self.stages.len(),
                "go_to_stage_index: out of range"
            );
            return false;
        }
        self.jump(index)
    }

    fn jump(&mut self, index: usize) -> bool {
        self.enter(index);
        self.complete = false;
        true
    }

    /// Advance a `Manual` stage. Returns whether the trigger applied to the current stage.
    pub fn trigger_transition(&mut self) -> bool {
        if !self.started || self.complete {
            return false;
        }
        if self.current_stage().transition != StageTransition::Manual {
            tracing::debug!(
                animator = %self.id,
                stage = %self.current_stage().id,
                "trigger ignored by non-manual stage"
            );
            return false;
        }
        self.next_stage();
        true
    }

    /// Deliver event `name`. Advances an `Event` stage whose filter accepts it.
    pub fn fire_event(&mut self, name: &str) -> bool {
        if !self.started || self.complete || !self.current_stage().accepts_event(name) {
            return false;
        }
        tracing::debug!(animator = %self.id, event = name, "event accepted");
        self.next_stage();
        true
    }

    /// Lifecycle identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All stages in order.
    pub fn stages(&self) -> &[StageConfig] {
        &self.stages
    }

    /// Whether the lifecycle wraps after its last stage.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// The stage under the cursor.
    pub fn current_stage(&self) -> &StageConfig {
        &self.stages[self.current_index]
    }

    /// Index of the stage under the cursor.
    pub fn current_stage_index(&self) -> usize {
        self.current_index
    }

    /// Ticks spent in the current stage.
    pub fn stage_elapsed(&self) -> u64 {
        self.total_elapsed.saturating_sub(self.stage_start_tick)
    }

    /// Ticks since [`start`](Self::start), across stages and loops.
    pub fn total_elapsed(&self) -> u64 {
        self.total_elapsed
    }

    /// Progress through the current stage, `0..=1`.
    pub fn stage_progress(&self) -> f32 {
        self.current_stage().progress(self.stage_elapsed())
    }

    /// Rough progress through the whole lifecycle, `0..=1`.
    ///
    /// Stages are weighted by duration. Indefinite stages count as 100 ticks and chain stages
    /// count for nothing.
    pub fn lifecycle_progress(&self) -> f32 {
        if self.complete {
            return 1.0;
        }
        let weight = |s: &StageConfig| {
            if s.transition == StageTransition::Chain {
                0
            } else if s.is_indefinite() {
                INDEFINITE_STAGE_TICKS
            } else {
                u64::from(s.duration)
            }
        };
        let total: u64 = self.stages.iter().map(weight).sum();
        if total == 0 {
            return 0.0;
        }
        let done: u64 = self.stages[..self.current_index].iter().map(weight).sum::<u64>()
            + self.stage_elapsed().min(weight(self.current_stage()));
        (done as f64 / total as f64).clamp(0.0, 1.0) as f32
    }

    /// Scale multiplier from the current stage's shape.
    pub fn current_scale(&self) -> f32 {
        self.current_stage()
            .shape
            .compute_scale(self.stage_progress())
    }

    /// Length multiplier from the current stage's shape.
    pub fn current_length(&self) -> f32 {
        self.current_stage()
            .shape
            .compute_length(self.stage_progress())
    }

    /// Radius multiplier from the current stage's shape.
    pub fn current_radius(&self) -> f32 {
        self.current_stage()
            .shape
            .compute_radius(self.stage_progress())
    }

    /// Alpha multiplier from the current stage's shape.
    pub fn current_alpha(&self) -> f32 {
        self.current_stage()
            .shape
            .compute_alpha(self.stage_progress())
    }

    /// Whether the primitive should be drawn. Completed lifecycles are hidden.
    pub fn is_visible(&self) -> bool {
        !self.complete && self.current_stage().visible
    }

    /// The current stage's animation override.
    pub fn animation_override(&self) -> Option<&Animation> {
        self.current_stage().animation.as_ref()
    }

    /// The override if the current stage has one, otherwise `base`.
    pub fn effective_animation<'a>(&'a self, base: &'a Animation) -> &'a Animation {
        self.animation_override().unwrap_or(base)
    }

    /// Whether [`start`](Self::start) has been called since construction or reset.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the lifecycle ran off its last stage.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether ticking is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Started, not paused and not complete.
    pub fn is_running(&self) -> bool {
        self.started && !self.paused && !self.complete
    }
}

/// Builder for [`LifecycleAnimator`].
#[derive(Clone, Debug)]
pub struct LifecycleBuilder {
    id: String,
    stages: Vec<StageConfig>,
    looping: bool,
}

impl LifecycleBuilder {
    /// No stages, not looping.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stages: Vec::new(),
            looping: false,
        }
    }

    /// Append a stage.
    pub fn stage(mut self, stage: StageConfig) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append several stages.
    pub fn stages(mut self, stages: impl IntoIterator<Item = StageConfig>) -> Self {
        self.stages.extend(stages);
        self
    }

    /// Wrap to the first stage after the last.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Finish. Not started yet.
    pub fn build(self) -> LifecycleAnimator {
        LifecycleAnimator::new(self.id, self.stages, self.looping)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/animator.rs"]
mod tests;
