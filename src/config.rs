use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    channels::Animation,
    foundation::error::{FieldFxError, FieldFxResult},
    lifecycle::{animator::LifecycleAnimator, stage::StageConfig},
};

/// A lifecycle document as authored in JSON.
///
/// Every field is optional. Enum-like values (eases, axes, transitions, channel modes) are
/// lenient strings that fall back with a warning instead of failing the load.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Lifecycle identifier, used in logs.
    pub id: String,
    /// Wrap to the first stage after the last.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Animation used by stages without an override.
    pub animation: Animation,
    /// Stages in order.
    pub stages: Vec<StageConfig>,
}

impl LifecycleConfig {
    /// Parse a document from a JSON string.
    #[tracing::instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json_str(json: &str) -> FieldFxResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        tracing::debug!(id = %cfg.id, stages = cfg.stages.len(), "lifecycle config parsed");
        Ok(cfg)
    }

    /// Parse a document from a JSON reader.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> FieldFxResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        tracing::debug!(id = %cfg.id, stages = cfg.stages.len(), "lifecycle config parsed");
        Ok(cfg)
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FieldFxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FieldFxError::config(format!("open lifecycle JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check invariants the animator cannot repair.
    ///
    /// Duplicate stage ids are an error because navigation by id would be ambiguous. A
    /// `next_stage` naming no stage only earns a warning; the animator falls back to sequence.
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn validate(&self) -> FieldFxResult<()> {
        let mut seen = BTreeSet::new();
        for stage in &self.stages {
            if stage.id.is_empty() {
                return Err(FieldFxError::validation("stage id must be non-empty"));
            }
            if !seen.insert(stage.id.as_str()) {
                return Err(FieldFxError::validation(format!(
                    "duplicate stage id '{}'",
                    stage.id
                )));
            }
        }
        for stage in &self.stages {
            if let Some(next) = stage.next_stage.as_deref()
                && !seen.contains(next)
            {
                tracing::warn!(stage = %stage.id, next_stage = next, "next_stage names no stage");
            }
        }
        Ok(())
    }

    /// Build an unstarted animator over a copy of the stages.
    pub fn to_animator(&self) -> LifecycleAnimator {
        LifecycleAnimator::new(self.id.clone(), self.stages.clone(), self.looping)
    }

    /// Split into an unstarted animator and the base animation.
    pub fn into_animator(self) -> (LifecycleAnimator, Animation) {
        (
            LifecycleAnimator::new(self.id, self.stages, self.looping),
            self.animation,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
