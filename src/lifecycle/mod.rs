//! Stage-based lifecycles: stage definitions, the animator that walks them and presets.

pub(crate) mod animator;
pub mod presets;
pub(crate) mod stage;
