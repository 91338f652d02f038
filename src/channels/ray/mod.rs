//! Channels that animate individual rays of a ray-burst primitive.
//!
//! Each channel answers one question for ray `index` of `count`: which part is visible
//! ([`flow`]), where it sits ([`motion`]), how it bends ([`wiggle`]) and how it rolls
//! ([`twist`]). They never see each other's output; the renderer combines them.

pub(crate) mod flow;
pub(crate) mod motion;
pub(crate) mod twist;
pub(crate) mod wiggle;
