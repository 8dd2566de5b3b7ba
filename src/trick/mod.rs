//! Trick resolution engine.
//!
//! A `Trick` sequences one play per seat in a fixed order and resolves the
//! winner by Wizard, trump and suit precedence (see `rules::precedence`).

mod resolution;

pub use resolution::{winning_play, Play, Trick, TrickPhase};
