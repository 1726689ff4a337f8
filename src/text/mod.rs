//! Text utilities shared by the local and web summarization paths.

pub mod frequency;
pub mod normalize;
pub mod sentences;
