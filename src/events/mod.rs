//! Event types and observers used by the engine.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`animation`] – one-shot animation completion, triggered on observers
//! - [`message`] – named completion messages broadcast by tweens
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod animation;
pub mod message;
