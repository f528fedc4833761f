//! ECS components for actors.
//!
//! This module groups all component types that can be attached to actors in
//! the world. Components define data such as position, size, tint, the
//! sprite frame table and the animation/tween state that drives it.
//!
//! Submodules overview:
//! - [`actorname`] – display name assigned through the name registry
//! - [`animation`] – frame-stepping state machine for sprite animations
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rotation`] – rotation angle in degrees
//! - [`size`] – 2D size in world units, never negative
//! - [`sprite`] – frame table of texture handles plus the current frame
//! - [`tags`] – entity-local mirror of the global tag index
//! - [`tint`] – color modulation, with opacity in the alpha channel
//! - [`tween`] – animated interpolation of position, rotation, color and size

pub mod actorname;
pub mod animation;
pub mod mapposition;
pub mod rotation;
pub mod size;
pub mod sprite;
pub mod tags;
pub mod tint;
pub mod tween;
