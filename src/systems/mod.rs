//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and trigger completion events
//! - [`message`] – advance the actor message queue, plus a logging reader
//! - [`time`] – update simulation time and delta
//! - [`tween`] – animate position, rotation, color and size over time

pub mod animation;
pub mod message;
pub mod time;
pub mod tween;
