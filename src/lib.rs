//! Limelight actor engine library.
//!
//! A per-entity update engine for a 2D scene graph: sprite-frame animation
//! with large-step catch-up, four property tweens with completion messages,
//! and the name/tag indexes gameplay code uses to address entities. This
//! module exposes the engine's ECS components, resources, systems, and
//! events for use in integration tests and as a reusable library.

pub mod actor;
pub mod components;
pub mod events;
pub mod factory;
pub mod math;
pub mod resources;
pub mod systems;
