//! Archetype-driven actor construction.
//!
//! An archetype is a named list of [`FactoryCommand`]s loaded from JSON.
//! [`ActorFactory::spawn`] runs its constructor callback to produce a bare
//! entity, then applies the archetype's commands to it in order. The
//! constructor is pluggable so hosts decide what a bare entity looks like;
//! the default builds a plain [`ActorBundle`](crate::actor::ActorBundle)
//! with an auto-assigned name.
//!
//! # Archetype File Format
//!
//! ```json
//! {
//!   "walker": [
//!     { "op": "set_name", "name": "walker" },
//!     { "op": "set_position", "x": -40.0, "y": 0.0 },
//!     { "op": "load_sprite_frames", "first_file": "assets/frames/walk_001.png" },
//!     { "op": "play_animation", "delay": 0.1, "kind": "one_shot",
//!       "start_frame": 0, "end_frame": 3, "name": "walk_done" }
//!   ]
//! }
//! ```
//!
//! # Related
//!
//! - [`crate::actor`] – the helpers most commands delegate to
//! - [`crate::resources::texturecache::TextureCache`] – resolves sprite files

use std::path::Path;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::{self, spawn_actor};
use crate::components::animation::{AnimationKind, SpriteAnimation};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::size::Size;
use crate::components::sprite::SpriteFrames;
use crate::components::tint::Tint;
use crate::math::Color;
use crate::resources::texturecache::{ClampMode, FilterMode, TextureCache};

/// Errors from archetype loading and spawning.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("cannot read archetype file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bad archetype JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown archetype {0:?}")]
    UnknownArchetype(String),
}

/// One step applied to a freshly constructed actor.
///
/// The closed command set replaces free-form console strings: unknown
/// operations or malformed arguments are rejected at load time instead of
/// being silently skipped at spawn time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FactoryCommand {
    SetPosition {
        x: f32,
        y: f32,
    },
    SetRotation {
        degrees: f32,
    },
    SetSize {
        width: f32,
        height: f32,
    },
    SetColor {
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    },
    SetAlpha {
        alpha: f32,
    },
    SetName {
        name: String,
    },
    /// Comma/space separated tag list, lowercased on application.
    Tag {
        tags: String,
    },
    /// Load a single texture into frame 0.
    SetSprite {
        file: String,
    },
    /// Load a numbered sequence starting at `first_file`.
    LoadSpriteFrames {
        first_file: String,
    },
    PlayAnimation {
        delay: f32,
        kind: AnimationKind,
        start_frame: usize,
        end_frame: usize,
        #[serde(default)]
        name: Option<String>,
    },
}

/// Constructor callback producing the bare entity an archetype decorates.
pub type ActorConstructor = Box<dyn Fn(&mut World) -> Entity + Send + Sync>;

/// Registry of archetypes plus the constructor they run on.
pub struct ActorFactory {
    archetypes: FxHashMap<String, Vec<FactoryCommand>>,
    constructor: ActorConstructor,
}

impl ActorFactory {
    /// Factory whose bare entities come from `constructor`.
    pub fn new(constructor: ActorConstructor) -> Self {
        Self {
            archetypes: FxHashMap::default(),
            constructor,
        }
    }

    /// Factory building plain auto-named actors.
    pub fn with_default_constructor() -> Self {
        Self::new(Box::new(|world| spawn_actor(world, "")))
    }

    /// Register `commands` under `name`, replacing any previous definition.
    pub fn register(&mut self, name: impl Into<String>, commands: Vec<FactoryCommand>) {
        self.archetypes.insert(name.into(), commands);
    }

    pub fn has_archetype(&self, name: &str) -> bool {
        self.archetypes.contains_key(name)
    }

    pub fn archetype_count(&self) -> usize {
        self.archetypes.len()
    }

    /// Load archetype definitions from a JSON file mapping archetype names
    /// to command lists. Later definitions replace same-named earlier ones.
    /// Returns how many archetypes the file contained.
    pub fn load_json(&mut self, path: impl AsRef<Path>) -> Result<usize, FactoryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FactoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let defs: FxHashMap<String, Vec<FactoryCommand>> = serde_json::from_str(&text)?;
        let count = defs.len();
        for (name, commands) in defs {
            self.archetypes.insert(name, commands);
        }
        info!("loaded {count} archetypes from {}", path.display());
        Ok(count)
    }

    /// Construct a bare entity and apply `archetype`'s commands in order.
    pub fn spawn(&self, world: &mut World, archetype: &str) -> Result<Entity, FactoryError> {
        let commands = self
            .archetypes
            .get(archetype)
            .ok_or_else(|| FactoryError::UnknownArchetype(archetype.to_string()))?;
        let entity = (self.constructor)(world);
        for command in commands {
            apply_command(world, entity, command);
        }
        Ok(entity)
    }
}

fn apply_command(world: &mut World, entity: Entity, command: &FactoryCommand) {
    match command {
        FactoryCommand::SetPosition { x, y } => {
            if let Some(mut position) = world.get_mut::<MapPosition>(entity) {
                position.pos = Vec2::new(*x, *y);
            }
        }
        FactoryCommand::SetRotation { degrees } => {
            if let Some(mut rotation) = world.get_mut::<Rotation>(entity) {
                rotation.degrees = *degrees;
            }
        }
        FactoryCommand::SetSize { width, height } => {
            if let Some(mut size) = world.get_mut::<Size>(entity) {
                size.set(*width, *height);
            }
        }
        FactoryCommand::SetColor { r, g, b, a } => {
            if let Some(mut tint) = world.get_mut::<Tint>(entity) {
                tint.color = Color::rgba(*r, *g, *b, *a);
            }
        }
        FactoryCommand::SetAlpha { alpha } => {
            if let Some(mut tint) = world.get_mut::<Tint>(entity) {
                tint.set_alpha(*alpha);
            }
        }
        FactoryCommand::SetName { name } => {
            actor::set_actor_name(world, entity, name);
        }
        FactoryCommand::Tag { tags } => {
            actor::tag_actor(world, entity, tags);
        }
        FactoryCommand::SetSprite { file } => {
            world.resource_scope(|world, mut cache: Mut<TextureCache>| {
                if let Some(mut frames) = world.get_mut::<SpriteFrames>(entity) {
                    frames.set_sprite(
                        &mut cache,
                        file,
                        0,
                        ClampMode::default(),
                        FilterMode::default(),
                        false,
                    );
                }
            });
        }
        FactoryCommand::LoadSpriteFrames { first_file } => {
            world.resource_scope(|world, mut cache: Mut<TextureCache>| {
                if let Some(mut frames) = world.get_mut::<SpriteFrames>(entity) {
                    frames.load_frames(
                        &mut cache,
                        first_file,
                        ClampMode::default(),
                        FilterMode::default(),
                    );
                }
            });
        }
        FactoryCommand::PlayAnimation {
            delay,
            kind,
            start_frame,
            end_frame,
            name,
        } => {
            let mut query = world.query::<(&mut SpriteAnimation, &mut SpriteFrames)>();
            if let Ok((mut anim, mut frames)) = query.get_mut(world, entity) {
                anim.play(
                    &mut frames,
                    *delay,
                    *kind,
                    *start_frame,
                    *end_frame,
                    name.as_deref(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_deserialize_from_tagged_json() {
        let json = r#"[
            { "op": "set_position", "x": 1.0, "y": 2.0 },
            { "op": "play_animation", "delay": 0.1, "kind": "loop",
              "start_frame": 0, "end_frame": 3 }
        ]"#;
        let commands: Vec<FactoryCommand> = serde_json::from_str(json).unwrap();
        assert_eq!(commands[0], FactoryCommand::SetPosition { x: 1.0, y: 2.0 });
        assert_eq!(
            commands[1],
            FactoryCommand::PlayAnimation {
                delay: 0.1,
                kind: AnimationKind::Loop,
                start_frame: 0,
                end_frame: 3,
                name: None,
            }
        );
    }

    #[test]
    fn unknown_op_is_rejected() {
        let json = r#"[ { "op": "explode", "radius": 4.0 } ]"#;
        assert!(serde_json::from_str::<Vec<FactoryCommand>>(json).is_err());
    }

    #[test]
    fn register_and_lookup() {
        let mut factory = ActorFactory::with_default_constructor();
        factory.register("crate", vec![FactoryCommand::SetSize {
            width: 2.0,
            height: 2.0,
        }]);
        assert!(factory.has_archetype("crate"));
        assert!(!factory.has_archetype("barrel"));
        assert_eq!(factory.archetype_count(), 1);
    }
}
