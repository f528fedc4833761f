//! Limelight demo entry point.
//!
//! A headless actor engine demo built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **serde_json** archetype definitions driving the actor factory
//!
//! The scene spawns a handful of walkers from archetypes, runs their walk
//! cycle as a one-shot animation chained into an idle ping-pong by an
//! observer, and glides them across the map with tweens whose completion
//! messages land in the log.
//!
//! # Main Loop
//!
//! 1. Load configuration and archetype definitions
//! 2. Build the ECS world, resources, and observers
//! 3. Tick the update schedule at a fixed delta for `--ticks` frames
//! 4. Log a summary of names and tags at the end
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ticks 240
//! ```

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use std::path::PathBuf;

use limelight::actor::{change_actor_color_to, move_actor_to, rotate_actor_to};
use limelight::components::animation::{AnimationKind, SpriteAnimation};
use limelight::components::mapposition::MapPosition;
use limelight::components::sprite::SpriteFrames;
use limelight::events::animation::{log_animation_finished, AnimationFinished};
use limelight::events::message::ActorMessage;
use limelight::factory::ActorFactory;
use limelight::math::Color;
use limelight::resources::engineconfig::EngineConfig;
use limelight::resources::nameregistry::NameRegistry;
use limelight::resources::tagindex::TagIndex;
use limelight::resources::texturecache::{FsProbeLoader, TextureCache};
use limelight::resources::worldtime::WorldTime;
use limelight::systems::animation::update_sprite_animations;
use limelight::systems::message::{log_actor_messages, update_actor_messages};
use limelight::systems::time::update_world_time;
use limelight::systems::tween::update_actor_tweens;

/// Limelight actor engine
#[derive(Parser)]
#[command(version, about = "Headless demo of the limelight actor engine")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path to the archetype definitions; overrides the configured one.
    #[arg(long, value_name = "PATH")]
    archetypes: Option<PathBuf>,

    /// Number of fixed-step ticks to simulate.
    #[arg(long, default_value_t = 240)]
    ticks: u32,

    /// Tick delta in seconds; defaults to the configured tick rate.
    #[arg(long)]
    dt: Option<f32>,
}

/// Observer that chains a finished walk cycle into an idle ping-pong.
fn chain_idle_after_walk(
    trigger: On<AnimationFinished>,
    mut query: Query<(&mut SpriteAnimation, &mut SpriteFrames)>,
) {
    let event = trigger.event();
    if event.name != "walk_done" {
        return;
    }
    if let Ok((mut anim, mut frames)) = query.get_mut(event.entity) {
        anim.play(&mut frames, 0.12, AnimationKind::PingPong, 0, 3, Some("idle"));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = EngineConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let dt = cli.dt.unwrap_or_else(|| config.tick_delta()).max(0.0);
    let archetype_path = cli
        .archetypes
        .unwrap_or_else(|| config.archetype_path.clone());

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(NameRegistry::default());
    world.insert_resource(TagIndex::default());
    world.insert_resource(TextureCache::new(Box::new(FsProbeLoader::default())));
    world.init_resource::<Messages<ActorMessage>>();

    world.spawn(Observer::new(log_animation_finished));
    world.spawn(Observer::new(chain_idle_after_walk));
    // Ensure observers are registered before any system can trigger events.
    world.flush();

    // --------------- Factory + scene ---------------
    let mut factory = ActorFactory::with_default_constructor();
    if let Err(e) = factory.load_json(&archetype_path) {
        log::error!("{e}");
        std::process::exit(1);
    }

    for i in 0..3 {
        match factory.spawn(&mut world, "walker") {
            Ok(entity) => {
                let target = Vec2::new(
                    120.0 + fastrand::f32() * 40.0 - 20.0,
                    i as f32 * 24.0 + fastrand::f32() * 8.0,
                );
                move_actor_to(
                    &mut world,
                    entity,
                    target,
                    2.0 + i as f32 * 0.5,
                    Some("arrived"),
                );
            }
            Err(e) => log::warn!("skipping walker: {e}"),
        }
    }

    match factory.spawn(&mut world, "title_card") {
        Ok(entity) => {
            change_actor_color_to(&mut world, entity, Color::WHITE, 1.5, Some("title_faded"));
            rotate_actor_to(&mut world, entity, 360.0, 3.0, Some("title_spun"));
        }
        Err(e) => log::warn!("skipping title card: {e}"),
    }

    // --------------- Update schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_sprite_animations);
    update.add_systems(update_actor_tweens.after(update_sprite_animations));
    update.add_systems(
        (update_actor_messages, log_actor_messages)
            .chain()
            .after(update_actor_tweens),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    for _ in 0..cli.ticks {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame
    }

    // --------------- Summary ---------------
    let time = *world.resource::<WorldTime>();
    log::info!(
        "simulated {} ticks, {:.2}s world time",
        time.frame_count,
        time.elapsed
    );
    log::info!(
        "{} walkers still tagged",
        world.resource::<TagIndex>().count("walker")
    );

    let names: Vec<String> = world
        .resource::<NameRegistry>()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    log::info!("registered names: {names:?}");

    let mut query = world.query::<(&MapPosition, &SpriteAnimation, &SpriteFrames)>();
    for (position, anim, frames) in query.iter(&world) {
        log::info!(
            "actor at ({:.1}, {:.1}) kind={:?} frame={}",
            position.pos.x,
            position.pos.y,
            anim.kind,
            frames.current
        );
    }
}
