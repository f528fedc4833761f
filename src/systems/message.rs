//! Actor message queue maintenance.
//!
//! Completion messages ride the world's buffered queue
//! (`Messages<ActorMessage>`). The queue is double-buffered: messages
//! written on one tick become readable on the next and are dropped one
//! update later, so [`update_actor_messages`] must run exactly once per
//! tick for readers to see everything exactly once.
//!
//! # Related
//!
//! - [`crate::events::message::ActorMessage`] – the message type
//! - [`crate::systems::tween::update_actor_tweens`] – the writer

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::message::ActorMessage;

/// Advance the buffered queue for [`ActorMessage`].
///
/// Schedule this after the systems that write messages.
pub fn update_actor_messages(mut messages: ResMut<Messages<ActorMessage>>) {
    messages.update();
}

/// Log every actor message that flows through the queue.
///
/// Debug tap for scene wiring; gameplay readers subscribe with their own
/// `MessageReader<ActorMessage>` systems.
pub fn log_actor_messages(mut reader: MessageReader<ActorMessage>) {
    for message in reader.read() {
        debug!("actor message {:?} from {:?}", message.name, message.sender);
    }
}
