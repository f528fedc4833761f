//! Actor completion messages.
//!
//! Tweens announce completion by broadcasting the message name they were
//! started with. Messages ride the world's buffered queue
//! (`Messages<ActorMessage>`), so any number of systems can read them on
//! the tick after they were written; the queue is advanced once per tick by
//! [`update_actor_messages`](crate::systems::message::update_actor_messages).
//!
//! # Related
//!
//! - [`crate::systems::tween::update_actor_tweens`] – the writer
//! - [`crate::systems::message`] – queue maintenance and a logging reader

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// Broadcast when a named tween completes.
///
/// `name` is the completion message registered when the tween started;
/// `sender` is the actor that finished. Broadcast at most once per started
/// tween.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ActorMessage {
    /// The completion message name.
    pub name: String,
    /// The actor that finished.
    pub sender: Entity,
}
