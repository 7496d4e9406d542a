use crate::game::types::{Body, RemoteBody};
use dashmap::DashMap;

/// Channel that mirrors bodies between independent simulations.
///
/// Every simulation publishes its own player once per tick and reads everyone
/// else's as read-only [`RemoteBody`] values.
pub trait NetworkBoundary: Send + Sync {
    /// Every published body except `local_id`.
    fn remote_bodies(&self, local_id: &str) -> Vec<RemoteBody>;
    fn publish(&self, body: &Body);
    fn remove(&self, id: &str);
}

/// In-process roster shared by every session of the server.
#[derive(Debug, Default)]
pub struct SharedRoster {
    bodies: DashMap<String, RemoteBody>,
}

impl SharedRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
impl SharedRoster {
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bodies.contains_key(id)
    }
}

impl NetworkBoundary for SharedRoster {
    fn remote_bodies(&self, local_id: &str) -> Vec<RemoteBody> {
        let mut bodies: Vec<RemoteBody> = self
            .bodies
            .iter()
            .filter(|entry| entry.key() != local_id)
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order depends on sharding.
        bodies.sort_by(|a, b| a.id.cmp(&b.id));
        bodies
    }

    fn publish(&self, body: &Body) {
        if body.id.is_empty() {
            return;
        }
        self.bodies
            .insert(body.id.clone(), RemoteBody::from_body(body));
    }

    fn remove(&self, id: &str) {
        if self.bodies.remove(id).is_some() {
            tracing::debug!(body_id = id, "left roster");
        }
    }
}
