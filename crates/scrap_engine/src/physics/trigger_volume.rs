//! Trigger volume capability
//!
//! A trigger volume records which objects overlap it. Overlap reports come
//! from an external physics backend (or tests); gameplay components drain the
//! resulting enter/exit events.

use std::any::Any;

use crate::scene::{Component, GameObjectKey};

use super::collider::Collider;

/// Overlap transition reported by a trigger volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// An object started overlapping the volume
    Entered(GameObjectKey),

    /// An object stopped overlapping the volume
    Exited(GameObjectKey),
}

/// Overlap-sensing capability on a game object
#[derive(Debug, Default)]
pub struct TriggerVolume {
    colliders: Vec<Collider>,
    overlapping: Vec<GameObjectKey>,
    events: Vec<TriggerEvent>,
}

impl TriggerVolume {
    /// Create an empty trigger volume
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a collider shape
    pub fn add_collider(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Attached collider shapes
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Report that `other` started overlapping this volume
    pub fn begin_overlap(&mut self, other: GameObjectKey) {
        if !self.overlapping.contains(&other) {
            self.overlapping.push(other);
            self.events.push(TriggerEvent::Entered(other));
        }
    }

    /// Report that `other` stopped overlapping this volume
    pub fn end_overlap(&mut self, other: GameObjectKey) {
        let before = self.overlapping.len();
        self.overlapping.retain(|&key| key != other);
        if self.overlapping.len() != before {
            self.events.push(TriggerEvent::Exited(other));
        }
    }

    /// Objects currently overlapping the volume
    pub fn overlapping(&self) -> &[GameObjectKey] {
        &self.overlapping
    }

    /// Take the pending enter/exit events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<TriggerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Component for TriggerVolume {
    fn type_name(&self) -> &'static str {
        "TriggerVolume"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn test_enter_exit_events() {
        let mut scene = Scene::new();
        let visitor = scene.create_game_object("visitor");

        let mut volume = TriggerVolume::new();
        volume.begin_overlap(visitor);
        volume.end_overlap(visitor);

        let events = volume.drain_events();
        assert_eq!(
            events,
            vec![TriggerEvent::Entered(visitor), TriggerEvent::Exited(visitor)]
        );
        assert!(volume.drain_events().is_empty());
    }

    #[test]
    fn test_duplicate_enter_ignored() {
        let mut scene = Scene::new();
        let visitor = scene.create_game_object("visitor");

        let mut volume = TriggerVolume::new();
        volume.begin_overlap(visitor);
        volume.begin_overlap(visitor);

        assert_eq!(volume.overlapping().len(), 1);
        assert_eq!(volume.drain_events().len(), 1);
    }

    #[test]
    fn test_exit_without_enter_is_noop() {
        let mut scene = Scene::new();
        let visitor = scene.create_game_object("visitor");

        let mut volume = TriggerVolume::new();
        volume.end_overlap(visitor);
        assert!(volume.drain_events().is_empty());
    }
}
