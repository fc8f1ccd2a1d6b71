use rapier2d::prelude::*;
use std::sync::Mutex;

/// Collision layers for filtering what objects can collide with each other
///
/// Contact queries and colliders both speak in these layers: a ground check
/// only sees colliders whose membership is inside the configured mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// Default layer - interacts with everything
    Default = 0b0000_0001,

    /// Player characters
    Player = 0b0000_0010,

    /// Walkable ground, platforms and ceilings
    Ground = 0b0000_0100,

    /// Hazards (spikes, lava, etc.)
    Hazard = 0b0000_1000,

    /// Sensors (trigger zones, etc.) - don't cause physical collision
    Sensor = 0b0001_0000,
}

impl CollisionLayer {
    /// The bit this layer occupies in a `LayerMask`
    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self.bit());

        let filter = match self {
            // Characters stand on ground and touch hazards/sensors, never each other
            CollisionLayer::Player => LayerMask::from_layers(&[
                CollisionLayer::Ground,
                CollisionLayer::Hazard,
                CollisionLayer::Sensor,
            ]),

            CollisionLayer::Ground => LayerMask::from_layers(&[
                CollisionLayer::Default,
                CollisionLayer::Player,
                CollisionLayer::Ground,
            ]),

            CollisionLayer::Hazard => LayerMask::from_layers(&[CollisionLayer::Player]),

            CollisionLayer::Sensor | CollisionLayer::Default => LayerMask::ALL,
        };

        InteractionGroups::new(memberships, filter.to_group())
    }
}

/// Bit set of collision layers, used to filter contact queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Matches nothing
    pub const NONE: Self = Self(0);

    /// Matches every layer
    pub const ALL: Self = Self(u32::MAX);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn from_layers(layers: &[CollisionLayer]) -> Self {
        Self(layers.iter().fold(0, |bits, layer| bits | layer.bit()))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, layer: CollisionLayer) -> bool {
        self.0 & layer.bit() != 0
    }

    pub fn union(self, other: LayerMask) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Convert to a rapier group bit set
    pub fn to_group(self) -> Group {
        Group::from_bits_truncate(self.0)
    }

    /// Interaction groups for a scene query that only sees this mask
    pub fn to_query_groups(self) -> InteractionGroups {
        InteractionGroups::new(Group::ALL, self.to_group())
    }
}

impl From<CollisionLayer> for LayerMask {
    fn from(layer: CollisionLayer) -> Self {
        Self(layer.bit())
    }
}

/// Contact event reported by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Two colliders started touching
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },

    /// Two colliders stopped touching
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },
}

impl CollisionEvent {
    /// Both colliders involved in the event
    pub fn colliders(&self) -> (ColliderHandle, ColliderHandle) {
        match *self {
            Self::Started {
                collider1,
                collider2,
            }
            | Self::Stopped {
                collider1,
                collider2,
            } => (collider1, collider2),
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Queue for storing collision events during a physics step
///
/// rapier hands events to `&self`, so the buffer sits behind a mutex.
#[derive(Debug, Default)]
pub struct CollisionEventQueue {
    events: Mutex<Vec<CollisionEvent>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::with_capacity(16)),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Snapshot of the events from the last step
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_layer_bits() {
        // Ensure each layer has a unique bit
        let layers = [
            CollisionLayer::Default,
            CollisionLayer::Player,
            CollisionLayer::Ground,
            CollisionLayer::Hazard,
            CollisionLayer::Sensor,
        ];

        for (i, layer1) in layers.iter().enumerate() {
            for (j, layer2) in layers.iter().enumerate() {
                if i != j {
                    assert_ne!(layer1.bit(), layer2.bit(), "Layers must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_player_doesnt_collide_with_player() {
        let groups = CollisionLayer::Player.to_interaction_groups();
        assert!(
            !groups.filter.contains(groups.memberships),
            "Players should not collide with other players"
        );
    }

    #[test]
    fn test_player_collides_with_ground() {
        let player = CollisionLayer::Player.to_interaction_groups();
        let ground = CollisionLayer::Ground.to_interaction_groups();
        assert!(player.test(ground));
    }

    #[test]
    fn test_mask_membership() {
        let mask = LayerMask::from_layers(&[CollisionLayer::Ground, CollisionLayer::Hazard]);
        assert!(mask.contains(CollisionLayer::Ground));
        assert!(mask.contains(CollisionLayer::Hazard));
        assert!(!mask.contains(CollisionLayer::Player));
        assert!(LayerMask::NONE.is_empty());
        assert!(LayerMask::ALL.contains(CollisionLayer::Sensor));
    }

    #[test]
    fn test_mask_union() {
        let mask = LayerMask::from(CollisionLayer::Ground).union(CollisionLayer::Player.into());
        assert_eq!(
            mask.bits(),
            CollisionLayer::Ground.bit() | CollisionLayer::Player.bit()
        );
    }

    #[test]
    fn test_event_queue_clear() {
        let queue = CollisionEventQueue::new();
        assert!(queue.events().is_empty());
        queue.push(CollisionEvent::Started {
            collider1: ColliderHandle::invalid(),
            collider2: ColliderHandle::invalid(),
        });
        assert_eq!(queue.events().len(), 1);
        assert!(queue.events()[0].is_started());
        queue.clear();
        assert!(queue.events().is_empty());
    }

    #[test]
    fn test_query_groups_respect_mask() {
        let query = LayerMask::from(CollisionLayer::Ground).to_query_groups();
        assert!(query.test(CollisionLayer::Ground.to_interaction_groups()));
        assert!(!query.test(CollisionLayer::Player.to_interaction_groups()));
    }
}
