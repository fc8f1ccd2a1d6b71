use glam::Vec2;
use rapier2d::parry::shape::Segment;
use rapier2d::prelude::*;

use super::collision::{CollisionEventQueue, LayerMask};
use crate::core::math::{from_vector, to_point, to_vector};
use crate::engine::host::{CollisionWorld, PhysicsBody, Transform};

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Fixed physics timestep (60 steps per second)
pub const PHYSICS_TIMESTEP: Real = 1.0 / 60.0;

/// Physics world that manages all physics simulation
///
/// This is the rapier-backed host for the character controller: it answers
/// the `PhysicsBody` and `CollisionWorld` contracts.
pub struct PhysicsWorld {
    /// Gravity vector (default: -9.81 m/s² in y-axis)
    gravity: Vector<Real>,

    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Query pipeline for line casts; refreshed after every mutation
    query_pipeline: QueryPipeline,

    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,

    /// Collision events from the last step
    collision_event_queue: CollisionEventQueue,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -9.81])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = PHYSICS_TIMESTEP;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.collision_event_queue.clear();

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.collision_event_queue,
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        let handle = self.rigid_body_set.insert(body);
        self.refresh_queries();
        handle
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        let handle =
            self.collider_set
                .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set);
        self.refresh_queries();
        handle
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
        self.refresh_queries();
    }

    /// Position of a body, or `None` for an unknown handle
    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set
            .get(handle)
            .map(|body| from_vector(body.translation()))
    }

    /// Teleport a body and zero its velocity
    pub fn set_body_position(&mut self, handle: RigidBodyHandle, position: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(to_vector(position), true);
            body.set_linvel(Vector::zeros(), true);
        }
        self.refresh_queries();
    }

    /// Copy a body's translation into the game object's transform
    pub fn sync_transform(&self, handle: RigidBodyHandle, transform: &mut Transform) {
        if let Some(position) = self.body_position(handle) {
            transform.position = position;
        }
    }

    /// Whether a collider's layer membership intersects `mask`
    pub fn collider_in_mask(&self, handle: ColliderHandle, mask: LayerMask) -> bool {
        self.collider_set
            .get(handle)
            .map(|collider| {
                collider
                    .collision_groups()
                    .memberships
                    .intersects(mask.to_group())
            })
            .unwrap_or(false)
    }

    /// True if `body` started touching a collider in `mask` during the last step
    pub fn body_started_touching(&self, body: RigidBodyHandle, mask: LayerMask) -> bool {
        self.collision_event_queue
            .events()
            .iter()
            .filter(|event| event.is_started())
            .any(|event| {
                let (a, b) = event.colliders();
                (self.collider_parent(a) == Some(body) && self.collider_in_mask(b, mask))
                    || (self.collider_parent(b) == Some(body) && self.collider_in_mask(a, mask))
            })
    }

    fn collider_parent(&self, handle: ColliderHandle) -> Option<RigidBodyHandle> {
        self.collider_set.get(handle).and_then(|c| c.parent())
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }

    /// Rebuild the query acceleration structure from the current sets
    fn refresh_queries(&mut self) {
        self.query_pipeline
            .update(&self.rigid_body_set, &self.collider_set);
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsBody for PhysicsWorld {
    type Handle = RigidBodyHandle;

    fn contains_body(&self, body: RigidBodyHandle) -> bool {
        self.rigid_body_set.contains(body)
    }

    fn linear_velocity(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set
            .get(body)
            .map(|body| from_vector(body.linvel()))
    }

    fn set_linear_velocity(&mut self, body: RigidBodyHandle, velocity: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(body) {
            body.set_linvel(to_vector(velocity), true);
        }
    }

    fn gravity_scale(&self, body: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set.get(body).map(|body| body.gravity_scale())
    }

    fn set_gravity_scale(&mut self, body: RigidBodyHandle, scale: f32) {
        if let Some(body) = self.rigid_body_set.get_mut(body) {
            body.set_gravity_scale(scale, true);
        }
    }

    fn set_rotation_locked(&mut self, body: RigidBodyHandle, locked: bool) {
        if let Some(body) = self.rigid_body_set.get_mut(body) {
            body.lock_rotations(locked, true);
        }
    }

    fn is_rotation_locked(&self, body: RigidBodyHandle) -> Option<bool> {
        self.rigid_body_set
            .get(body)
            .map(|body| body.is_rotation_locked())
    }
}

impl CollisionWorld for PhysicsWorld {
    fn line_intersects_any(&self, a: Vec2, b: Vec2, mask: LayerMask) -> bool {
        let segment = Segment::new(to_point(a), to_point(b));
        let filter = QueryFilter::default().groups(mask.to_query_groups());

        self.query_pipeline
            .intersection_with_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &Isometry::identity(),
                &segment,
                filter,
            )
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use crate::engine::physics::CollisionLayer;

    fn world_with_floor() -> (PhysicsWorld, RigidBodyHandle) {
        let mut world = PhysicsWorld::new();
        // Floor top surface at y = 0.5
        let floor = world.add_rigid_body(presets::ground_body(0.0, 0.0));
        world.add_collider(presets::ground_collider(20.0, 1.0), floor);
        (world, floor)
    }

    #[test]
    fn test_line_hits_ground_layer() {
        let (world, _) = world_with_floor();
        let ground = LayerMask::from(CollisionLayer::Ground);

        assert!(world.line_intersects_any(Vec2::new(-0.5, 0.4), Vec2::new(0.5, 0.4), ground));
        assert!(!world.line_intersects_any(Vec2::new(-0.5, 0.6), Vec2::new(0.5, 0.6), ground));
    }

    #[test]
    fn test_line_ignores_layers_outside_mask() {
        let (world, _) = world_with_floor();
        let players_only = LayerMask::from(CollisionLayer::Player);

        assert!(!world.line_intersects_any(
            Vec2::new(-0.5, 0.4),
            Vec2::new(0.5, 0.4),
            players_only
        ));
        assert!(!world.line_intersects_any(
            Vec2::new(-0.5, 0.4),
            Vec2::new(0.5, 0.4),
            LayerMask::NONE
        ));
    }

    #[test]
    fn test_line_sees_colliders_added_without_step() {
        let mut world = PhysicsWorld::new();
        let ground = LayerMask::from(CollisionLayer::Ground);
        assert!(!world.line_intersects_any(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), ground));

        let floor = world.add_rigid_body(presets::ground_body(0.0, 0.0));
        world.add_collider(presets::ground_collider(4.0, 1.0), floor);
        assert!(world.line_intersects_any(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), ground));
    }

    #[test]
    fn test_physics_body_contract() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::character_body(0.0, 5.0));

        assert!(world.contains_body(body));
        world.set_linear_velocity(body, Vec2::new(3.0, -1.0));
        assert_eq!(world.linear_velocity(body), Some(Vec2::new(3.0, -1.0)));

        world.set_gravity_scale(body, 2.5);
        assert_eq!(world.gravity_scale(body), Some(2.5));

        assert_eq!(world.is_rotation_locked(body), Some(false));
        world.set_rotation_locked(body, true);
        assert_eq!(world.is_rotation_locked(body), Some(true));
    }

    #[test]
    fn test_removed_body_is_unknown() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::character_body(0.0, 0.0));
        world.remove_rigid_body(body);

        assert!(!world.contains_body(body));
        assert_eq!(world.linear_velocity(body), None);
        assert_eq!(world.gravity_scale(body), None);
    }

    #[test]
    fn test_sync_transform_follows_body() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::character_body(1.0, 2.0));
        let mut transform = Transform::default();

        world.sync_transform(body, &mut transform);
        assert_eq!(transform.position, Vec2::new(1.0, 2.0));

        world.set_body_position(body, Vec2::new(-4.0, 0.5));
        world.sync_transform(body, &mut transform);
        assert_eq!(transform.position, Vec2::new(-4.0, 0.5));
    }

    #[test]
    fn test_gravity_pulls_body_down() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::character_body(0.0, 10.0));
        // Mass comes from the collider; a bare dynamic body does not fall
        world.add_collider(presets::character_collider(1.0, 1.8), body);

        world.step();

        let velocity = world.linear_velocity(body).unwrap();
        assert!(velocity.y < 0.0);
        assert!((velocity.y - world.gravity().y * world.timestep()).abs() < 1e-3);
    }

    #[test]
    fn test_hazard_contact_is_reported() {
        let mut world = PhysicsWorld::new();
        let hazard = world.add_rigid_body(presets::ground_body(0.0, 0.0));
        world.add_collider(presets::hazard_collider(4.0, 4.0), hazard);

        let character = world.add_rigid_body(presets::character_body(0.0, 0.0));
        world.add_collider(presets::character_collider(1.0, 2.0), character);

        world.step();

        assert!(world.body_started_touching(character, CollisionLayer::Hazard.into()));
        assert!(!world.body_started_touching(character, CollisionLayer::Ground.into()));
    }
}
