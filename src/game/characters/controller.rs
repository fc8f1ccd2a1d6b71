// 2D platformer character controller

use glam::Vec2;
use log::{debug, info, warn};
use std::fmt::Debug;

use crate::engine::host::{CollisionWorld, LineSegment, PhysicsBody, Transform};
use crate::engine::input::InputService;
use crate::engine::physics::{DebugLines, DEBUG_BLUE};

use super::animation::Animator;
use super::config::CharacterConfig;
use super::error::ControllerError;
use super::facing::Facing;
use super::state::{AnimationState, LifeState};

/// Builds a controller once both host handles are known
pub struct CharacterControllerBuilder<H, A> {
    config: CharacterConfig,
    body: Option<H>,
    animator: Option<A>,
}

impl<H: Copy + Debug, A: Animator> CharacterControllerBuilder<H, A> {
    /// Bind the physics body the controller drives
    pub fn body(mut self, body: H) -> Self {
        self.body = Some(body);
        self
    }

    /// Bind the animator the controller issues clips to
    pub fn animator(mut self, animator: A) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Validate the config and check the body exists in `world`
    pub fn build<W>(self, world: &W) -> Result<CharacterController2D<H, A>, ControllerError>
    where
        W: PhysicsBody<Handle = H>,
    {
        self.config.validate()?;
        let body = self.body.ok_or(ControllerError::MissingBody)?;
        let animator = self.animator.ok_or(ControllerError::MissingAnimator)?;

        if !world.contains_body(body) {
            return Err(ControllerError::BodyNotFound(format!("{:?}", body)));
        }

        Ok(CharacterController2D {
            facing: self.config.default_facing,
            config: self.config,
            body,
            animator,
            life: LifeState::Alive,
            animation_state: None,
            started: false,
        })
    }
}

/// Reads input, moves a rigid body, probes ground/ceiling contact with two
/// short line casts and picks the Jump/Idle/Walk clip every frame.
///
/// The controller keeps only a handle to the body; the world, the transform and
/// the input are lent to it per call. The host must keep `transform.position`
/// in sync with the body before calling `update`.
#[derive(Debug)]
pub struct CharacterController2D<H, A> {
    config: CharacterConfig,
    body: H,
    animator: A,
    facing: Facing,
    life: LifeState,
    /// Last clip picked, `None` before the first animation pass
    animation_state: Option<AnimationState>,
    started: bool,
}

impl<H: Copy + Debug, A: Animator> CharacterController2D<H, A> {
    pub fn builder(config: CharacterConfig) -> CharacterControllerBuilder<H, A> {
        CharacterControllerBuilder {
            config,
            body: None,
            animator: None,
        }
    }

    /// First-activation setup: derive facing from the sprite scale, freeze
    /// rotation and apply the gravity scale.
    ///
    /// Safe to call repeatedly. Facing is derived from the scale only on the
    /// first call, since later scales already carry the image-direction flip.
    pub fn start<W>(&mut self, world: &mut W, transform: &Transform) -> Result<(), ControllerError>
    where
        W: PhysicsBody<Handle = H>,
    {
        if !world.contains_body(self.body) {
            return Err(ControllerError::BodyNotFound(format!("{:?}", self.body)));
        }

        if !self.started {
            // A zero scale keeps the configured default
            if let Some(facing) = Facing::from_sign(transform.local_scale.x) {
                self.facing = facing;
            }
        }

        world.set_rotation_locked(self.body, true);
        world.set_gravity_scale(self.body, self.config.gravity_scale);

        if !self.started {
            info!(
                "Character controller started: body={:?}, facing={:?}",
                self.body, self.facing
            );
            self.started = true;
        }

        Ok(())
    }

    /// Per-frame update. While alive: sample input and move (if input is
    /// enabled), then pick the animation from the post-move state.
    pub fn update<W, I>(&mut self, world: &mut W, input: &I, transform: &mut Transform)
    where
        W: PhysicsBody<Handle = H> + CollisionWorld,
        I: InputService + ?Sized,
    {
        if !self.life.is_alive() {
            return;
        }

        if !self.started {
            if let Err(err) = self.start(world, transform) {
                warn!("Character controller cannot start: {}", err);
                return;
            }
        }

        if self.config.input_enabled {
            self.sample_input(world, input, transform);
        }

        self.select_animation(world, transform);
    }

    fn sample_input<W, I>(&mut self, world: &mut W, input: &I, transform: &mut Transform)
    where
        W: PhysicsBody<Handle = H> + CollisionWorld,
        I: InputService + ?Sized,
    {
        if input.button_down(&self.config.input.jump_button) {
            self.jump(world, transform);
        }

        let axis = input.axis_raw(&self.config.input.horizontal_axis);
        self.move_horizontal(axis, world, transform);
    }

    /// Jump if grounded: vertical velocity becomes `jump_scale`, horizontal
    /// velocity is kept. Returns whether the jump happened.
    pub fn jump<W>(&mut self, world: &mut W, transform: &Transform) -> bool
    where
        W: PhysicsBody<Handle = H> + CollisionWorld,
    {
        if !self.life.is_alive() || !self.is_grounded(world, transform) {
            return false;
        }

        let Some(velocity) = world.linear_velocity(self.body) else {
            warn!("Jump ignored: body {:?} is gone", self.body);
            return false;
        };

        world.set_linear_velocity(self.body, Vec2::new(velocity.x, self.config.jump_scale));
        true
    }

    /// Move horizontally with an axis value (usually in [-1, 1]).
    ///
    /// A zero axis keeps the current facing. Touching a ceiling forces the
    /// vertical velocity to `ceiling_bounce`.
    pub fn move_horizontal<W>(&mut self, axis: f32, world: &mut W, transform: &mut Transform)
    where
        W: PhysicsBody<Handle = H> + CollisionWorld,
    {
        if !self.life.is_alive() {
            return;
        }

        let Some(velocity) = world.linear_velocity(self.body) else {
            warn!("Move ignored: body {:?} is gone", self.body);
            return;
        };

        if let Some(facing) = Facing::from_sign(axis) {
            self.facing = facing;
        }
        let speed_x = axis * self.config.move_speed;

        transform.local_scale = self.sprite_scale();
        world.set_linear_velocity(self.body, Vec2::new(speed_x, velocity.y));

        if self.is_ceiling(world, transform) {
            world.set_linear_velocity(self.body, Vec2::new(speed_x, self.config.ceiling_bounce));
        }
    }

    /// Pick Jump/Idle/Walk from ground contact and horizontal speed and hand
    /// the clip to the animator. Returns `None` once dead.
    pub fn select_animation<W>(&mut self, world: &W, transform: &Transform) -> Option<AnimationState>
    where
        W: PhysicsBody<Handle = H> + CollisionWorld,
    {
        if !self.life.is_alive() {
            return None;
        }

        let Some(velocity) = world.linear_velocity(self.body) else {
            warn!("Animation skipped: body {:?} is gone", self.body);
            return None;
        };

        let grounded = self.is_grounded(world, transform);
        let state =
            AnimationState::select(grounded, velocity.x, self.config.idle_speed_threshold);

        self.animator.play(state.clip_name(&self.config.clips));
        self.animation_state = Some(state);
        Some(state)
    }

    /// True if the foot line touches a collider in the ground mask
    pub fn is_grounded<W: CollisionWorld + ?Sized>(&self, world: &W, transform: &Transform) -> bool {
        let line = self.foot_line(transform);
        let hit = world.line_intersects_any(line.start, line.end, self.config.ground_mask);
        debug!("Ground check: hit={}", hit);
        hit
    }

    /// True if the head line touches a collider in the ground mask
    pub fn is_ceiling<W: CollisionWorld + ?Sized>(&self, world: &W, transform: &Transform) -> bool {
        let line = self.head_line(transform);
        world.line_intersects_any(line.start, line.end, self.config.ground_mask)
    }

    /// Ground probe: `width` wide, centred on the position, at `foot_offset`
    pub fn foot_line(&self, transform: &Transform) -> LineSegment {
        LineSegment::horizontal(
            transform.position + Vec2::new(0.0, self.config.foot_offset),
            self.config.width,
        )
    }

    /// Ceiling probe: `width` wide, centred on the position, at `head_offset`
    pub fn head_line(&self, transform: &Transform) -> LineSegment {
        LineSegment::horizontal(
            transform.position + Vec2::new(0.0, self.config.head_offset),
            self.config.width,
        )
    }

    /// Publish both probe lines for the host to draw
    pub fn draw_gizmos(&self, transform: &Transform, debug: &mut DebugLines) {
        debug.push_segment(self.foot_line(transform), DEBUG_BLUE);
        debug.push_segment(self.head_line(transform), DEBUG_BLUE);
    }

    /// Stop the controller for good. Physics keeps simulating the body.
    pub fn death(&mut self) {
        if self.life.die() {
            info!("Character died: body={:?}", self.body);
        }
    }

    /// Sprite scale for the current facing, corrected for the artwork direction
    fn sprite_scale(&self) -> Vec2 {
        let drawn = match self.config.image_direction {
            Facing::Right => self.facing,
            Facing::Left => self.facing.flipped(),
        };
        Vec2::new(drawn.sign() * self.config.body_scale, self.config.body_scale)
    }

    pub fn is_alive(&self) -> bool {
        self.life.is_alive()
    }

    pub fn life_state(&self) -> LifeState {
        self.life
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn animation_state(&self) -> Option<AnimationState> {
        self.animation_state
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn body(&self) -> H {
        self.body
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}
