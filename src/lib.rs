//! 2D platformer character controller.
//!
//! A [`CharacterController2D`](game::characters::CharacterController2D) reads a
//! horizontal axis and a jump button, drives a rigid body's velocity, probes
//! ground and ceiling contact with two short line casts and picks a
//! Jump/Idle/Walk animation each frame. The host engine is reached through the
//! traits in [`engine::host`]; [`engine::physics::PhysicsWorld`] implements
//! them on top of rapier2d.

pub mod core;
pub mod engine;
pub mod game;
