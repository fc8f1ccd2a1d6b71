// Physics system using rapier2d

pub mod body;
mod collision;
mod debug;
mod world;

pub use body::{presets, BodyBuilder, ColliderBuilder2D};
pub use collision::{CollisionEvent, CollisionLayer, LayerMask};
pub use debug::{DebugColor, DebugLine, DebugLines, DEBUG_BLUE, DEBUG_GREEN, DEBUG_RED};
pub use world::{ColliderHandle, PhysicsWorld, RigidBodyHandle, PHYSICS_TIMESTEP};
