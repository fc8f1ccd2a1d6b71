// Engine modules: host contract, physics, input, frame timing

pub mod game_loop;
pub mod host;
pub mod input;
pub mod physics;
