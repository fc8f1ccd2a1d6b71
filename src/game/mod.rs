// Game-side modules built on the engine

pub mod characters;
