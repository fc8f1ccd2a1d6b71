use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use platformer_controller::engine::game_loop::GameLoop;
use platformer_controller::engine::host::{PhysicsBody, Transform};
use platformer_controller::engine::input::{Action, InputManager};
use platformer_controller::engine::physics::{
    presets, CollisionLayer, DebugLines, PhysicsWorld, RigidBodyHandle,
};
use platformer_controller::game::characters::{
    AnimationPlayer, CharacterConfig, CharacterController2D,
};

/// One-character demo scene: a floor, a ledge and a hazard strip
struct Demo {
    world: PhysicsWorld,
    body: RigidBodyHandle,
    transform: Transform,
    controller: CharacterController2D<RigidBodyHandle, AnimationPlayer>,
    input: InputManager,
    game_loop: GameLoop,
    debug_lines: DebugLines,
}

impl Demo {
    fn new() -> Result<Self> {
        let mut world = PhysicsWorld::new();

        let floor = world.add_rigid_body(presets::ground_body(0.0, 0.0));
        world.add_collider(presets::ground_collider(40.0, 1.0), floor);

        let ledge = world.add_rigid_body(presets::ground_body(6.0, 3.5));
        world.add_collider(presets::ground_collider(4.0, 0.5), ledge);

        let hazard = world.add_rigid_body(presets::ground_body(15.0, 1.0));
        world.add_collider(presets::hazard_collider(2.0, 1.0), hazard);

        let body = world.add_rigid_body(presets::character_body(0.0, 1.4));
        world.add_collider(presets::character_collider(1.0, 1.8), body);

        let mut transform = Transform::default();
        world.sync_transform(body, &mut transform);

        let config = CharacterConfig::default();
        let animator = AnimationPlayer::with_character_clips(&config.clips);
        let mut controller = CharacterController2D::builder(config)
            .body(body)
            .animator(animator)
            .build(&world)
            .context("failed to build the character controller")?;
        controller.start(&mut world, &transform)?;

        let mut debug_lines = DebugLines::new();
        debug_lines.set_enabled(cfg!(debug_assertions));

        Ok(Self {
            world,
            body,
            transform,
            controller,
            input: InputManager::default(),
            game_loop: GameLoop::new(),
            debug_lines,
        })
    }

    /// Run the fixed ticks due this frame
    fn frame(&mut self) {
        let ticks = self.game_loop.begin_frame();

        // Keep pending key edges for the next frame that actually ticks
        if ticks == 0 && !self.game_loop.is_paused() {
            return;
        }

        if self.input.just_pressed(Action::Pause) {
            self.game_loop.toggle_pause();
        }

        let dt = self.game_loop.fixed_timestep();
        for _ in 0..ticks {
            self.tick(dt);
        }

        // Paused frames run no tick; drop the edges they saw here
        if ticks == 0 {
            self.input.update();
        }

        self.debug_lines.clear();
        self.controller
            .draw_gizmos(&self.transform, &mut self.debug_lines);

        if self.game_loop.frame_count() % 60 == 0 {
            debug!(
                "frame {}: pos={:?} vel={:?} anim={:?} facing={:?}",
                self.game_loop.frame_count(),
                self.transform.position,
                self.world.linear_velocity(self.body).unwrap_or(Vec2::ZERO),
                self.controller.animation_state(),
                self.controller.facing(),
            );
        }
    }

    fn tick(&mut self, dt: f32) {
        self.world.sync_transform(self.body, &mut self.transform);
        self.controller
            .update(&mut self.world, self.input.player(), &mut self.transform);

        self.world.step();
        self.world.sync_transform(self.body, &mut self.transform);

        if self.controller.is_alive()
            && self
                .world
                .body_started_touching(self.body, CollisionLayer::Hazard.into())
        {
            self.controller.death();
        }

        self.controller.animator_mut().update(dt);

        // A key edge is seen by one controller update only
        self.input.update();
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting platformer demo...");

    let mut demo = Demo::new()?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Platformer Controller")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created; A/D or arrows to move, Space/W to jump, Escape to pause");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                demo.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                demo.input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                demo.frame();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
