//! Headless demo: scripted key presses drive the player controller
//!
//! A toy kinematic body stands in for the physics engine and an
//! [`AnimationPlayer`] stands in for the sprite renderer. Pass a `.ron` or
//! `.json` settings file as the first argument to override the defaults.

use std::cell::RefCell;
use std::rc::Rc;

use bladekeeper::prelude::*;
use glam::Vec2;
use winit::event::ElementState;

/// Simulation step (60 Hz)
const DT: f32 = 1.0 / 60.0;
/// Frames to simulate
const FRAMES: u32 = 360;
/// Screen-space y of the floor
const GROUND_Y: f32 = 450.0;
/// Downward acceleration in pixels per second squared
const GRAVITY: f32 = 600.0;

/// Scripted keyboard events as (frame, key, state)
const SCRIPT: &[(u32, KeyCode, ElementState)] = &[
    (10, KeyCode::ArrowRight, ElementState::Pressed),
    (40, KeyCode::ArrowRight, ElementState::Released),
    (50, KeyCode::Space, ElementState::Pressed),
    (52, KeyCode::Space, ElementState::Released),
    (130, KeyCode::KeyX, ElementState::Pressed),
    (131, KeyCode::KeyX, ElementState::Released),
    (145, KeyCode::KeyX, ElementState::Pressed),
    (146, KeyCode::KeyX, ElementState::Released),
    (166, KeyCode::KeyX, ElementState::Pressed),
    (167, KeyCode::KeyX, ElementState::Released),
    (260, KeyCode::ArrowLeft, ElementState::Pressed),
    (300, KeyCode::ArrowLeft, ElementState::Released),
];

/// Stand-in for the physics body and sprite
struct Body {
    position: Vec2,
    velocity: Vec2,
    facing: Facing,
    animation: AnimationPlayer,
    clips: ClipCatalog,
}

impl Body {
    fn new(clips: ClipCatalog) -> Self {
        Self {
            position: Vec2::new(100.0, GROUND_Y),
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            animation: AnimationPlayer::new(),
            clips,
        }
    }

    fn grounded(&self) -> bool {
        self.position.y >= GROUND_Y && self.velocity.y >= 0.0
    }

    fn snapshot(&self) -> PhysicsSnapshot {
        PhysicsSnapshot::from_body(self.grounded(), self.velocity.y)
    }

    fn integrate(&mut self, dt: f32) {
        self.velocity.y += GRAVITY * dt;
        self.position += self.velocity * dt;
        if self.position.y >= GROUND_Y {
            self.position.y = GROUND_Y;
            self.velocity.y = 0.0;
        }
    }
}

impl CharacterSink for Body {
    fn play_animation(&mut self, clip: &str, restart_if_playing: bool) {
        match self.clips.get(clip) {
            Some(spec) => {
                self.animation.play(spec, restart_if_playing);
            }
            None => log::warn!("No clip {clip:?} in catalog"),
        }
    }

    fn set_horizontal_velocity(&mut self, velocity: f32) {
        self.velocity.x = velocity;
    }

    fn apply_vertical_impulse(&mut self, magnitude: f32) {
        self.velocity.y = -magnitude;
    }

    fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }
}

fn load_settings() -> ControllerSettings {
    match std::env::args().nth(1) {
        Some(path) => match ControllerSettings::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::error!("Failed to load {path}: {e}; using defaults");
                ControllerSettings::default()
            }
        },
        None => ControllerSettings::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let mut player = match PlayerController::new(&settings) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Controller setup error: {e}");
            return;
        }
    };

    let debug = Rc::new(RefCell::new(DebugInfo::new()));
    let recorder = debug.clone();
    player.subscribe(move |change| {
        log::info!("{change}");
        recorder.borrow_mut().record_change(*change);
    });

    let bindings = ActionBindings::with_defaults();
    let mut input = Input::new();
    let mut body = Body::new(settings.clips.clone());

    for frame in 0..FRAMES {
        input.update();
        for &(at, key, state) in SCRIPT.iter().filter(|(at, _, _)| *at == frame) {
            log::debug!("Frame {at}: {key:?} {state:?}");
            input.process_keyboard(key, state);
        }

        let actions = bindings.resolve(&input);
        let snapshot = body.snapshot();
        player.tick(&snapshot, &actions, &mut body);
        body.integrate(DT);

        if let Some(clip) = body.animation.update(DT)
            && let Err(e) = player.animation_finished(&clip)
        {
            log::error!("Combo step after {clip:?} failed: {e}");
        }
    }

    let mut debug = debug.borrow_mut();
    debug.add_line(format!(
        "Position: ({:.1}, {:.1}) facing {:?}",
        body.position.x, body.position.y, body.facing
    ));
    for line in debug.get_all_lines() {
        log::info!("{line}");
    }
}
