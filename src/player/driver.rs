//! Animation/physics driver
//!
//! Per-frame glue between the collaborators and the state machine. Each tick:
//!
//! 1. Physics feedback: `Fall` while jumping and descending, `Land` while
//!    landing and grounded
//! 2. Input edges: releases, then presses, then jump, then attack
//! 3. Jump impulse if `Jumping` was entered on the ground this tick
//! 4. Presentation: clip, facing and horizontal velocity for the resulting state
//!
//! Feedback runs before input so a landing that coincides with a direction
//! press resolves to `Idle` first and then starts moving.
//!
//! Combo progression does not go through the event table. The animation
//! collaborator reports finished clips through [`Driver::animation_finished`],
//! which consults the combo policy and forces the next phase.

use crate::core::ControllerSettings;
use crate::input::{Action, ActionFrame};
use crate::state::{
    ConfigurationError, EventId, StateChange, StateHooks, StateId, StateMachine,
    StateMachineBuilder, SubscriptionId,
};

use super::combo::{self, ComboFlag};
use super::sink::{CharacterSink, Facing};
use super::snapshot::PhysicsSnapshot;

// ============================================================================
// Machine wiring
// ============================================================================

/// Build the player state machine.
///
/// Every attack phase clears `combo` when entered, so a re-press only counts
/// for the phase in which it happened.
///
/// # Errors
///
/// Returns an error if a state is registered twice or `Idle` is missing.
pub fn build_player_machine(combo: &ComboFlag) -> Result<StateMachine, ConfigurationError> {
    use StateId::*;

    let mut builder = StateMachineBuilder::new();
    for id in StateId::ALL {
        let hooks = if id.is_attack_phase() {
            let flag = combo.clone();
            StateHooks::none().on_enter(move || flag.clear())
        } else {
            StateHooks::none()
        };
        builder.register(id, hooks)?;
    }

    let mut wired = true;
    wired &= builder.add_transitions(EventId::MoveLeft, &[Idle, MovingRight, Jumping], MovingLeft);
    wired &= builder.add_transition(EventId::MoveLeftReleased, MovingLeft, Idle);
    wired &= builder.add_transitions(EventId::MoveRight, &[Idle, MovingLeft, Jumping], MovingRight);
    wired &= builder.add_transition(EventId::MoveRightReleased, MovingRight, Idle);
    wired &= builder.add_transitions(EventId::Jump, &[Idle, MovingLeft, MovingRight], Jumping);
    wired &= builder.add_transition(EventId::Fall, Jumping, Landing);
    wired &= builder.add_transition(EventId::Land, Landing, Idle);
    wired &= builder.add_transition(EventId::Attack, Idle, Attack1Anticipation);
    if !wired {
        log::error!("Player transition table is incomplete");
    }

    builder.build()
}

// ============================================================================
// Driver
// ============================================================================

/// Per-frame controller logic. Owns the combo flag and facing.
#[derive(Debug)]
pub struct Driver {
    run_speed: f32,
    jump_impulse: f32,
    combo: ComboFlag,
    facing: Facing,
}

impl Driver {
    /// Create a driver sharing `combo` with the machine's enter hooks.
    #[must_use]
    pub fn new(settings: &ControllerSettings, combo: ComboFlag) -> Self {
        Self {
            run_speed: settings.run_speed,
            jump_impulse: settings.jump_impulse,
            combo,
            facing: Facing::default(),
        }
    }

    /// Run one frame. Returns the state after all of this frame's events.
    pub fn tick(
        &mut self,
        machine: &mut StateMachine,
        physics: &PhysicsSnapshot,
        input: &ActionFrame,
        sink: &mut impl CharacterSink,
    ) -> StateId {
        let start = machine.current_state_id();

        self.feed_physics(machine, physics);
        self.forward_input(machine, input);

        let state = machine.current_state_id();
        if state == StateId::Jumping && start != StateId::Jumping && physics.grounded {
            log::debug!("Jump impulse {}", self.jump_impulse);
            sink.apply_vertical_impulse(self.jump_impulse);
        }

        self.present(state, input, sink);
        state
    }

    fn feed_physics(&self, machine: &mut StateMachine, physics: &PhysicsSnapshot) {
        if machine.is_in(StateId::Jumping) && physics.is_falling() {
            machine.trigger_event(EventId::Fall);
        }
        if machine.is_in(StateId::Landing) && physics.grounded {
            machine.trigger_event(EventId::Land);
        }
    }

    fn forward_input(&self, machine: &mut StateMachine, input: &ActionFrame) {
        if input.just_released(Action::Left) {
            machine.trigger_event(EventId::MoveLeftReleased);
        }
        if input.just_released(Action::Right) {
            machine.trigger_event(EventId::MoveRightReleased);
        }
        if input.just_pressed(Action::Left) {
            machine.trigger_event(EventId::MoveLeft);
        }
        if input.just_pressed(Action::Right) {
            machine.trigger_event(EventId::MoveRight);
        }
        if input.just_pressed(Action::Jump) {
            machine.trigger_event(EventId::Jump);
        }
        if input.just_pressed(Action::Attack) {
            let current = machine.current_state_id();
            if current.is_attack_phase() {
                log::debug!("Combo input during {current}");
                self.combo.set();
            } else {
                machine.trigger_event(EventId::Attack);
            }
        }
    }

    fn present(&mut self, state: StateId, input: &ActionFrame, sink: &mut impl CharacterSink) {
        sink.play_animation(state.clip_key(), false);

        let facing = run_direction(state).map_or(self.facing, |(facing, _)| facing);
        if facing != self.facing {
            self.facing = facing;
            sink.set_facing(facing);
        }

        if let Some(velocity) = self.velocity_intent(state, input) {
            sink.set_horizontal_velocity(velocity);
        }
    }

    /// Horizontal velocity for `state`, or `None` to leave momentum alone.
    ///
    /// Running states re-check their own key every frame, not just on edges.
    /// The sign always matches the state's facing; a running state whose key
    /// is no longer held stands still until its release event arrives.
    fn velocity_intent(&self, state: StateId, input: &ActionFrame) -> Option<f32> {
        if let Some((facing, key)) = run_direction(state) {
            let velocity = if input.is_held(key) {
                facing.sign() * self.run_speed
            } else {
                0.0
            };
            return Some(velocity);
        }
        match state {
            StateId::Jumping | StateId::Landing => None,
            _ => Some(0.0),
        }
    }

    /// Handle a finished clip from the animation collaborator.
    ///
    /// Only the clip of the current attack phase advances the combo. Anything
    /// else (looping clips, stale completions) is ignored and leaves the
    /// combo flag alone. Returns the phase that was forced, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the next phase is not registered in `machine`.
    pub fn animation_finished(
        &mut self,
        machine: &mut StateMachine,
        clip: &str,
    ) -> Result<Option<StateId>, ConfigurationError> {
        let Some(phase) = StateId::from_clip_key(clip) else {
            log::trace!("Ignoring completion of clip {clip:?}");
            return Ok(None);
        };
        if !machine.is_in(phase) {
            log::trace!(
                "Ignoring stale completion of {phase} in {}",
                machine.current_state_id()
            );
            return Ok(None);
        }

        let repressed = self.combo.take();
        let Some(next) = combo::next_phase(phase, repressed) else {
            return Ok(None);
        };
        log::debug!("{phase} finished (combo: {repressed}), next {next}");
        machine.force_state(next)?;
        Ok(Some(next))
    }

    /// Whether a combo re-press is pending.
    #[must_use]
    pub fn combo_pending(&self) -> bool {
        self.combo.is_set()
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }
}

/// Facing and driving key of a running state.
fn run_direction(state: StateId) -> Option<(Facing, Action)> {
    match state {
        StateId::MovingLeft => Some((Facing::Left, Action::Left)),
        StateId::MovingRight => Some((Facing::Right, Action::Right)),
        _ => None,
    }
}

// ============================================================================
// Player Controller
// ============================================================================

/// A player state machine together with its driver.
///
/// Caller-owned; create one per controlled character.
#[derive(Debug)]
pub struct PlayerController {
    machine: StateMachine,
    driver: Driver,
}

impl PlayerController {
    /// Wire the machine and driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the machine cannot be built.
    pub fn new(settings: &ControllerSettings) -> Result<Self, ConfigurationError> {
        let combo = ComboFlag::new();
        let machine = build_player_machine(&combo)?;
        Ok(Self {
            machine,
            driver: Driver::new(settings, combo),
        })
    }

    /// Run one frame.
    pub fn tick(
        &mut self,
        physics: &PhysicsSnapshot,
        input: &ActionFrame,
        sink: &mut impl CharacterSink,
    ) -> StateId {
        self.driver.tick(&mut self.machine, physics, input, sink)
    }

    /// Forward a finished clip.
    ///
    /// # Errors
    ///
    /// Returns an error if the next phase is not registered.
    pub fn animation_finished(&mut self, clip: &str) -> Result<Option<StateId>, ConfigurationError> {
        self.driver.animation_finished(&mut self.machine, clip)
    }

    /// Listen for state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> SubscriptionId {
        self.machine.subscribe(listener)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StateId {
        self.machine.current_state_id()
    }

    /// The state machine.
    #[must_use]
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// The driver.
    #[must_use]
    pub fn driver(&self) -> &Driver {
        &self.driver
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::snapshot::VelocitySign;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play(String, bool),
        Velocity(f32),
        Impulse(f32),
        Facing(Facing),
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Call>,
    }

    impl RecordingSink {
        fn last_velocity(&self) -> Option<f32> {
            self.calls.iter().rev().find_map(|c| match c {
                Call::Velocity(v) => Some(*v),
                _ => None,
            })
        }

        fn last_clip(&self) -> Option<&str> {
            self.calls.iter().rev().find_map(|c| match c {
                Call::Play(clip, _) => Some(clip.as_str()),
                _ => None,
            })
        }

        fn impulses(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Impulse(_)))
                .count()
        }
    }

    impl CharacterSink for RecordingSink {
        fn play_animation(&mut self, clip: &str, restart_if_playing: bool) {
            self.calls.push(Call::Play(clip.to_string(), restart_if_playing));
        }

        fn set_horizontal_velocity(&mut self, velocity: f32) {
            self.calls.push(Call::Velocity(velocity));
        }

        fn apply_vertical_impulse(&mut self, magnitude: f32) {
            self.calls.push(Call::Impulse(magnitude));
        }

        fn set_facing(&mut self, facing: Facing) {
            self.calls.push(Call::Facing(facing));
        }
    }

    fn controller() -> PlayerController {
        PlayerController::new(&ControllerSettings::default()).unwrap()
    }

    fn idle_frame() -> ActionFrame {
        ActionFrame::new()
    }

    #[test]
    fn test_player_table_matches_diagram() {
        use StateId::*;

        let machine = build_player_machine(&ComboFlag::new()).unwrap();
        let table = machine.table();

        let expected = [
            (EventId::MoveLeft, Idle, MovingLeft),
            (EventId::MoveLeft, MovingRight, MovingLeft),
            (EventId::MoveLeft, Jumping, MovingLeft),
            (EventId::MoveLeftReleased, MovingLeft, Idle),
            (EventId::MoveRight, Idle, MovingRight),
            (EventId::MoveRight, MovingLeft, MovingRight),
            (EventId::MoveRight, Jumping, MovingRight),
            (EventId::MoveRightReleased, MovingRight, Idle),
            (EventId::Jump, Idle, Jumping),
            (EventId::Jump, MovingLeft, Jumping),
            (EventId::Jump, MovingRight, Jumping),
            (EventId::Fall, Jumping, Landing),
            (EventId::Land, Landing, Idle),
            (EventId::Attack, Idle, Attack1Anticipation),
        ];

        // Every cell of the grid is accounted for: listed pairs map, all others do not
        let grid = table.outcomes();
        for event in EventId::ALL {
            for state in StateId::ALL {
                let want = expected
                    .iter()
                    .find(|(e, from, _)| *e == event && *from == state)
                    .map(|(_, _, to)| *to);
                assert_eq!(grid[event.index()][state.index()], want, "{event} in {state}");
            }
        }
        assert_eq!(table.len(), expected.len());
    }

    #[test]
    fn test_unmapped_events_leave_state_and_hooks_alone() {
        let mut machine = build_player_machine(&ComboFlag::new()).unwrap();

        for state in StateId::ALL {
            machine.force_state(state).unwrap();
            for event in EventId::ALL {
                if machine.table().lookup(event, state).is_some() {
                    continue;
                }
                let count = machine.transition_count();
                machine.trigger_event(event);
                assert_eq!(machine.current_state_id(), state);
                assert_eq!(machine.transition_count(), count);
            }
        }
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        let state = player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().release(Action::Left),
            &mut sink,
        );
        assert_eq!(state, StateId::Idle);
        assert_eq!(player.machine().transition_count(), 0);
    }

    #[test]
    fn test_run_left_and_release() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();

        player.tick(&ground, &idle_frame().press(Action::Left), &mut sink);
        assert_eq!(player.state(), StateId::MovingLeft);
        assert_eq!(sink.last_clip(), Some("run"));
        assert_eq!(sink.last_velocity(), Some(-200.0));
        assert!(sink.calls.contains(&Call::Facing(Facing::Left)));

        player.tick(&ground, &idle_frame().release(Action::Left), &mut sink);
        assert_eq!(player.state(), StateId::Idle);
        assert_eq!(sink.last_clip(), Some("idle"));
        assert_eq!(sink.last_velocity(), Some(0.0));
        assert_eq!(player.driver().facing(), Facing::Left, "Facing persists");
    }

    #[test]
    fn test_held_keys_reassert_velocity() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();

        player.tick(&ground, &idle_frame().press(Action::Right), &mut sink);
        assert_eq!(sink.last_velocity(), Some(200.0));

        player.tick(&ground, &idle_frame().hold(Action::Right), &mut sink);
        assert_eq!(sink.last_velocity(), Some(200.0));

        // Still MovingRight, but only left is held now
        player.tick(&ground, &idle_frame().hold(Action::Left), &mut sink);
        assert_eq!(player.state(), StateId::MovingRight);
        assert_eq!(sink.last_velocity(), Some(0.0));
        assert_eq!(player.driver().facing(), Facing::Right);
    }

    #[test]
    fn test_both_keys_held_runs_toward_latest_press() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();

        player.tick(&ground, &idle_frame().press(Action::Left), &mut sink);
        player.tick(
            &ground,
            &idle_frame().hold(Action::Left).press(Action::Right),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::MovingRight);
        assert_eq!(sink.last_velocity(), Some(200.0));
        assert_eq!(player.driver().facing(), Facing::Right);

        player.tick(
            &ground,
            &idle_frame().hold(Action::Right).press(Action::Left),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::MovingLeft);
        assert_eq!(sink.last_velocity(), Some(-200.0));
        assert_eq!(player.driver().facing(), Facing::Left);
    }

    #[test]
    fn test_running_velocity_agrees_with_facing() {
        let mut player = controller();
        let ground = PhysicsSnapshot::grounded();
        let frames = [
            idle_frame().press(Action::Left),
            idle_frame().hold(Action::Left).press(Action::Right),
            idle_frame().hold(Action::Left).hold(Action::Right),
            idle_frame().hold(Action::Left),
            idle_frame().hold(Action::Right).press(Action::Left),
            idle_frame().hold(Action::Right),
        ];

        for frame in &frames {
            let mut sink = RecordingSink::default();
            let state = player.tick(&ground, frame, &mut sink);
            assert!(matches!(state, StateId::MovingLeft | StateId::MovingRight));
            let velocity = sink.last_velocity().unwrap();
            assert!(
                velocity == 0.0 || velocity.signum() == player.driver().facing().sign(),
                "{state}: velocity {velocity} against {:?}",
                player.driver().facing()
            );
        }
    }

    #[test]
    fn test_animation_requests_do_not_restart() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        player.tick(&PhysicsSnapshot::grounded(), &idle_frame(), &mut sink);
        assert_eq!(sink.calls[0], Call::Play("idle".to_string(), false));
    }

    #[test]
    fn test_jump_land_round_trip() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        let hooks = Rc::new(RefCell::new(Vec::new()));
        let seen = hooks.clone();
        player.subscribe(move |change| seen.borrow_mut().push(*change));

        player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().press(Action::Jump),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::Jumping);
        assert_eq!(sink.impulses(), 1);
        assert!(sink.calls.contains(&Call::Impulse(330.0)));

        player.tick(
            &PhysicsSnapshot::airborne(VelocitySign::Negative),
            &idle_frame(),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::Jumping);

        player.tick(
            &PhysicsSnapshot::airborne(VelocitySign::Positive),
            &idle_frame(),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::Landing);
        assert_eq!(sink.last_clip(), Some("fall"));

        player.tick(&PhysicsSnapshot::grounded(), &idle_frame(), &mut sink);
        assert_eq!(player.state(), StateId::Idle);
        assert_eq!(sink.impulses(), 1, "Only the takeoff frame kicks");

        // Every visited state was entered and left the same number of times
        let changes = hooks.borrow();
        let visited: Vec<_> = changes.iter().map(|c| c.to).collect();
        assert_eq!(
            visited,
            vec![StateId::Jumping, StateId::Landing, StateId::Idle]
        );
        for state in [StateId::Idle, StateId::Jumping, StateId::Landing] {
            let entered = changes.iter().filter(|c| c.to == state).count();
            let left = changes.iter().filter(|c| c.from == state).count();
            assert_eq!(entered, left, "{state}");
        }
    }

    #[test]
    fn test_jump_in_air_has_no_impulse() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().press(Action::Left),
            &mut sink,
        );
        // Walked off a ledge, then pressed jump
        player.tick(
            &PhysicsSnapshot::airborne(VelocitySign::Positive),
            &idle_frame().hold(Action::Left).press(Action::Jump),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::Jumping);
        assert_eq!(sink.impulses(), 0);
    }

    #[test]
    fn test_landing_resolves_before_direction_press() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().press(Action::Jump),
            &mut sink,
        );
        player.tick(
            &PhysicsSnapshot::airborne(VelocitySign::Positive),
            &idle_frame(),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::Landing);

        // Touchdown and a right press in the same frame
        player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().press(Action::Right),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::MovingRight);
        assert_eq!(sink.last_velocity(), Some(200.0));
    }

    #[test]
    fn test_plain_attack_chain() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().press(Action::Attack),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::Attack1Anticipation);
        assert_eq!(sink.last_velocity(), Some(0.0));

        let mut visited = vec![player.state()];
        for _ in 0..3 {
            let clip = player.state().clip_key();
            let next = player.animation_finished(clip).unwrap();
            visited.push(next.unwrap());
        }

        assert_eq!(
            visited,
            vec![
                StateId::Attack1Anticipation,
                StateId::Attack1Contact,
                StateId::Attack1Recovery,
                StateId::Idle,
            ]
        );
    }

    #[test]
    fn test_repress_during_contact_continues_combo() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();

        player.tick(&ground, &idle_frame().press(Action::Attack), &mut sink);
        player.animation_finished("attack_1_anticipation").unwrap();
        assert_eq!(player.state(), StateId::Attack1Contact);

        player.tick(&ground, &idle_frame().press(Action::Attack), &mut sink);
        assert_eq!(player.state(), StateId::Attack1Contact, "Press alone does not transition");
        assert!(player.driver().combo_pending());

        let next = player.animation_finished("attack_1_contact").unwrap();
        assert_eq!(next, Some(StateId::Attack2Anticipation));
        assert!(!player.driver().combo_pending());
    }

    #[test]
    fn test_full_three_hit_combo() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();
        let attack = idle_frame().press(Action::Attack);

        player.tick(&ground, &attack, &mut sink);
        player.animation_finished("attack_1_anticipation").unwrap();
        player.tick(&ground, &attack, &mut sink);
        player.animation_finished("attack_1_contact").unwrap();
        player.animation_finished("attack_2_anticipation").unwrap();
        player.tick(&ground, &attack, &mut sink);
        player.animation_finished("attack_2_contact").unwrap();
        assert_eq!(player.state(), StateId::Attack3Anticipation);

        // The finisher ignores further presses
        player.animation_finished("attack_3_anticipation").unwrap();
        player.tick(&ground, &attack, &mut sink);
        player.animation_finished("attack_3_contact").unwrap();
        assert_eq!(player.state(), StateId::Attack3Recovery);
        player.animation_finished("attack_3_recovery").unwrap();
        assert_eq!(player.state(), StateId::Idle);
        assert!(!player.driver().combo_pending());
    }

    #[test]
    fn test_press_during_anticipation_does_not_count() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();

        player.tick(&ground, &idle_frame().press(Action::Attack), &mut sink);
        // Re-press while still winding up
        player.tick(&ground, &idle_frame().press(Action::Attack), &mut sink);
        assert!(player.driver().combo_pending());

        player.animation_finished("attack_1_anticipation").unwrap();
        assert!(!player.driver().combo_pending(), "Entering contact clears the flag");

        let next = player.animation_finished("attack_1_contact").unwrap();
        assert_eq!(next, Some(StateId::Attack1Recovery));
    }

    #[test]
    fn test_stale_and_looping_completions_are_ignored() {
        let mut player = controller();
        let mut sink = RecordingSink::default();

        assert_eq!(player.animation_finished("idle").unwrap(), None);
        assert_eq!(player.animation_finished("attack_2_contact").unwrap(), None);
        assert_eq!(player.state(), StateId::Idle);

        player.tick(
            &PhysicsSnapshot::grounded(),
            &idle_frame().press(Action::Attack),
            &mut sink,
        );
        assert_eq!(player.animation_finished("attack_1_recovery").unwrap(), None);
        assert_eq!(player.state(), StateId::Attack1Anticipation);
    }

    #[test]
    fn test_attack_while_running_is_ignored() {
        let mut player = controller();
        let mut sink = RecordingSink::default();
        let ground = PhysicsSnapshot::grounded();

        player.tick(&ground, &idle_frame().press(Action::Left), &mut sink);
        player.tick(
            &ground,
            &idle_frame().hold(Action::Left).press(Action::Attack),
            &mut sink,
        );
        assert_eq!(player.state(), StateId::MovingLeft);
        assert!(!player.driver().combo_pending());
    }

    #[test]
    fn test_missing_phase_is_configuration_error() {
        // Machine without the contact phase registered
        let combo = ComboFlag::new();
        let mut builder = StateMachineBuilder::new();
        builder.register(StateId::Idle, StateHooks::none()).unwrap();
        builder
            .register(StateId::Attack1Anticipation, StateHooks::none())
            .unwrap();
        builder.add_transition(EventId::Attack, StateId::Idle, StateId::Attack1Anticipation);
        let mut machine = builder.build().unwrap();
        let mut driver = Driver::new(&ControllerSettings::default(), combo);

        machine.trigger_event(EventId::Attack);
        let err = driver
            .animation_finished(&mut machine, "attack_1_anticipation")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnregisteredState {
                state: StateId::Attack1Contact,
                ..
            }
        ));
        assert_eq!(machine.current_state_id(), StateId::Attack1Anticipation);
    }
}
