//! Property tests for the control loop
//!
//! Random command/e-stop/time sequences are replayed through a
//! `ControlLoop` and the safety invariants are checked after every step.

use proptest::prelude::*;

use traverse_core::config::ActuatorConfig;
use traverse_core::control::ControlLoop;
use traverse_core::motion::{MotionController, Position};
use traverse_core::traits::{BridgeDriver, BridgeOutputs, DriveDirection};
use traverse_core::{Reply, Station, Status};

#[derive(Default)]
struct MockBridge {
    outputs: BridgeOutputs,
}

impl BridgeDriver for MockBridge {
    fn drive(&mut self, direction: DriveDirection, duty_percent: u8) {
        self.outputs = BridgeOutputs {
            enable: [true, true],
            pwm_toward_a: if direction == DriveDirection::TowardA { duty_percent } else { 0 },
            pwm_toward_b: if direction == DriveDirection::TowardB { duty_percent } else { 0 },
        };
    }

    fn release(&mut self) {
        self.outputs = BridgeOutputs::RELEASED;
    }

    fn outputs(&self) -> BridgeOutputs {
        self.outputs
    }
}

#[derive(Debug, Clone)]
struct Step {
    advance_ms: u32,
    estop_pressed: bool,
    line: Option<&'static str>,
}

fn line_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some("A")),
        1 => Just(Some("b")),
        1 => Just(Some("STOP")),
        1 => Just(Some("status")),
        1 => Just(Some("HOME")),
        1 => Just(Some("bogus")),
        1 => Just(Some("")),
    ]
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (0u32..4_000, prop::bool::weighted(0.1), line_strategy()).prop_map(
        |(advance_ms, estop_pressed, line)| Step {
            advance_ms,
            estop_pressed,
            line,
        },
    )
}

/// Raw input level for a pull-up e-stop
fn estop_level(pressed: bool) -> bool {
    !pressed
}

fn check_invariants(motion: &MotionController<MockBridge>) -> Result<(), TestCaseError> {
    let outputs = motion.driver().outputs();

    // Bridge energized exactly when a move is in flight, in one direction
    if motion.is_moving() {
        let target = motion.target().map(DriveDirection::from);
        prop_assert_eq!(outputs.direction(), target);
        prop_assert_eq!(motion.position(), Position::Moving);
    } else {
        prop_assert!(outputs.is_released());
        prop_assert_ne!(motion.position(), Position::Moving);
    }

    // Never both PWM channels at once
    prop_assert!(outputs.pwm_toward_a == 0 || outputs.pwm_toward_b == 0);

    // A latched e-stop always means released outputs
    if motion.estop_active() {
        prop_assert!(outputs.is_released());
        prop_assert_eq!(motion.status(), Status::Estop);
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        start in any::<u32>(),
        steps in prop::collection::vec(step_strategy(), 1..80),
    ) {
        let mut ctl = ControlLoop::new(MockBridge::default(), &ActuatorConfig::default());
        let mut now = start;

        for step in &steps {
            now = now.wrapping_add(step.advance_ms);
            ctl.iterate(now, estop_level(step.estop_pressed), step.line.map(Ok), &mut |_| {});
            check_invariants(ctl.motion())?;
        }
    }

    #[test]
    fn prop_stop_always_releases(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let mut ctl = ControlLoop::new(MockBridge::default(), &ActuatorConfig::default());
        let mut now = 0u32;

        for step in &steps {
            now = now.wrapping_add(step.advance_ms);
            ctl.iterate(now, estop_level(step.estop_pressed), step.line.map(Ok), &mut |_| {});
        }

        let mut stopped = false;
        ctl.iterate(now, estop_level(false), Some(Ok("STOP")), &mut |reply| {
            stopped |= matches!(reply, Reply::Stopped);
        });

        prop_assert!(stopped);
        prop_assert!(ctl.motion().driver().is_released());
        prop_assert!(!ctl.motion().is_moving());
    }

    #[test]
    fn prop_estop_blocks_moves(
        lines in prop::collection::vec(line_strategy(), 1..30),
        advance in prop::collection::vec(0u32..30_000, 30),
    ) {
        let mut ctl = ControlLoop::new(MockBridge::default(), &ActuatorConfig::default());
        let mut now = 0u32;

        for (line, dt) in lines.iter().zip(advance.iter()) {
            now = now.wrapping_add(*dt);
            ctl.iterate(now, estop_level(true), line.map(Ok), &mut |reply| {
                assert!(!matches!(reply, Reply::MovingTo { .. } | Reply::Reached(_)));
            });
            prop_assert!(ctl.motion().driver().is_released());
            prop_assert_eq!(ctl.motion().status(), Status::Estop);
        }
    }

    #[test]
    fn prop_home_uses_worst_case(
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let mut ctl = ControlLoop::new(MockBridge::default(), &ActuatorConfig::default());
        let mut now = 0u32;

        for step in &steps {
            now = now.wrapping_add(step.advance_ms);
            ctl.iterate(now, estop_level(false), step.line.map(Ok), &mut |_| {});
        }

        let worst = ctl.motion().durations().worst_case_ms();
        let mut estimate = None;
        ctl.iterate(now, estop_level(false), Some(Ok("HOME")), &mut |reply| {
            if let Reply::MovingTo { station, estimate_ms } = reply {
                estimate = Some((station, estimate_ms));
            }
        });

        prop_assert_eq!(estimate, Some((Station::A, worst)));
    }

    #[test]
    fn prop_progress_throttled(tick_ms in 1u32..1_500, target_b in any::<bool>()) {
        let mut ctl = ControlLoop::new(MockBridge::default(), &ActuatorConfig::default());
        let interval = ActuatorConfig::default().motion.progress_interval_ms;
        let line = if target_b { "B" } else { "HOME" };

        let mut progress_at: Vec<u32> = Vec::new();
        let mut now = 0u32;
        ctl.iterate(now, estop_level(false), Some(Ok(line)), &mut |_| {});

        while ctl.motion().is_moving() {
            now += tick_ms;
            ctl.iterate(now, estop_level(false), None, &mut |reply| {
                if let Reply::Progress { .. } = reply {
                    progress_at.push(now);
                }
            });
        }

        for pair in progress_at.windows(2) {
            prop_assert!(pair[1] - pair[0] >= interval - tick_ms);
        }
        for (i, at) in progress_at.iter().enumerate() {
            prop_assert!(*at >= interval * (i as u32 + 1));
        }
    }

    #[test]
    fn prop_status_is_idempotent(
        steps in prop::collection::vec(step_strategy(), 0..40),
        repeats in 1usize..5,
    ) {
        let mut ctl = ControlLoop::new(MockBridge::default(), &ActuatorConfig::default());
        let mut now = 0u32;

        for step in &steps {
            now = now.wrapping_add(step.advance_ms);
            ctl.iterate(now, estop_level(step.estop_pressed), step.line.map(Ok), &mut |_| {});
        }

        let snapshot = |ctl: &ControlLoop<MockBridge>| {
            let motion = ctl.motion();
            (motion.position(), motion.status(), motion.driver().outputs())
        };
        let before = snapshot(&ctl);
        // Keep the e-stop level unchanged so no edge fires
        let held = steps.last().is_some_and(|s| s.estop_pressed);

        for _ in 0..repeats {
            let mut reported = None;
            let mut count = 0;
            // Same timestamp, so the move timer cannot advance
            ctl.iterate(now, estop_level(held), Some(Ok("STATUS")), &mut |reply| {
                if let Reply::Status(status) = reply {
                    reported = Some(status);
                }
                count += 1;
            });
            prop_assert_eq!(reported, Some(before.1));
            prop_assert_eq!(count, 2);
        }

        let after = snapshot(&ctl);
        prop_assert_eq!(before, after);
    }
}
