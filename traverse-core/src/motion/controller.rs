//! Timed move state machine
//!
//! The controller owns the believed position, the in-flight move and the
//! emergency stop latch. Only `request_move`, `home`, `tick` and `stop`
//! mutate position or move state; the e-stop path acts through `stop`.
//!
//! # Timing
//!
//! A move completes when `now - start >= expected`. Nothing confirms the
//! actuator actually arrived; the calibrated duration table must be
//! conservative and the hardware limit switches are the physical backstop.
//! Timestamps are free-running milliseconds and wrap safely.

use traverse_protocol::{Station, Status};

use super::duration::DurationTable;
use super::events::MotionEvent;
use super::position::Position;
use crate::config::ActuatorConfig;
use crate::safety::{EstopEdge, EstopMonitor};
use crate::traits::BridgeDriver;

/// The single in-flight move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Move {
    /// Station being driven to
    pub target: Station,
    /// Timestamp the bridge was energized (ms)
    pub started_ms: u32,
    /// Time after which the move is considered complete (ms)
    pub expected_ms: u32,
    /// Last progress window reported (elapsed / interval)
    progress_window: u32,
}

impl Move {
    /// Elapsed time at `now_ms`
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.started_ms)
    }
}

/// Open-loop position controller
pub struct MotionController<D: BridgeDriver> {
    driver: D,
    durations: DurationTable,
    duty_percent: u8,
    progress_interval_ms: u32,
    home: Station,
    position: Position,
    active: Option<Move>,
    estop: EstopMonitor,
}

impl<D: BridgeDriver> MotionController<D> {
    /// Create a controller and force the bridge to a released state
    pub fn new(mut driver: D, config: &ActuatorConfig) -> Self {
        driver.release();

        // A boot position of Moving has no move behind it
        let position = match config.motion.default_position {
            Position::Moving => Position::Unknown,
            p => p,
        };

        Self {
            driver,
            durations: DurationTable::from_config(&config.motion),
            duty_percent: config.drive.duty_percent.min(100),
            progress_interval_ms: config.motion.progress_interval_ms,
            home: config.motion.home,
            position,
            active: None,
            estop: EstopMonitor::new(config.estop.active_low),
        }
    }

    /// Believed position
    pub fn position(&self) -> Position {
        self.position
    }

    /// In-flight move, if any
    pub fn active_move(&self) -> Option<&Move> {
        self.active.as_ref()
    }

    /// Target of the in-flight move
    pub fn target(&self) -> Option<Station> {
        self.active.map(|m| m.target)
    }

    /// Check if a move is in flight
    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// Check if the emergency stop is latched
    pub fn estop_active(&self) -> bool {
        self.estop.is_active()
    }

    /// Duration table in use
    pub fn durations(&self) -> &DurationTable {
        &self.durations
    }

    /// Motor bridge
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Request a move to `target`
    ///
    /// Refused while the e-stop is latched, when already resting at
    /// `target`, or when already moving to `target` (the running timer is
    /// kept). Requesting the opposite station mid-move reverses at once
    /// with worst-case timing, since the origin is then unknown.
    pub fn request_move(&mut self, target: Station, now_ms: u32) -> MotionEvent {
        if self.estop.is_active() {
            return MotionEvent::EstopRejected;
        }

        if self.target() == Some(target) {
            return MotionEvent::AlreadyMovingTo(target);
        }

        if self.position == Position::from(target) {
            return MotionEvent::AlreadyAt(target);
        }

        let expected_ms = self.durations.expected_ms(self.position, target);
        self.begin(target, expected_ms, now_ms)
    }

    /// Forget the current position and move to the home station
    ///
    /// Always uses the worst-case duration. While the e-stop is latched the
    /// request is refused and nothing changes.
    pub fn home(&mut self, now_ms: u32) -> MotionEvent {
        if self.estop.is_active() {
            return MotionEvent::EstopRejected;
        }

        self.active = None;
        self.position = Position::Unknown;

        let expected_ms = self.durations.worst_case_ms();
        self.begin(self.home, expected_ms, now_ms)
    }

    /// Advance move bookkeeping
    ///
    /// Completes the move when its timer expires, otherwise emits at most
    /// one progress event per progress interval.
    pub fn tick(&mut self, now_ms: u32) -> Option<MotionEvent> {
        let mut active = self.active?;
        let elapsed_ms = active.elapsed_ms(now_ms);

        if elapsed_ms >= active.expected_ms {
            self.driver.release();
            self.active = None;
            self.position = Position::from(active.target);
            return Some(MotionEvent::Reached(active.target));
        }

        if self.progress_interval_ms == 0 {
            return None;
        }

        let window = elapsed_ms / self.progress_interval_ms;
        if window > active.progress_window {
            active.progress_window = window;
            self.active = Some(active);
            return Some(MotionEvent::Progress {
                target: active.target,
                elapsed_ms,
                expected_ms: active.expected_ms,
            });
        }

        None
    }

    /// Halt immediately
    ///
    /// The bridge is released unconditionally. An interrupted move leaves
    /// the position unknown; stopping while idle keeps it.
    pub fn stop(&mut self) -> MotionEvent {
        self.driver.release();

        let interrupted = self.active.take().map(|m| m.target);
        if interrupted.is_some() {
            self.position = Position::Unknown;
        }

        MotionEvent::Stopped { interrupted }
    }

    /// Sample the emergency stop input
    ///
    /// A press halts the drive and latches the stop; a release clears the
    /// latch. Stable levels produce nothing.
    pub fn check_emergency_stop(&mut self, input_high: bool) -> Option<MotionEvent> {
        match self.estop.update(input_high)? {
            EstopEdge::Pressed => {
                self.stop();
                Some(MotionEvent::EstopActivated)
            }
            EstopEdge::Released => Some(MotionEvent::EstopReleased),
        }
    }

    /// Current status for reporting
    pub fn status(&self) -> Status {
        if self.estop.is_active() {
            return Status::Estop;
        }

        match (self.position, self.active) {
            (Position::Moving, Some(m)) => Status::MovingTo(m.target),
            (Position::A, _) => Status::At(Station::A),
            (Position::B, _) => Status::At(Station::B),
            _ => Status::Unknown,
        }
    }

    fn begin(&mut self, target: Station, expected_ms: u32, now_ms: u32) -> MotionEvent {
        self.driver.drive(target.into(), self.duty_percent);
        self.position = Position::Moving;
        self.active = Some(Move {
            target,
            started_ms: now_ms,
            expected_ms,
            progress_window: 0,
        });

        MotionEvent::MoveStarted {
            target,
            expected_ms,
        }
    }
}
