//! Events produced by motion operations

use traverse_protocol::{Reply, Station};

/// Outcome of a motion operation or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionEvent {
    // Move requests
    /// Move accepted and bridge energized
    MoveStarted { target: Station, expected_ms: u32 },
    /// Requested target is the confirmed position
    AlreadyAt(Station),
    /// Requested target is the one already being driven to
    AlreadyMovingTo(Station),
    /// Request refused while the emergency stop is latched
    EstopRejected,

    // Tick
    /// Periodic progress of the in-flight move
    Progress {
        target: Station,
        elapsed_ms: u32,
        expected_ms: u32,
    },
    /// Move timer expired; position is now the target
    Reached(Station),

    // Stop
    /// Bridge released; carries the target of an interrupted move
    Stopped { interrupted: Option<Station> },

    // Emergency stop edges
    /// Emergency stop pressed; drive halted
    EstopActivated,
    /// Emergency stop released
    EstopReleased,
}

impl MotionEvent {
    /// Host-facing reply for this event
    pub fn reply(&self) -> Reply<'static> {
        match *self {
            MotionEvent::MoveStarted {
                target,
                expected_ms,
            } => Reply::MovingTo {
                station: target,
                estimate_ms: expected_ms,
            },
            MotionEvent::AlreadyAt(station) => Reply::AlreadyAt(station),
            MotionEvent::AlreadyMovingTo(station) => Reply::AlreadyMovingTo(station),
            MotionEvent::EstopRejected => Reply::EstopRejected,
            MotionEvent::Progress {
                elapsed_ms,
                expected_ms,
                ..
            } => Reply::Progress {
                elapsed_ms,
                expected_ms,
            },
            MotionEvent::Reached(station) => Reply::Reached(station),
            MotionEvent::Stopped { .. } => Reply::Stopped,
            MotionEvent::EstopActivated => Reply::EstopActivated,
            MotionEvent::EstopReleased => Reply::EstopReleased,
        }
    }

    /// Check if a status report should follow this event
    pub fn reports_status(&self) -> bool {
        matches!(
            self,
            MotionEvent::Reached(_)
                | MotionEvent::Stopped { .. }
                | MotionEvent::EstopActivated
                | MotionEvent::EstopReleased
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_state_changes() {
        assert!(MotionEvent::Reached(Station::A).reports_status());
        assert!(MotionEvent::Stopped { interrupted: None }.reports_status());
        assert!(MotionEvent::EstopActivated.reports_status());
        assert!(!MotionEvent::EstopRejected.reports_status());
        assert!(!MotionEvent::MoveStarted {
            target: Station::B,
            expected_ms: 1
        }
        .reports_status());
    }

    #[test]
    fn test_progress_reply() {
        let event = MotionEvent::Progress {
            target: Station::B,
            elapsed_ms: 5_000,
            expected_ms: 14_000,
        };
        assert_eq!(
            event.reply(),
            Reply::Progress {
                elapsed_ms: 5_000,
                expected_ms: 14_000
            }
        );
    }
}
