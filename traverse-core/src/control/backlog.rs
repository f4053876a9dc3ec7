//! Outbound reply accounting
//!
//! Replies leave the control loop through a bounded queue that must never
//! block it. When the queue is full a reply is dropped and counted; the
//! next reply that fits is preceded by one notice telling the host how
//! many lines it missed.

/// What to do with the next outbound reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Admission {
    /// Queue the reply
    Send,
    /// Queue a drop notice carrying the count, then the reply
    NoticeThenSend(u32),
    /// No room; the reply is counted as dropped
    Drop,
}

/// Dropped-reply counter for a non-blocking reply queue
#[derive(Debug, Clone, Default)]
pub struct ReplyBacklog {
    dropped: u32,
}

impl ReplyBacklog {
    /// Create a backlog with nothing dropped
    pub const fn new() -> Self {
        Self { dropped: 0 }
    }

    /// Decide the fate of one reply given the free queue slots
    ///
    /// A pending notice needs two slots so it is never separated from the
    /// reply that follows it.
    pub fn admit(&mut self, free_slots: usize) -> Admission {
        let needed = if self.dropped == 0 { 1 } else { 2 };

        if free_slots < needed {
            self.dropped = self.dropped.saturating_add(1);
            return Admission::Drop;
        }

        match core::mem::take(&mut self.dropped) {
            0 => Admission::Send,
            count => Admission::NoticeThenSend(count),
        }
    }

    /// Replies dropped since the last notice
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_sends() {
        let mut backlog = ReplyBacklog::new();
        assert_eq!(backlog.admit(1), Admission::Send);
        assert_eq!(backlog.admit(16), Admission::Send);
        assert_eq!(backlog.dropped(), 0);
    }

    #[test]
    fn test_full_queue_drops_then_notifies_once() {
        let mut backlog = ReplyBacklog::new();
        assert_eq!(backlog.admit(0), Admission::Drop);
        assert_eq!(backlog.admit(0), Admission::Drop);
        assert_eq!(backlog.dropped(), 2);

        // One slot is not enough for the notice and the reply
        assert_eq!(backlog.admit(1), Admission::Drop);
        assert_eq!(backlog.dropped(), 3);

        assert_eq!(backlog.admit(2), Admission::NoticeThenSend(3));
        assert_eq!(backlog.dropped(), 0);
        assert_eq!(backlog.admit(2), Admission::Send);
    }
}
