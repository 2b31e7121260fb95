use smallvec::SmallVec;
use web_time::Instant;

/// Pending close evaluations, in firing order.
///
/// Entries are never removed early; each one re-checks the menu state when
/// it fires.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    due: SmallVec<[Instant; 4]>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant) {
        let pos = self.due.partition_point(|&t| t <= at);
        self.due.insert(pos, at);
    }

    /// Removes every entry due at or before `now` and returns how many.
    pub fn take_due(&mut self, now: Instant) -> usize {
        let n = self.due.partition_point(|&t| t <= now);
        self.due.drain(..n);
        n
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.due.first().copied()
    }

    pub fn len(&self) -> usize {
        self.due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }
}
