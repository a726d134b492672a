use crate::core::transaction::TransactionId;

pub type Clock = fn() -> TransactionId;

fn wall_clock_millis() -> TransactionId {
    let millis = chrono::Utc::now().timestamp_millis();
    return if millis < 0 { 0 } else { millis as TransactionId };
}

/// Hands out transaction ids derived from the wall clock, but never
/// the same id twice: if the clock has not advanced (or went backwards)
/// since the previous id, the previous id plus one is used instead.
/// Once the id space above the last id is used up, `next` gives `None`.
pub struct IdGenerator {
    clock: Clock,
    last: Option<TransactionId>
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new()
    }
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        IdGenerator::with_clock(wall_clock_millis)
    }

    pub fn with_clock(clock: Clock) -> IdGenerator {
        IdGenerator { clock, last: None }
    }

    /// Make sure every future id is strictly greater than `id`.
    pub fn observe(&mut self, id: TransactionId) {
        self.last = Some(match self.last {
            Some(last) => last.max(id),
            None => id
        });
    }

    pub fn next(&mut self) -> Option<TransactionId> {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now
        };
        self.last = Some(id);
        return Some(id);
    }
}
