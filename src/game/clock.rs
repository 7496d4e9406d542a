use std::time::Duration;

/// Fixed-step accumulator. Display frames feed elapsed time in, whole simulation
/// steps come out, and the remainder carries into the next frame.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulated: Duration,
    max_steps: u32,
}

impl FixedStep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step: step.max(Duration::from_micros(1)),
            accumulated: Duration::ZERO,
            max_steps: max_steps.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Returns how many steps are due. A backlog beyond `max_steps` is dropped in
    /// whole steps; the sub-step remainder is always kept.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let due = self.accumulated.as_nanos() / self.step.as_nanos();
        let remainder = self.accumulated.as_nanos() % self.step.as_nanos();
        self.accumulated = Duration::from_nanos(remainder as u64);
        due.min(self.max_steps as u128) as u32
    }
}
