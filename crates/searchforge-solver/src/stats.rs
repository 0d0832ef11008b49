//! Phase statistics.

use std::time::{Duration, Instant};

/// Metrics for a single solver phase.
///
/// # Example
///
/// ```
/// use searchforge_solver::PhaseStats;
///
/// let mut stats = PhaseStats::new(1, "MinConflicts");
/// stats.record_step();
/// stats.record_sample(false);
/// stats.record_sample(true);
///
/// assert_eq!(stats.phase_type, "MinConflicts");
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.samples_drawn, 2);
/// assert_eq!(stats.samples_rejected, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PhaseStats {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase.
    pub phase_type: &'static str,
    start_time: Instant,
    elapsed: Option<Duration>,
    /// Queens placed or moved.
    pub step_count: u64,
    /// Random columns drawn while looking for a conflicted queen.
    pub samples_drawn: u64,
    /// Drawn columns whose queen was not in conflict.
    pub samples_rejected: u64,
    /// Attacking queen pairs when the phase ended.
    pub final_conflicts: u64,
}

impl PhaseStats {
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            start_time: Instant::now(),
            elapsed: None,
            step_count: 0,
            samples_drawn: 0,
            samples_rejected: 0,
            final_conflicts: 0,
        }
    }

    /// Records a step completion.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Records a column draw; `conflicted` is whether it was accepted.
    pub fn record_sample(&mut self, conflicted: bool) {
        self.samples_drawn += 1;
        if !conflicted {
            self.samples_rejected += 1;
        }
    }

    /// Freezes the elapsed time and stores the final conflict count.
    pub fn finish(&mut self, final_conflicts: u64) {
        self.elapsed = Some(self.start_time.elapsed());
        self.final_conflicts = final_conflicts;
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start_time.elapsed())
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Returns the steps per second rate.
    pub fn steps_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.step_count as f64 / secs) as u64
        } else {
            0
        }
    }
}
