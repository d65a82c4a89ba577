use crate::log;

/// Turns host frame timestamps into a whole number of fixed-interval logical steps.
pub struct TickScheduler {
    interval_ms: f64,
    max_steps_per_frame: u32,
    last_timestamp_ms: Option<f64>,
    accumulator_ms: f64,
}

impl TickScheduler {
    pub fn new(interval_ms: f64, max_steps_per_frame: u32) -> Self {
        Self {
            interval_ms,
            max_steps_per_frame: max_steps_per_frame.max(1),
            last_timestamp_ms: None,
            accumulator_ms: 0.0,
        }
    }

    /// Records a frame and returns how many steps are due.
    ///
    /// The first call only sets the reference timestamp. Backlog beyond
    /// `max_steps_per_frame` is dropped, keeping the sub-interval remainder.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> u32 {
        let Some(last) = self.last_timestamp_ms.replace(timestamp_ms) else {
            return 0;
        };
        self.accumulator_ms += (timestamp_ms - last).max(0.0);

        let mut steps = 0;
        while self.accumulator_ms >= self.interval_ms && steps < self.max_steps_per_frame {
            self.accumulator_ms -= self.interval_ms;
            steps += 1;
        }

        if self.accumulator_ms >= self.interval_ms {
            let dropped = (self.accumulator_ms / self.interval_ms).floor();
            self.accumulator_ms -= dropped * self.interval_ms;
            log!("Frame stalled; dropped {} pending steps", dropped as u64);
        }
        steps
    }

    /// Forgets unconsumed time but keeps the reference timestamp.
    pub fn clear(&mut self) {
        self.accumulator_ms = 0.0;
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulator_ms
    }
}
